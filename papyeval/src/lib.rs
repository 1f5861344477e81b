#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Papyeval
//!
//! Papyeval compares the output of a part-of-speech tagger with the gold annotations of a
//! papyrological corpus.
//!
//! ## Examples
//!
//! ```
//! use papyeval::{pad, tag, CannedTagger, DenyList, Label, Scorer, Sentence, Tagger};
//!
//! struct NoExclusions;
//!
//! impl DenyList for NoExclusions {
//!     fn contains(&self, _: &str) -> bool {
//!         false
//!     }
//! }
//!
//! let sentence = Sentence::from_tagged("1", "λόγος/n-s---mn- ./<unk>").unwrap();
//!
//! let mut tagger = CannedTagger::new();
//! tagger.insert("λόγος .", vec![Label::new("n-s---mn-", 0.95)]);
//! let labels = tagger.predict(&sentence.to_plain_text()).unwrap();
//!
//! let predicted = labels.iter().map(|l| l.value.clone()).collect();
//! let confidences = labels.iter().map(|l| l.confidence).collect();
//! let predicted = pad(predicted, sentence.tags(), tag::PADDING.to_string());
//! let confidences = pad(confidences, sentence.tags(), 0.0);
//!
//! let mut scorer = Scorer::new(NoExclusions);
//! scorer
//!     .score_sentence(sentence.tokens(), sentence.tags(), &predicted, &confidences)
//!     .unwrap();
//! assert_eq!(Some(1.0), scorer.totals().accuracy());
//! assert_eq!(1, scorer.totals().samples());
//! ```
//!
//! Reading corpora from SQLite requires **crate feature** `sqlite` (enabled by default).

mod align;
mod compare;
mod corpus;
mod dataset;
mod errors;
mod predictor;
mod score;
mod sentence;

pub mod tag;

pub use align::pad;
pub use compare::{compare_sentence, Agreement, Comparison, CONFIDENCE_THRESHOLD};
pub use corpus::{group_by_sentence, CorpusProvider, Document, TokenRecord};
pub use dataset::{read_fixture, write_fixture};
pub use errors::{CorpusError, InvalidArgumentError, PapyevalError, Result};
pub use predictor::{CannedTagger, Label, Tagger};
pub use score::{DenyList, Scorer, Totals};
pub use sentence::Sentence;

#[cfg(feature = "sqlite")]
pub use corpus::SqliteCorpus;
