use std::io::BufRead;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{PapyevalError, Result};

/// Label predicted for one token.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Raw tag in the tagger's own scheme.
    pub value: String,

    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Label {
    /// Creates a new label.
    pub fn new<S>(value: S, confidence: f64) -> Self
    where
        S: Into<String>,
    {
        Self {
            value: value.into(),
            confidence,
        }
    }
}

/// Part-of-speech tagger.
///
/// Given a sentence as space-separated tokens, a tagger returns one label per token it
/// recognizes. The result may be shorter than the number of input tokens.
pub trait Tagger {
    fn predict(&self, sentence: &str) -> Result<Vec<Label>>;
}

/// Line of a prediction dump.
#[derive(Deserialize)]
struct PredictionRecord {
    sentence: String,
    labels: Vec<Label>,
}

/// Tagger returning predictions recorded in advance.
#[derive(Debug, Default, Clone)]
pub struct CannedTagger {
    predictions: HashMap<String, Vec<Label>>,
}

impl CannedTagger {
    /// Creates an empty tagger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the labels returned for `sentence`.
    pub fn insert<S>(&mut self, sentence: S, labels: Vec<Label>)
    where
        S: Into<String>,
    {
        self.predictions.insert(sentence.into(), labels);
    }

    /// Reads a prediction dump.
    ///
    /// Each non-empty line is a JSON object
    /// `{"sentence": "...", "labels": [{"value": "...", "confidence": 0.9}, ...]}`.
    /// A sentence appearing twice keeps its last labels.
    ///
    /// # Errors
    ///
    /// When reading fails or a line is not a valid record, an error variant will be returned.
    pub fn read<R>(rdr: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut tagger = Self::new();
        for line in rdr.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: PredictionRecord = serde_json::from_str(&line)?;
            tagger.insert(record.sentence, record.labels);
        }
        log::debug!("Loaded predictions for {} sentences", tagger.len());
        Ok(tagger)
    }

    /// Gets the number of recorded sentences.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

impl Tagger for CannedTagger {
    fn predict(&self, sentence: &str) -> Result<Vec<Label>> {
        self.predictions.get(sentence).cloned().ok_or_else(|| {
            PapyevalError::invalid_argument(
                "sentence",
                format!("no prediction recorded for {sentence:?}"),
            )
        })
    }
}
