//! Rule base normalizers for Papyeval.
//!
//! Gold annotations and tagger outputs follow two independently evolved tagging schemes.
//! The filters of this crate bring tokens and tags from both sides into one canonical form
//! so that they can be compared.
//!
//! ## Examples
//!
//! ```
//! use papyeval_rules::tag_filters::{DatabaseTagFilter, ModelTagFilter};
//! use papyeval_rules::token_filters::PlainFilter;
//! use papyeval_rules::{TagFilter, TokenFilter};
//!
//! assert_eq!("λογος", PlainFilter.filter("Λόγος"));
//!
//! let database = DatabaseTagFilter;
//! assert_eq!("n-s---mn-", database.filter("n-s---mnp", "διονυσιος"));
//!
//! let model = ModelTagFilter::new();
//! assert_eq!("c--------", model.filter("d--------", "καί"));
//! ```

mod assemble;
mod lexicon;

pub mod tag_filters;
pub mod token_filters;

pub use assemble::SentenceAssembler;
pub use lexicon::{LexicalClass, Lexicon};

/// Filter that normalizes a token.
pub trait TokenFilter {
    /// Normalizes a token.
    ///
    /// # Arguments:
    ///
    /// * `token` - Input token.
    ///
    /// # Returns
    ///
    /// A processed token.
    fn filter(&self, token: &str) -> String;
}

/// Filter that normalizes a tag into the canonical scheme.
pub trait TagFilter {
    /// Normalizes a tag.
    ///
    /// # Arguments:
    ///
    /// * `tag` - Input tag.
    /// * `token` - Token annotated by the tag.
    ///
    /// # Returns
    ///
    /// A canonical tag.
    fn filter(&self, tag: &str, token: &str) -> String;
}
