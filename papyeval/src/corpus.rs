//! Access to annotated corpora.

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCorpus;

use crate::errors::Result;

/// Annotated document of a corpus.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Document {
    pub id: i64,
}

/// Token of a document as stored in the corpus.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TokenRecord {
    /// Index of the sentence within the document.
    pub sentence_index: i64,

    /// Index of the token within the sentence.
    pub position_index: i64,

    /// Word form as annotated, with diacritics and editorial marks.
    pub raw_form: String,

    /// Gold tag as annotated. Empty when missing.
    pub raw_gold_tag: String,
}

/// Source of annotated documents.
pub trait CorpusProvider {
    /// Lists documents that carry annotations.
    fn list_annotated_documents(&self) -> Result<Vec<Document>>;

    /// Lists the tokens of a document, ordered by sentence then position.
    fn list_tokens(&self, document_id: i64) -> Result<Vec<TokenRecord>>;
}

/// Splits a token stream into sentences.
///
/// A sentence is a maximal run of consecutive records with the same sentence index.
///
/// # Examples
///
/// ```
/// use papyeval::{group_by_sentence, TokenRecord};
///
/// let record = |sentence_index, position_index| TokenRecord {
///     sentence_index,
///     position_index,
///     raw_form: String::new(),
///     raw_gold_tag: String::new(),
/// };
/// let records = [record(1, 1), record(1, 2), record(2, 1)];
///
/// let sentences: Vec<_> = group_by_sentence(&records).collect();
/// assert_eq!(2, sentences.len());
/// assert_eq!(2, sentences[0].len());
/// ```
pub fn group_by_sentence(records: &[TokenRecord]) -> impl Iterator<Item = &[TokenRecord]> {
    records.chunk_by(|a, b| a.sentence_index == b.sentence_index)
}
