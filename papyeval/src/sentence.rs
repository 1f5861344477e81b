use serde::{Deserialize, Serialize};

use crate::errors::{PapyevalError, Result};

/// Sentence with gold tag annotations.
///
/// Tokens and tags are index-aligned: the i-th tag annotates the i-th token.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(try_from = "SentenceRecord", into = "SentenceRecord")]
pub struct Sentence {
    pub(crate) id: String,
    pub(crate) tokens: Vec<String>,
    pub(crate) tags: Vec<String>,
}

/// Serialized shape of a [`Sentence`] in evaluation fixtures.
#[derive(Serialize, Deserialize)]
struct SentenceRecord {
    id: String,
    tokens: Vec<String>,
    pos_tags: Vec<String>,
}

impl TryFrom<SentenceRecord> for Sentence {
    type Error = PapyevalError;

    fn try_from(record: SentenceRecord) -> Result<Self> {
        Self::new(record.id, record.tokens, record.pos_tags)
    }
}

impl From<Sentence> for SentenceRecord {
    fn from(sentence: Sentence) -> Self {
        Self {
            id: sentence.id,
            tokens: sentence.tokens,
            pos_tags: sentence.tags,
        }
    }
}

impl Sentence {
    /// Creates a new [`Sentence`].
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the sentence.
    /// * `tokens` - Word forms.
    /// * `tags` - Gold tags, one per token.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tokens` is empty.
    /// * `tokens` and `tags` have different lengths.
    pub fn new<S>(id: S, tokens: Vec<String>, tags: Vec<String>) -> Result<Self>
    where
        S: Into<String>,
    {
        let id = id.into();
        if tokens.is_empty() {
            return Err(PapyevalError::invalid_argument(
                "tokens",
                format!("sentence {id} is empty"),
            ));
        }
        if tokens.len() != tags.len() {
            return Err(PapyevalError::invalid_argument(
                "tags",
                format!(
                    "sentence {id} has {} tokens but {} tags",
                    tokens.len(),
                    tags.len()
                ),
            ));
        }
        Ok(Self { id, tokens, tags })
    }

    /// Creates a new [`Sentence`] from a tagged string.
    ///
    /// Tokens are separated by whitespaces, and each token is followed by a slash and its tag.
    ///
    /// # Errors
    ///
    /// If `tagged_text` is empty or a token has no tag, an error variant will be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use papyeval::Sentence;
    ///
    /// let s = Sentence::from_tagged("1", "καὶ/c-------- ἔγραψα/v1saia---").unwrap();
    /// assert_eq!(&["καὶ", "ἔγραψα"], s.tokens());
    /// assert_eq!(&["c--------", "v1saia---"], s.tags());
    ///
    /// assert!(Sentence::from_tagged("1", "καὶ").is_err());
    /// ```
    pub fn from_tagged<S>(id: S, tagged_text: &str) -> Result<Self>
    where
        S: Into<String>,
    {
        let mut tokens = vec![];
        let mut tags = vec![];
        for item in tagged_text.split_whitespace() {
            let (token, tag) = item.rsplit_once('/').ok_or_else(|| {
                PapyevalError::invalid_argument(
                    "tagged_text",
                    format!("token without a tag: {item:?}"),
                )
            })?;
            tokens.push(token.to_string());
            tags.push(tag.to_string());
        }
        Self::new(id, tokens, tags)
    }

    /// Gets the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the word forms.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Gets the gold tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Gets a mutable reference to the gold tags.
    ///
    /// The number of tags cannot be changed through this reference.
    pub fn tags_mut(&mut self) -> &mut [String] {
        &mut self.tags
    }

    /// Gets the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always returns `false`; a sentence has at least one token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Gets the text passed to a tagger: the tokens joined by single spaces.
    pub fn to_plain_text(&self) -> String {
        self.tokens.join(" ")
    }
}
