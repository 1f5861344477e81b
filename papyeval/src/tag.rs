//! Positional morphological tags.
//!
//! A tag is a fixed-width string with one character per grammatical category:
//!
//! | slot | category       |
//! |------|----------------|
//! | 0    | part of speech |
//! | 1    | person         |
//! | 2    | number         |
//! | 3    | tense          |
//! | 4    | mood           |
//! | 5    | voice          |
//! | 6    | gender         |
//! | 7    | case           |
//! | 8    | degree         |
//!
//! `-` and `_` both mean "unspecified".

use std::borrow::Cow;

/// Sentinel for unknown or missing tags.
pub const UNKNOWN: &str = "<unk>";

/// Filler used for predictions the tagger did not produce.
pub const PADDING: &str = "_";

/// Canonical "unspecified" placeholder.
pub const UNSPECIFIED: char = '-';

/// Alternative "unspecified" placeholder found in raw annotations.
pub const UNDERSCORE: char = '_';

/// Database-specific marker in the last slot for proper nouns.
pub const PROPER_NOUN_MARKER: char = 'p';

/// Slot of the part of speech.
pub const POS_SLOT: usize = 0;

/// Slot of the gender.
pub const GENDER_SLOT: usize = 6;

/// Whole-tag codes of fixed categories.
pub mod category {
    pub const PUNCTUATION: &str = "u--------";
    pub const NUMERAL: &str = "m--------";
    pub const CONJUNCTION: &str = "c--------";
    pub const ADVERB: &str = "d--------";
    pub const PREPOSITION: &str = "r--------";
    pub const NOUN: &str = "n-s------";
}

/// Replaces a trailing proper-noun marker with the unspecified placeholder.
///
/// # Examples
///
/// ```
/// use papyeval::tag::strip_proper_noun;
///
/// assert_eq!("n-s---mn-", strip_proper_noun("n-s---mnp"));
/// assert_eq!("v3spia---", strip_proper_noun("v3spia---"));
/// ```
pub fn strip_proper_noun(tag: &str) -> Cow<str> {
    match tag.strip_suffix(PROPER_NOUN_MARKER) {
        Some(rest) => {
            let mut stripped = String::with_capacity(tag.len());
            stripped.push_str(rest);
            stripped.push(UNSPECIFIED);
            Cow::Owned(stripped)
        }
        None => Cow::Borrowed(tag),
    }
}

/// Canonicalizes a raw annotation tag.
///
/// The proper-noun marker is stripped, underscores become `-`, and an empty
/// tag becomes [`UNKNOWN`].
///
/// # Examples
///
/// ```
/// use papyeval::tag::canonicalize;
///
/// assert_eq!("n-s---mn-", canonicalize("n-s---mnp"));
/// assert_eq!("a-p---fa-", canonicalize("a_p___fa_"));
/// assert_eq!("<unk>", canonicalize(""));
/// ```
pub fn canonicalize(tag: &str) -> String {
    let tag = strip_proper_noun(tag).replace(UNDERSCORE, "-");
    if tag.is_empty() {
        UNKNOWN.to_string()
    } else {
        tag
    }
}

/// Returns `true` if a gold tag carries an annotation that can be scored.
pub fn is_scorable(tag: &str) -> bool {
    !tag.is_empty() && tag != PADDING && tag != UNKNOWN
}
