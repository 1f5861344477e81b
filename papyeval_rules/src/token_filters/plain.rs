use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::decompose_canonical;

use crate::lexicon::{ELIDED, PLAIN_PUNCTUATION};
use crate::TokenFilter;

// Letters in the General_Category sense. Number letters and symbols are dropped.
static NOT_KEPT: LazyLock<Regex> = LazyLock::new(|| {
    let punctuation: String = PLAIN_PUNCTUATION.iter().collect();
    Regex::new(&format!(r"[^\p{{L}}{}]", regex::escape(&punctuation))).unwrap()
});

/// Diacritic stripping filter.
///
/// Keeps letters and a few punctuation glyphs, reduces each of them to the first character of
/// its canonical decomposition and lower-cases it. A token left empty becomes `γ`.
#[derive(Clone, Copy, Default)]
pub struct PlainFilter;

impl TokenFilter for PlainFilter {
    fn filter(&self, token: &str) -> String {
        plain(token)
    }
}

/// Returns the plain form of a token. See [`PlainFilter`].
///
/// # Examples
///
/// ```
/// use papyeval_rules::token_filters::plain;
///
/// assert_eq!("ηλθεν", plain("ἦλθεν"));
/// assert_eq!("γ", plain("[12]"));
/// ```
pub fn plain(token: &str) -> String {
    let kept = NOT_KEPT.replace_all(token, "");
    let mut result = String::with_capacity(kept.len());
    for c in kept.chars() {
        let mut base = None;
        decompose_canonical(c, |d| {
            base.get_or_insert(d);
        });
        if let Some(base) = base {
            result.extend(base.to_lowercase());
        }
    }
    if result.is_empty() {
        ELIDED.to_string()
    } else {
        result
    }
}
