use papyeval::tag::{self, category};

use crate::lexicon::{COORDINATOR, NON_GREEK_PLACEHOLDER, NUMERAL_MARKER, PUNCTUATION_RUN};
use crate::TagFilter;

type TokenRule = (fn(&str) -> bool, &'static str);

// First match wins. Tokens matching none of them keep their canonicalized tag.
const TOKEN_RULES: [TokenRule; 4] = [
    (is_punctuation, category::PUNCTUATION),
    (is_non_greek, tag::UNKNOWN),
    (is_numeral, category::NUMERAL),
    (is_coordinator, category::CONJUNCTION),
];

fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && PUNCTUATION_RUN.contains(token)
}

fn is_non_greek(token: &str) -> bool {
    token == NON_GREEK_PLACEHOLDER
}

fn is_numeral(token: &str) -> bool {
    token == NUMERAL_MARKER
}

fn is_coordinator(token: &str) -> bool {
    token == COORDINATOR
}

/// Normalizer of gold tags stored in the corpus database.
///
/// The token must already be plain-normalized.
#[derive(Clone, Copy, Default)]
pub struct DatabaseTagFilter;

impl TagFilter for DatabaseTagFilter {
    fn filter(&self, raw_tag: &str, token: &str) -> String {
        TOKEN_RULES
            .iter()
            .find(|(matches, _)| matches(token))
            .map_or_else(|| tag::canonicalize(raw_tag), |(_, code)| code.to_string())
    }
}
