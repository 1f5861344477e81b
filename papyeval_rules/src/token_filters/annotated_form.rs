use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::{NON_GREEK_PLACEHOLDER, NUMERAL_MARKER, PUNCTUATION_RUN};
use crate::TokenFilter;

static NON_GREEK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\P{Script=Greek}").unwrap());

type FormRule = fn(&str) -> Option<String>;

// First match wins.
const FORM_RULES: [FormRule; 3] = [numeral, greek_letters, punctuation];

fn numeral(form: &str) -> Option<String> {
    form.contains(NUMERAL_MARKER)
        .then(|| NUMERAL_MARKER.to_string())
}

fn greek_letters(form: &str) -> Option<String> {
    let letters = NON_GREEK.replace_all(form, "");
    (!letters.is_empty()).then(|| letters.into_owned())
}

fn punctuation(form: &str) -> Option<String> {
    PUNCTUATION_RUN.contains(form).then(|| form.to_string())
}

/// Classifier of word forms as annotated in the corpus.
///
/// A form containing `num` becomes `num`. Otherwise its Greek-script characters are kept.
/// A form without any is kept if it is punctuation, and replaced by a placeholder for
/// non-Greek material otherwise.
#[derive(Clone, Copy, Default)]
pub struct AnnotatedFormFilter;

impl TokenFilter for AnnotatedFormFilter {
    fn filter(&self, form: &str) -> String {
        FORM_RULES
            .iter()
            .find_map(|rule| rule(form))
            .unwrap_or_else(|| NON_GREEK_PLACEHOLDER.to_string())
    }
}
