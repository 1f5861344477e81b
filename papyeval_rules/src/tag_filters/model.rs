use papyeval::tag::{self, category, GENDER_SLOT, POS_SLOT};

use crate::lexicon::{Lexicon, NUMERAL_MARKER};
use crate::token_filters::plain;
use crate::TagFilter;

// (slot, tagger's value, canonical value). Only the first matching entry is applied.
const SCHEME_REMAP: [(usize, char, char); 3] = [
    (POS_SLOT, 'b', 'c'),
    (POS_SLOT, 'i', 'm'),
    (GENDER_SLOT, 'c', 'm'),
];

/// Translates a tagger label into the slot conventions of the corpus.
fn remap_scheme(label: &str) -> String {
    if label == tag::PADDING || label == tag::UNKNOWN {
        return label.to_string();
    }
    let mut slots: Vec<char> = label.chars().collect();
    if let Some(&(slot, _, canonical)) = SCHEME_REMAP
        .iter()
        .find(|&&(slot, value, _)| slots.get(slot) == Some(&value))
    {
        slots[slot] = canonical;
    }
    slots.into_iter().collect()
}

/// Normalizer of labels predicted by the tagger.
///
/// Known systematic disagreements between the tagger's scheme and the corpus scheme are
/// corrected in this order:
///
/// 1. per-token overrides, on the token as written and then on its plain form;
/// 2. slot remapping between the two schemes;
/// 3. numerals and closed lexical classes, which replace the result of step 2.
#[derive(Clone, Default)]
pub struct ModelTagFilter {
    lexicon: Lexicon,
}

impl ModelTagFilter {
    /// Creates a filter with the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter with a given lexicon.
    pub const fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl TagFilter for ModelTagFilter {
    /// `token` is the token as passed to the tagger, before plain normalization.
    fn filter(&self, label: &str, token: &str) -> String {
        if let Some(tag) = self.lexicon.form_override(token) {
            return tag.to_string();
        }
        let token = plain(token);
        if let Some(tag) = self.lexicon.plain_override(&token) {
            return tag.to_string();
        }
        let remapped = remap_scheme(label);
        if token.contains(NUMERAL_MARKER) {
            return category::NUMERAL.to_string();
        }
        if let Some(class) = self.lexicon.closed_class(&token) {
            return class.tag().to_string();
        }
        remapped
    }
}
