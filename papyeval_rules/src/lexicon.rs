use hashbrown::{HashMap, HashSet};
use papyeval::tag::category;
use papyeval::DenyList;

use crate::token_filters::plain;

/// Substring marking numerals in annotated forms.
pub const NUMERAL_MARKER: &str = "num";

/// Placeholder for forms without any Greek letter.
pub const NON_GREEK_PLACEHOLDER: &str = "αβγδεφηιξκλμ";

/// Placeholder for tokens that normalize to nothing.
pub const ELIDED: &str = "γ";

/// Punctuation glyphs as they appear in annotated forms.
///
/// Any non-empty substring of this run is a punctuation token.
pub const PUNCTUATION_RUN: &str = ",..\u{b7}\u{37e};:\u{387}.";

/// Non-letter characters kept by plain normalization.
pub const PLAIN_PUNCTUATION: &[char] = &[',', '.', '\u{b7}', '\u{37e}', ';', '\u{387}', '_'];

/// The coordinator always annotated as a conjunction on the database side.
pub const COORDINATOR: &str = "και";

const SKIPS: &[&str] = &[
    "εγω",
    "μου",
    "μοι",
    "με",
    "εμε",
    "υμων",
    "σε",
    "σοι",
    "υμας",
    "υμιν",
    "σου",
    "συ",
    "ημιν",
    "ημεας",
    "ημειν",
    "ημας",
    "ημεις",
    "ημων",
    "εμοι",
    "σεαυτου",
    "ταελολους",
    "ασπασαι",
    "πυρου",
    "βουβαστωι",
    "επιτροπου",
    "δει",
];

const CONJUNCTIONS: &[&str] = &[
    "αμα", "δε", "δ", "ινʼ", "ινα", "και", "ως", "μηδ", "μηδε", "καθως", "αλλ",
];

const ADVERBS: &[&str] = &[
    "θʼ", "τε", "αμα", "μεταξυ", "πολυ", "μαλλον", "καθαπαξ", "καλως", "μη",
];

const PREPOSITIONS: &[&str] = &["αχρι", "εως"];

// Month names and other indeclinable nouns.
const NOUNS: &[&str] = &[
    "αππα",
    "μεσορη",
    "μεχειρ",
    "φαωφι",
    "παυνι",
    "αθυρ",
    "χοιαχ",
    "επειφ",
    "παχων",
    "φαμενωθ",
    "φαρμουθι",
    "χοιακ",
    "θωυθ",
    "τυβι",
    "θωθ",
];

// Matched on the token as written.
const FORM_OVERRIDES: &[(&str, &str)] = &[
    ("ὧν", "p-p---mg-"),
    ("ἀλλά", "c--------"),
    ("ὅτι", "c--------"),
];

// Matched on the plain token.
const PLAIN_OVERRIDES: &[(&str, &str)] = &[
    ("εγω", "p1s---mn-"),
    ("μου", "p1s----g-"),
    ("με", "p1s----a-"),
    ("εμε", "p1s----a-"),
    ("μοι", "p1s----d-"),
    ("υμων", "p2p---mg-"),
    ("σε", "p2s----a-"),
    ("σοι", "p2s----d-"),
    ("υμας", "p2p----a-"),
    ("υμιν", "p2p----d-"),
    ("σου", "p2s----g-"),
    ("συ", "p2s---mn-"),
    ("ημιν", "p1p---md-"),
    ("ημεας", "p1p---ma-"),
    ("ημας", "p1p---ma-"),
    ("ημεις", "p1p---mn-"),
    ("ημων", "p1p---mg-"),
    ("σεαυτου", "p2s---mg-"),
    ("εμοι", "p1s---md-"),
    ("ημειν", "p-p---md-"),
    ("ταελολους", "n-s---fn-"),
    ("ασπασαι", "v2same---"),
    ("πυρου", "n-s---mg-"),
    ("βουβαστω", "n-s---md-"),
    ("επιτροπου", "a-s---mg-"),
    ("δει", "v3spia---"),
];

/// Closed lexical class whose members are tagged by rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexicalClass {
    Conjunction,
    Adverb,
    Preposition,
    Noun,
}

impl LexicalClass {
    /// Gets the canonical tag of the class.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Conjunction => category::CONJUNCTION,
            Self::Adverb => category::ADVERB,
            Self::Preposition => category::PREPOSITION,
            Self::Noun => category::NOUN,
        }
    }
}

/// Closed word lists and per-token tag overrides.
///
/// All lookups except [`Lexicon::form_override`] take plain tokens.
#[derive(Debug, Clone)]
pub struct Lexicon {
    skips: HashSet<&'static str>,
    classes: [(LexicalClass, HashSet<&'static str>); 4],
    form_overrides: HashMap<&'static str, &'static str>,
    plain_overrides: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Creates a lexicon holding the built-in lists.
    pub fn new() -> Self {
        let set = |words: &[&'static str]| words.iter().copied().collect::<HashSet<_>>();
        Self {
            skips: set(SKIPS),
            classes: [
                (LexicalClass::Conjunction, set(CONJUNCTIONS)),
                (LexicalClass::Adverb, set(ADVERBS)),
                (LexicalClass::Preposition, set(PREPOSITIONS)),
                (LexicalClass::Noun, set(NOUNS)),
            ],
            form_overrides: FORM_OVERRIDES.iter().copied().collect(),
            plain_overrides: PLAIN_OVERRIDES.iter().copied().collect(),
        }
    }

    /// Gets the overriding tag of a token as written.
    pub fn form_override(&self, token: &str) -> Option<&'static str> {
        self.form_overrides.get(token).copied()
    }

    /// Gets the overriding tag of a plain token.
    pub fn plain_override(&self, token: &str) -> Option<&'static str> {
        self.plain_overrides.get(token).copied()
    }

    /// Gets the closed class of a plain token.
    ///
    /// Classes are tried in the order conjunction, adverb, preposition, noun.
    pub fn closed_class(&self, token: &str) -> Option<LexicalClass> {
        self.classes
            .iter()
            .find(|(_, words)| words.contains(token))
            .map(|&(class, _)| class)
    }

    /// Returns `true` if a plain token is a skip word or belongs to a closed class.
    pub fn is_excluded(&self, token: &str) -> bool {
        self.skips.contains(token) || self.closed_class(token).is_some()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl DenyList for Lexicon {
    fn contains(&self, token: &str) -> bool {
        self.is_excluded(&plain(token))
    }
}
