use papyeval::{group_by_sentence, Result, Sentence, TokenRecord};

use crate::tag_filters::DatabaseTagFilter;
use crate::token_filters::{AnnotatedFormFilter, PlainFilter};
use crate::{TagFilter, TokenFilter};

/// Builds gold sentences from corpus records.
#[derive(Clone, Copy, Default)]
pub struct SentenceAssembler {
    form_filter: AnnotatedFormFilter,
    plain_filter: PlainFilter,
    tag_filter: DatabaseTagFilter,
}

impl SentenceAssembler {
    /// Creates a new assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes the form of a record.
    pub fn token(&self, record: &TokenRecord) -> String {
        self.plain_filter
            .filter(&self.form_filter.filter(&record.raw_form))
    }

    /// Builds the sentences of a document.
    ///
    /// # Arguments
    ///
    /// * `document_id` - Identifier of the document.
    /// * `records` - Tokens of the document, ordered by sentence then position.
    ///
    /// # Returns
    ///
    /// One sentence per run of records sharing a sentence index. Its identifier is the
    /// document identifier, `00000`, and the sentence index.
    ///
    /// # Examples
    ///
    /// ```
    /// use papyeval::TokenRecord;
    /// use papyeval_rules::SentenceAssembler;
    ///
    /// let record = |raw_form: &str, raw_gold_tag: &str| TokenRecord {
    ///     sentence_index: 4,
    ///     position_index: 1,
    ///     raw_form: raw_form.to_string(),
    ///     raw_gold_tag: raw_gold_tag.to_string(),
    /// };
    /// let records = [record("Διονύσιος", "n-s---mnp"), record("χαίρειν", "v--pna---")];
    ///
    /// let sentences = SentenceAssembler::new().assemble(12, &records).unwrap();
    /// assert_eq!("12000004", sentences[0].id());
    /// assert_eq!(&["διονυσιος", "χαιρειν"], sentences[0].tokens());
    /// assert_eq!(&["n-s---mn-", "v--pna---"], sentences[0].tags());
    /// ```
    pub fn assemble(&self, document_id: i64, records: &[TokenRecord]) -> Result<Vec<Sentence>> {
        group_by_sentence(records)
            .map(|run| {
                let tokens: Vec<String> = run.iter().map(|record| self.token(record)).collect();
                let tags = run
                    .iter()
                    .zip(&tokens)
                    .map(|(record, token)| self.tag_filter.filter(&record.raw_gold_tag, token))
                    .collect();
                let id = format!("{document_id}00000{}", run[0].sentence_index);
                Sentence::new(id, tokens, tags)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sentence_index: i64, raw_form: &str, raw_gold_tag: &str) -> TokenRecord {
        TokenRecord {
            sentence_index,
            position_index: 0,
            raw_form: raw_form.to_string(),
            raw_gold_tag: raw_gold_tag.to_string(),
        }
    }

    #[test]
    fn test_assemble_special_forms() {
        let records = vec![
            record(1, "καὶ", "d--------"),
            record(1, "num", "a-p---na-"),
            record(1, "(ἔτους)", "n-s---ng-"),
            record(1, "abc", "n-s---mn-"),
            record(1, "\u{387}", ""),
            record(1, "[12]", "_"),
        ];

        let sentences = SentenceAssembler::new().assemble(5, &records).unwrap();

        assert_eq!(1, sentences.len());
        assert_eq!(
            &["και", "num", "ετους", "αβγδεφηιξκλμ", "\u{b7}", "αβγδεφηιξκλμ"],
            sentences[0].tokens()
        );
        assert_eq!(
            &["c--------", "m--------", "n-s---ng-", "<unk>", "u--------", "<unk>"],
            sentences[0].tags()
        );
    }

    #[test]
    fn test_assemble_empty_form() {
        let records = vec![record(1, "", "v3spia---")];

        let sentences = SentenceAssembler::new().assemble(5, &records).unwrap();

        assert_eq!(&["γ"], sentences[0].tokens());
        assert_eq!(&["v3spia---"], sentences[0].tags());
    }

    #[test]
    fn test_assemble_acrophonic_numeral() {
        let records = vec![
            record(1, "\u{10144}", "m--------"),
            record(1, "δραχμὰς", "n-p---fa-"),
        ];

        let sentences = SentenceAssembler::new().assemble(5, &records).unwrap();

        assert_eq!(&["γ", "δραχμας"], sentences[0].tokens());
        assert_eq!("γ δραχμας", sentences[0].to_plain_text());
    }

    #[test]
    fn test_assemble_groups_sentences() {
        let records = vec![
            record(1, "ἐγὼ", "p1s---mn-"),
            record(2, "γράφω", "v1spia---"),
            record(2, "σοι", "p2s---md-"),
        ];

        let sentences = SentenceAssembler::new().assemble(3, &records).unwrap();

        assert_eq!(
            vec!["3000001", "3000002"],
            sentences.iter().map(|s| s.id()).collect::<Vec<_>>()
        );
        assert_eq!(&["γραφω", "σοι"], sentences[1].tokens());
    }

    #[test]
    fn test_assemble_nothing() {
        assert!(SentenceAssembler::new().assemble(3, &[]).unwrap().is_empty());
    }
}
