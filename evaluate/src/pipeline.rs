use papyeval::{compare_sentence, pad, tag, Comparison, Result, Scorer, Sentence, Tagger};
use papyeval_rules::tag_filters::ModelTagFilter;
use papyeval_rules::{Lexicon, TagFilter};

/// Evaluates a tagger sentence by sentence and keeps the running totals.
pub struct Evaluator<T> {
    tagger: T,
    tag_filter: ModelTagFilter,
    scorer: Scorer<Lexicon>,
}

impl<T> Evaluator<T>
where
    T: Tagger,
{
    pub fn new(tagger: T) -> Self {
        let lexicon = Lexicon::new();
        Self {
            tagger,
            tag_filter: ModelTagFilter::with_lexicon(lexicon.clone()),
            scorer: Scorer::new(lexicon),
        }
    }

    /// Tags a sentence, scores the predictions and returns the token-wise comparison.
    pub fn evaluate(&mut self, sentence: &Sentence) -> Result<Vec<Comparison>> {
        let labels = self.tagger.predict(&sentence.to_plain_text())?;
        if labels.len() > sentence.len() {
            log::warn!(
                "Sentence {}: {} labels for {} tokens, surplus labels are ignored",
                sentence.id(),
                labels.len(),
                sentence.len()
            );
        }

        let tokens = sentence.tokens();
        let predicted = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let token = tokens.get(i).map_or("", String::as_str);
                self.tag_filter.filter(&label.value, token)
            })
            .collect();
        let confidences = labels.iter().map(|label| label.confidence).collect();
        let predicted = pad(predicted, sentence.tags(), tag::PADDING.to_string());
        let confidences = pad(confidences, sentence.tags(), 0.0);

        self.scorer
            .score_sentence(tokens, sentence.tags(), &predicted, &confidences)?;
        Ok(compare_sentence(
            tokens,
            sentence.tags(),
            &predicted,
            &confidences,
        ))
    }

    pub fn scorer(&self) -> &Scorer<Lexicon> {
        &self.scorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use papyeval::{Agreement, CannedTagger, Label, Totals};

    #[test]
    fn test_evaluate_padded_sentence() {
        let sentence = Sentence::from_tagged("1", "λόγος/n-s---mn- ./<unk>").unwrap();
        let mut tagger = CannedTagger::new();
        tagger.insert("λόγος .", vec![Label::new("n-s---mn-", 0.95)]);
        let mut evaluator = Evaluator::new(tagger);

        let comparisons = evaluator.evaluate(&sentence).unwrap();

        assert_eq!("_", comparisons[1].predicted);
        assert_eq!(0.0, comparisons[1].confidence);
        assert_eq!(Agreement::Equal, comparisons[0].agreement);
        let expected = Totals {
            goods: 1,
            bads: 0,
            goods_acc: 1,
            bads_acc: 0,
        };
        assert_eq!(&expected, evaluator.scorer().totals());
    }

    #[test]
    fn test_evaluate_normalizes_labels() {
        let sentence =
            Sentence::from_tagged("1", "ἀγαθός/a-s---mn- ἀλλ/c-------- ὧν/p-p---mg-").unwrap();
        let mut tagger = CannedTagger::new();
        tagger.insert(
            "ἀγαθός ἀλλ ὧν",
            vec![
                Label::new("a-s---cn-", 0.99),
                Label::new("d--------", 0.99),
                Label::new("v-sppamg-", 0.4),
            ],
        );
        let mut evaluator = Evaluator::new(tagger);

        let comparisons = evaluator.evaluate(&sentence).unwrap();

        assert_eq!(
            vec!["a-s---mn-", "c--------", "p-p---mg-"],
            comparisons
                .iter()
                .map(|c| c.predicted.as_str())
                .collect::<Vec<_>>()
        );
        let expected = Totals {
            goods: 3,
            bads: 0,
            goods_acc: 2,
            bads_acc: 0,
        };
        assert_eq!(&expected, evaluator.scorer().totals());
    }

    #[test]
    fn test_evaluate_accumulates_mismatches() {
        let sentence = Sentence::from_tagged("1", "λόγον/n-s---ma- ἔγραψα/v1saia---").unwrap();
        let mut tagger = CannedTagger::new();
        tagger.insert(
            "λόγον ἔγραψα",
            vec![Label::new("n-s---mn-", 0.97), Label::new("v1saia---", 0.6)],
        );
        let mut evaluator = Evaluator::new(tagger);

        let first = evaluator.evaluate(&sentence).unwrap();
        evaluator.evaluate(&sentence).unwrap();

        assert_eq!(Agreement::DisagreeHigh, first[0].agreement);
        assert_eq!(Agreement::Equal, first[1].agreement);
        assert_eq!(vec![("λόγον", 2)], evaluator.scorer().top_mismatches(100));
        let expected = Totals {
            goods: 2,
            bads: 2,
            goods_acc: 0,
            bads_acc: 2,
        };
        assert_eq!(&expected, evaluator.scorer().totals());
    }

    #[test]
    fn test_evaluate_surplus_labels() {
        let sentence = Sentence::from_tagged("1", "λόγος/n-s---mn-").unwrap();
        let mut tagger = CannedTagger::new();
        tagger.insert(
            "λόγος",
            vec![Label::new("n-s---mn-", 0.5), Label::new("u--------", 0.5)],
        );
        let mut evaluator = Evaluator::new(tagger);

        let comparisons = evaluator.evaluate(&sentence).unwrap();

        assert_eq!(1, comparisons.len());
        assert_eq!(1, evaluator.scorer().totals().samples());
    }

    #[test]
    fn test_evaluate_missing_prediction() {
        let sentence = Sentence::from_tagged("1", "λόγος/n-s---mn-").unwrap();
        let mut evaluator = Evaluator::new(CannedTagger::new());

        assert!(evaluator.evaluate(&sentence).is_err());
        assert_eq!(&Totals::default(), evaluator.scorer().totals());
    }
}
