use indexmap::IndexMap;

use crate::compare::CONFIDENCE_THRESHOLD;
use crate::errors::{PapyevalError, Result};
use crate::tag;

/// Set of tokens excluded from scoring.
///
/// Excluded tokens belong to classes considered solved; they are credited as correct
/// instead of being compared.
pub trait DenyList {
    /// Returns `true` if `token` is excluded. `token` is given as it appears in the sentence.
    fn contains(&self, token: &str) -> bool;
}

impl<D> DenyList for &D
where
    D: DenyList + ?Sized,
{
    fn contains(&self, token: &str) -> bool {
        (**self).contains(token)
    }
}

/// Running totals of an evaluation run.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Totals {
    /// Correct predictions.
    pub goods: usize,

    /// Wrong predictions.
    pub bads: usize,

    /// Correct predictions above the confidence threshold.
    pub goods_acc: usize,

    /// Wrong predictions above the confidence threshold.
    pub bads_acc: usize,
}

impl Totals {
    /// Number of scored samples.
    pub const fn samples(&self) -> usize {
        self.goods + self.bads
    }

    /// Number of scored samples above the confidence threshold.
    pub const fn confident_samples(&self) -> usize {
        self.goods_acc + self.bads_acc
    }

    /// `goods / (goods + bads)`, or `None` before anything is scored.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.goods, self.samples())
    }

    /// `goods_acc / (goods_acc + bads_acc)`, or `None` before anything is scored.
    pub fn confidence_filtered_accuracy(&self) -> Option<f64> {
        ratio(self.goods_acc, self.confident_samples())
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

/// Accumulates agreement statistics over a corpus.
pub struct Scorer<D> {
    deny_list: D,
    totals: Totals,
    mismatches: IndexMap<String, usize>,
}

impl<D> Scorer<D>
where
    D: DenyList,
{
    /// Creates a new scorer.
    ///
    /// # Arguments
    ///
    /// * `deny_list` - Tokens credited as correct without comparison.
    pub fn new(deny_list: D) -> Self {
        Self {
            deny_list,
            totals: Totals::default(),
            mismatches: IndexMap::new(),
        }
    }

    /// Scores one token.
    pub fn score_token(&mut self, token: &str, gold: &str, predicted: &str, confidence: f64) {
        if self.deny_list.contains(token) {
            self.totals.goods += 1;
            self.totals.goods_acc += 1;
            return;
        }
        if !tag::is_scorable(gold) {
            return;
        }
        let agree = gold == predicted;
        if agree {
            self.totals.goods += 1;
        } else {
            self.totals.bads += 1;
            *self.mismatches.entry(token.to_string()).or_insert(0) += 1;
        }
        if confidence > CONFIDENCE_THRESHOLD {
            if agree {
                self.totals.goods_acc += 1;
            } else {
                self.totals.bads_acc += 1;
            }
        }
    }

    /// Scores every token of a sentence.
    ///
    /// # Errors
    ///
    /// `predicted` and `confidences` must be at least as long as `tokens`, and `gold` exactly
    /// as long; otherwise an error variant will be returned and nothing is scored.
    pub fn score_sentence(
        &mut self,
        tokens: &[String],
        gold: &[String],
        predicted: &[String],
        confidences: &[f64],
    ) -> Result<()> {
        if gold.len() != tokens.len() {
            return Err(PapyevalError::invalid_argument(
                "gold",
                format!("{} tags for {} tokens", gold.len(), tokens.len()),
            ));
        }
        if predicted.len() < tokens.len() || confidences.len() < tokens.len() {
            return Err(PapyevalError::invalid_argument(
                "predicted",
                format!(
                    "{} tags and {} confidences for {} tokens",
                    predicted.len(),
                    confidences.len(),
                    tokens.len()
                ),
            ));
        }
        for (i, token) in tokens.iter().enumerate() {
            self.score_token(token, &gold[i], &predicted[i], confidences[i]);
        }
        Ok(())
    }

    /// Gets the running totals.
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Gets the `n` tokens with the most mismatches, in descending order of count.
    ///
    /// Tokens with equal counts keep the order in which they were first mismatched.
    pub fn top_mismatches(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranking: Vec<_> = self
            .mismatches
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1));
        ranking.truncate(n);
        ranking
    }
}
