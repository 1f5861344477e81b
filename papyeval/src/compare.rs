/// Predictions above this confidence are considered confident.
pub const CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Agreement between a gold tag and a predicted tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Agreement {
    /// Identical tags.
    Equal,

    /// Different tags predicted with a confidence of at most [`CONFIDENCE_THRESHOLD`].
    DisagreeLow,

    /// Different tags predicted with a confidence above [`CONFIDENCE_THRESHOLD`].
    ///
    /// A confident but wrong prediction is the most actionable signal.
    DisagreeHigh,
}

impl Agreement {
    /// Classifies a pair of tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use papyeval::Agreement;
    ///
    /// assert_eq!(Agreement::Equal, Agreement::classify("c--------", "c--------", 0.2));
    /// assert_eq!(Agreement::DisagreeLow, Agreement::classify("c--------", "d--------", 0.9));
    /// assert_eq!(Agreement::DisagreeHigh, Agreement::classify("c--------", "d--------", 0.91));
    /// ```
    pub fn classify(gold: &str, predicted: &str, confidence: f64) -> Self {
        if gold == predicted {
            Self::Equal
        } else if confidence > CONFIDENCE_THRESHOLD {
            Self::DisagreeHigh
        } else {
            Self::DisagreeLow
        }
    }

    /// Returns `true` unless the tags are identical.
    pub const fn is_disagreement(self) -> bool {
        !matches!(self, Self::Equal)
    }
}

/// Result of comparing the tags of one token.
#[derive(Debug, PartialEq, Clone)]
pub struct Comparison {
    pub token: String,
    pub gold: String,
    pub predicted: String,
    pub confidence: f64,
    pub agreement: Agreement,
}

impl Comparison {
    pub fn new<S>(token: S, gold: S, predicted: S, confidence: f64) -> Self
    where
        S: Into<String>,
    {
        let gold = gold.into();
        let predicted = predicted.into();
        let agreement = Agreement::classify(&gold, &predicted, confidence);
        Self {
            token: token.into(),
            gold,
            predicted,
            confidence,
            agreement,
        }
    }
}

/// Compares gold tags with predicted tags position by position.
///
/// `predicted` and `confidences` must have been padded to at least the length of `tokens`;
/// surplus predictions are ignored.
pub fn compare_sentence(
    tokens: &[String],
    gold: &[String],
    predicted: &[String],
    confidences: &[f64],
) -> Vec<Comparison> {
    tokens
        .iter()
        .zip(gold)
        .zip(predicted.iter().zip(confidences))
        .map(|((token, gold), (predicted, &confidence))| {
            Comparison::new(token.as_str(), gold.as_str(), predicted.as_str(), confidence)
        })
        .collect()
}
