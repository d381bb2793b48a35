//! Classification algorithms.
//!
//! This module implements binary sentiment classification with a
//! Multinomial Naive Bayes model over bag-of-words counts:
//! - [`Label`]: the two sentiment classes
//! - [`ClassModel`]: per-class smoothed log-likelihoods and log-prior
//! - [`MultinomialNB`]: a fitted two-class model with scoring and evaluation
//!
//! # Example
//!
//! ```
//! use aprender_sentiment::classification::{Label, MultinomialNB};
//! use aprender_sentiment::text::{StopWordsFilter, VocabularyBuilder};
//!
//! let stop_words = StopWordsFilter::new(["the"]);
//! let builder = VocabularyBuilder::new(&stop_words);
//!
//! let docs = ["a wonderful film", "the worst film"];
//! let labels = [Label::Positive, Label::Negative];
//!
//! let model = MultinomialNB::fit(&builder, &docs, &labels).expect("valid training data");
//! assert_eq!(model.predict(&builder, "wonderful"), Label::Positive);
//! assert_eq!(model.predict(&builder, "worst"), Label::Negative);
//! ```

pub mod naive_bayes;

pub use naive_bayes::{evaluate, ClassModel, DocumentScores, MultinomialNB};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment class of a document.
///
/// The integer encoding is fixed: `1` is positive, `0` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Negative review (`0`)
    Negative,
    /// Positive review (`1`)
    Positive,
}

impl Label {
    /// Both classes, negative first.
    pub const ALL: [Label; 2] = [Label::Negative, Label::Positive];

    /// Integer encoding of the label.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    /// Decode an integer label. Only `0` and `1` are valid.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Negative),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    /// Lower-case class name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
