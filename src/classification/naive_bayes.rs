//! Multinomial Naive Bayes over bag-of-words counts.
//!
//! Training estimates, for each class `c` and every token `w` of the global
//! vocabulary `V`:
//!
//! ```text
//! log P(w|c) = ln( (count_c(w) + 1) / (N_c + |V|) )
//! log P(c)   = ln( |docs in c| / |training docs| )
//! ```
//!
//! where `N_c` sums `count_c(w)` over `w ∈ V` only (Laplace add-one smoothing
//! over a vocabulary-sized support). Scoring stays in log space:
//!
//! ```text
//! score_c(d) = log P(c) + Σ_{w ∈ d ∩ V} count_d(w) · log P(w|c)
//! ```
//!
//! Tokens of `d` outside `V` contribute nothing. The positive class wins only
//! on a strict `>`; ties go to the negative class.
//!
//! A class with no training documents gets a log-prior of `-inf`; its score
//! is then `-inf` for every document and it is never predicted.

use super::Label;
use crate::error::{Result, SentimentError};
use crate::metrics::accuracy_percent;
use crate::text::{Tokenizer, Vocabulary, VocabularyBuilder};
use serde::Serialize;
use std::collections::BTreeMap;

/// Smoothed log-likelihood table and log-prior for one class.
#[derive(Debug, Clone)]
pub struct ClassModel {
    label: Label,
    log_likelihoods: BTreeMap<String, f64>,
    log_prior: f64,
    token_total: usize,
    document_count: usize,
}

impl ClassModel {
    /// Estimate the model of class `target` from labeled training documents.
    ///
    /// `vocabulary` is the global vocabulary of the training set; the
    /// likelihood table gets an entry for every one of its tokens, including
    /// tokens that never occur in `target` documents.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if `documents` and `labels` differ in length
    /// - `EmptyTrainingSet` if there are no training documents at all
    pub fn train<T: Tokenizer, S: AsRef<str>>(
        vocabulary: &Vocabulary,
        builder: &VocabularyBuilder<'_, T>,
        documents: &[S],
        labels: &[Label],
        target: Label,
    ) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(SentimentError::length_mismatch(
                "training labels",
                documents.len(),
                labels.len(),
            ));
        }
        if documents.is_empty() {
            return Err(SentimentError::EmptyTrainingSet { fold: 0 });
        }

        let class_documents: Vec<&str> = documents
            .iter()
            .zip(labels)
            .filter(|(_, label)| **label == target)
            .map(|(document, _)| document.as_ref())
            .collect();
        let class_counts = builder.build(&class_documents);

        let token_total: usize = vocabulary
            .tokens()
            .map(|token| class_counts.count(token))
            .sum();
        let denominator = (token_total + vocabulary.len()) as f64;

        let log_likelihoods = vocabulary
            .tokens()
            .map(|token| {
                let smoothed = (class_counts.count(token) + 1) as f64 / denominator;
                (token.to_string(), smoothed.ln())
            })
            .collect();

        let log_prior = (class_documents.len() as f64 / documents.len() as f64).ln();
        if class_documents.is_empty() {
            tracing::warn!(class = %target, "no training documents for class; it will never be predicted");
        }

        tracing::debug!(
            class = %target,
            documents = class_documents.len(),
            token_total,
            log_prior,
            "trained class model"
        );

        Ok(Self {
            label: target,
            log_likelihoods,
            log_prior,
            token_total,
            document_count: class_documents.len(),
        })
    }

    /// Class this model scores.
    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Log-prior of the class (`-inf` when it had no training documents).
    #[must_use]
    pub fn log_prior(&self) -> f64 {
        self.log_prior
    }

    /// Smoothed log-likelihood of `token`, `None` outside the vocabulary.
    #[must_use]
    pub fn log_likelihood(&self, token: &str) -> Option<f64> {
        self.log_likelihoods.get(token).copied()
    }

    /// Full likelihood table, in token order.
    #[must_use]
    pub fn log_likelihoods(&self) -> &BTreeMap<String, f64> {
        &self.log_likelihoods
    }

    /// Occurrences of vocabulary tokens in this class's documents.
    #[must_use]
    pub fn token_total(&self) -> usize {
        self.token_total
    }

    /// Number of training documents of this class.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.document_count
    }
}

/// Log-posterior scores of one document (up to a shared constant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentScores {
    /// Positive class score
    pub positive: f64,
    /// Negative class score
    pub negative: f64,
}

impl DocumentScores {
    /// Arg-max class; ties resolve to negative.
    #[must_use]
    pub fn prediction(&self) -> Label {
        if self.positive > self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Score `document` under both class models.
fn score_document<T: Tokenizer>(
    vocabulary: &Vocabulary,
    builder: &VocabularyBuilder<'_, T>,
    document: &str,
    positive: &ClassModel,
    negative: &ClassModel,
) -> DocumentScores {
    let mut scores = DocumentScores {
        positive: positive.log_prior(),
        negative: negative.log_prior(),
    };

    for (token, count) in builder.build_document(document).iter() {
        if !vocabulary.contains(token) {
            continue;
        }
        if let (Some(pos), Some(neg)) = (positive.log_likelihood(token), negative.log_likelihood(token)) {
            scores.positive += count as f64 * pos;
            scores.negative += count as f64 * neg;
        }
    }

    scores
}

/// Classify labeled test documents and return the accuracy in percent.
///
/// `positive` and `negative` must have been trained against `vocabulary`.
///
/// # Errors
///
/// - `InvalidConfig` if the class models are swapped
/// - `LengthMismatch` if `documents` and `labels` differ in length
/// - `EmptyTestSet` if there are no test documents
pub fn evaluate<T: Tokenizer, S: AsRef<str>>(
    vocabulary: &Vocabulary,
    builder: &VocabularyBuilder<'_, T>,
    documents: &[S],
    labels: &[Label],
    positive: &ClassModel,
    negative: &ClassModel,
) -> Result<f64> {
    if positive.label() != Label::Positive || negative.label() != Label::Negative {
        return Err(SentimentError::InvalidConfig(format!(
            "class models out of order: got ({}, {}), expected (positive, negative)",
            positive.label(),
            negative.label()
        )));
    }
    if documents.len() != labels.len() {
        return Err(SentimentError::length_mismatch(
            "test labels",
            documents.len(),
            labels.len(),
        ));
    }

    let predictions: Vec<Label> = documents
        .iter()
        .map(|document| {
            score_document(vocabulary, builder, document.as_ref(), positive, negative).prediction()
        })
        .collect();

    accuracy_percent(&predictions, labels)
}

/// Two-class Multinomial Naive Bayes model fitted on one training set.
#[derive(Debug, Clone)]
pub struct MultinomialNB {
    vocabulary: Vocabulary,
    positive: ClassModel,
    negative: ClassModel,
}

impl MultinomialNB {
    /// Build the training vocabulary and train both class models.
    ///
    /// # Errors
    ///
    /// Propagates [`ClassModel::train`] errors.
    pub fn fit<T: Tokenizer, S: AsRef<str>>(
        builder: &VocabularyBuilder<'_, T>,
        documents: &[S],
        labels: &[Label],
    ) -> Result<Self> {
        let vocabulary = builder.build(documents);
        if vocabulary.is_empty() {
            tracing::warn!("training vocabulary is empty; predictions use priors only");
        }
        tracing::debug!(vocabulary = vocabulary.len(), "built training vocabulary");

        let positive = ClassModel::train(&vocabulary, builder, documents, labels, Label::Positive)?;
        let negative = ClassModel::train(&vocabulary, builder, documents, labels, Label::Negative)?;

        Ok(Self {
            vocabulary,
            positive,
            negative,
        })
    }

    /// Training vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Model of `label`.
    #[must_use]
    pub fn class_model(&self, label: Label) -> &ClassModel {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Score one document under both classes.
    pub fn scores<T: Tokenizer>(
        &self,
        builder: &VocabularyBuilder<'_, T>,
        document: &str,
    ) -> DocumentScores {
        score_document(
            &self.vocabulary,
            builder,
            document,
            &self.positive,
            &self.negative,
        )
    }

    /// Predict the class of one document.
    pub fn predict<T: Tokenizer>(&self, builder: &VocabularyBuilder<'_, T>, document: &str) -> Label {
        self.scores(builder, document).prediction()
    }

    /// Accuracy in percent over labeled test documents.
    ///
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate<T: Tokenizer, S: AsRef<str>>(
        &self,
        builder: &VocabularyBuilder<'_, T>,
        documents: &[S],
        labels: &[Label],
    ) -> Result<f64> {
        evaluate(
            &self.vocabulary,
            builder,
            documents,
            labels,
            &self.positive,
            &self.negative,
        )
    }
}

#[cfg(test)]
#[path = "naive_bayes_tests.rs"]
mod tests;
