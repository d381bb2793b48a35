//! Cross-validation for the sentiment classifier.
//!
//! This module provides:
//! - [`FoldPartition`]: externally supplied train/test indices of one fold
//! - [`KFold`]: generator of (optionally stratified, shuffled) partitions
//! - [`cross_validate`]: fits and scores one fresh model per fold
//!
//! Folds are independent: each one builds its own vocabulary and class models
//! from its training documents and drops them once its accuracy is known.

use crate::classification::{Label, MultinomialNB};
use crate::corpus::Corpus;
use crate::error::{Result, SentimentError};
use crate::text::{Tokenizer, VocabularyBuilder};
use serde::Serialize;
use std::collections::HashSet;

/// Train and test indices of one fold.
///
/// Indices are positions in the full corpus, not within the fold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FoldPartition {
    /// Training document indices
    pub train: Vec<usize>,
    /// Test document indices
    pub test: Vec<usize>,
}

impl FoldPartition {
    /// Create a partition.
    #[must_use]
    pub fn new(train: Vec<usize>, test: Vec<usize>) -> Self {
        Self { train, test }
    }

    /// Check every index against `n_documents` and require disjoint sets.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` for an index past the corpus
    /// - `OverlappingFold` for an index in both sets
    pub fn validate(&self, fold: usize, n_documents: usize) -> Result<()> {
        if let Some(&index) = self
            .train
            .iter()
            .chain(&self.test)
            .find(|&&i| i >= n_documents)
        {
            return Err(SentimentError::IndexOutOfBounds {
                fold,
                index,
                len: n_documents,
            });
        }

        let train: HashSet<usize> = self.train.iter().copied().collect();
        if let Some(&index) = self.test.iter().find(|&&i| train.contains(&i)) {
            return Err(SentimentError::OverlappingFold { fold, index });
        }
        Ok(())
    }
}

/// K-Fold partition generator.
///
/// Splits the corpus into K folds; each fold is used once as test set while
/// the remaining K-1 folds form the training set. With stratification (the
/// default), each class is split separately so every fold keeps the corpus's
/// class balance; without it folds are consecutive runs, which on an
/// unshuffled positives-first corpus gives single-class test folds.
///
/// # Example
///
/// ```
/// use aprender_sentiment::classification::Label;
/// use aprender_sentiment::model_selection::KFold;
///
/// let labels = [Label::Positive, Label::Positive, Label::Negative, Label::Negative];
/// let folds = KFold::new(2).split(&labels).expect("2 folds over 4 documents");
/// assert_eq!(folds.len(), 2);
/// assert_eq!(folds[0].test, vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct KFold {
    n_splits: usize,
    stratified: bool,
    shuffle: bool,
    random_state: Option<u64>,
}

impl KFold {
    /// Create a stratified, unshuffled K-Fold generator.
    ///
    /// # Arguments
    ///
    /// * `n_splits` - Number of folds. Must be at least 2.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            stratified: true,
            shuffle: false,
            random_state: None,
        }
    }

    /// Enable or disable per-class splitting.
    #[must_use]
    pub fn with_stratification(mut self, stratified: bool) -> Self {
        self.stratified = stratified;
        self
    }

    /// Enable shuffling before splitting.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set random state for reproducible shuffling.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self.shuffle = true; // Shuffle is implied when random_state is set
        self
    }

    /// Number of folds produced.
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Generate one partition per fold for a corpus with these labels.
    ///
    /// Indices inside each train and test list are sorted ascending. Test
    /// fold sizes differ by at most one, so no test fold is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `n_splits < 2` or exceeds the corpus size.
    pub fn split(&self, labels: &[Label]) -> Result<Vec<FoldPartition>> {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let n_samples = labels.len();
        if self.n_splits < 2 {
            return Err(SentimentError::InvalidConfig(format!(
                "k-fold needs at least 2 folds, got {}",
                self.n_splits
            )));
        }
        if self.n_splits > n_samples {
            return Err(SentimentError::InvalidConfig(format!(
                "cannot split {n_samples} documents into {} folds",
                self.n_splits
            )));
        }

        let mut groups: Vec<Vec<usize>> = if self.stratified {
            Label::ALL
                .iter()
                .map(|&class| {
                    (0..n_samples)
                        .filter(|&i| labels[i] == class)
                        .collect::<Vec<_>>()
                })
                .filter(|group| !group.is_empty())
                .collect()
        } else {
            vec![(0..n_samples).collect()]
        };

        if self.shuffle {
            let mut rng = match self.random_state {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                None => rand::rngs::StdRng::from_entropy(),
            };
            for group in &mut groups {
                group.shuffle(&mut rng);
            }
        }

        // Distribute each group across folds. Remainders continue round-robin
        // from where the previous group's remainder stopped, so overall fold
        // sizes differ by at most one.
        let mut fold_indices: Vec<Vec<usize>> = vec![Vec::new(); self.n_splits];
        let mut offset = 0;
        for group in &groups {
            let fold_size = group.len() / self.n_splits;
            let remainder = group.len() % self.n_splits;

            let mut start = 0;
            for (i, fold) in fold_indices.iter_mut().enumerate() {
                let rank = (i + self.n_splits - offset) % self.n_splits;
                let current_size = if rank < remainder {
                    fold_size + 1
                } else {
                    fold_size
                };
                fold.extend_from_slice(&group[start..start + current_size]);
                start += current_size;
            }
            offset = (offset + remainder) % self.n_splits;
        }

        let partitions = (0..self.n_splits)
            .map(|i| {
                let mut test = fold_indices[i].clone();
                let mut train: Vec<usize> = fold_indices
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .flat_map(|(_, fold)| fold.iter().copied())
                    .collect();
                test.sort_unstable();
                train.sort_unstable();
                FoldPartition::new(train, test)
            })
            .collect();

        Ok(partitions)
    }
}

/// Outcome of one cross-validation fold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldReport {
    /// 1-based fold number
    pub fold: usize,
    /// Test accuracy in percent
    pub accuracy: f64,
    /// Number of training documents
    pub train_size: usize,
    /// Number of test documents
    pub test_size: usize,
    /// Distinct tokens in the fold's training vocabulary
    pub vocabulary_size: usize,
    /// Log-prior of the positive class
    pub positive_log_prior: f64,
    /// Log-prior of the negative class
    pub negative_log_prior: f64,
}

/// Results from cross-validation, in fold order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrossValidationResult {
    /// Report for each fold
    pub folds: Vec<FoldReport>,
}

impl CrossValidationResult {
    /// Accuracy of each fold
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.folds.iter().map(|report| report.accuracy)
    }

    /// Calculate mean accuracy across folds
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.folds.is_empty() {
            return 0.0;
        }
        self.scores().sum::<f64>() / self.folds.len() as f64
    }

    /// Calculate population standard deviation of accuracies
    #[must_use]
    pub fn std(&self) -> f64 {
        if self.folds.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / self.folds.len() as f64;
        variance.sqrt()
    }

    /// Get minimum accuracy
    #[must_use]
    pub fn min(&self) -> f64 {
        self.scores().fold(f64::INFINITY, f64::min)
    }

    /// Get maximum accuracy
    #[must_use]
    pub fn max(&self) -> f64 {
        self.scores().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Fit and score a model on one fold.
///
/// `fold` is the 1-based fold number used in reports and errors.
///
/// # Errors
///
/// - `IndexOutOfBounds` / `OverlappingFold` for a malformed partition
/// - `EmptyTrainingSet` / `EmptyTestSet` for an empty side of the partition
pub fn run_fold<T: Tokenizer>(
    corpus: &Corpus,
    builder: &VocabularyBuilder<'_, T>,
    partition: &FoldPartition,
    fold: usize,
) -> Result<FoldReport> {
    partition.validate(fold, corpus.len())?;
    let (train_docs, train_labels) = corpus.select(&partition.train, fold)?;
    let (test_docs, test_labels) = corpus.select(&partition.test, fold)?;

    let model = MultinomialNB::fit(builder, &train_docs, &train_labels)
        .map_err(|e| e.in_fold(fold))?;
    let accuracy = model
        .evaluate(builder, &test_docs, &test_labels)
        .map_err(|e| e.in_fold(fold))?;

    Ok(FoldReport {
        fold,
        accuracy,
        train_size: train_docs.len(),
        test_size: test_docs.len(),
        vocabulary_size: model.vocabulary().len(),
        positive_log_prior: model.class_model(Label::Positive).log_prior(),
        negative_log_prior: model.class_model(Label::Negative).log_prior(),
    })
}

/// Run every fold in order, handing each report to `on_fold` as soon as it is
/// computed.
///
/// # Errors
///
/// Stops at the first failing fold and returns its error.
///
/// # Example
///
/// ```
/// use aprender_sentiment::corpus::Corpus;
/// use aprender_sentiment::model_selection::{cross_validate, KFold};
/// use aprender_sentiment::text::{StopWordsFilter, VocabularyBuilder};
///
/// let corpus = Corpus::from_blocks(
///     vec!["great fun".into(), "great cast".into()],
///     vec!["dull mess".into(), "dull plot".into()],
/// );
/// let stop_words = StopWordsFilter::default();
/// let builder = VocabularyBuilder::new(&stop_words);
/// let folds = KFold::new(2).split(corpus.labels()).expect("valid k");
///
/// let result = cross_validate(&corpus, &builder, &folds, |_| {}).expect("folds run");
/// assert_eq!(result.folds.len(), 2);
/// assert_eq!(result.mean(), 100.0);
/// ```
pub fn cross_validate<T, F>(
    corpus: &Corpus,
    builder: &VocabularyBuilder<'_, T>,
    partitions: &[FoldPartition],
    mut on_fold: F,
) -> Result<CrossValidationResult>
where
    T: Tokenizer,
    F: FnMut(&FoldReport),
{
    let mut folds = Vec::with_capacity(partitions.len());

    for (i, partition) in partitions.iter().enumerate() {
        let report = run_fold(corpus, builder, partition, i + 1)?;
        tracing::info!(
            fold = report.fold,
            accuracy = report.accuracy,
            train = report.train_size,
            test = report.test_size,
            vocabulary = report.vocabulary_size,
            "fold complete"
        );
        on_fold(&report);
        folds.push(report);
    }

    Ok(CrossValidationResult { folds })
}

#[cfg(test)]
#[path = "tests_kfold.rs"]
mod tests_kfold;

#[cfg(test)]
#[path = "tests_cross_validate.rs"]
mod tests_cross_validate;
