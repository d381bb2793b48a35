//! Error types for sentiment classification.
//!
//! Loader failures (files, parsing, corpus invariants) and computation
//! failures (bad fold configuration at evaluation time) share one enum so the
//! CLI can propagate with `?`, but [`SentimentError::is_input_error`] keeps the
//! two families distinguishable.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for `aprender-sentiment` operations.
///
/// # Examples
///
/// ```
/// use aprender_sentiment::error::SentimentError;
///
/// let err = SentimentError::EmptyTestSet { fold: 3 };
/// assert!(err.to_string().contains("Fold 3"));
/// assert!(!err.is_input_error());
/// ```
#[derive(Debug, Error)]
pub enum SentimentError {
    /// I/O error while reading corpus, stop words or index files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be parsed.
    #[error("Parse error in {}{}: {cause}", .file.display(), line_suffix(.line))]
    Parse {
        /// File being parsed
        file: PathBuf,
        /// 1-based line number, if the failure is tied to one line
        line: Option<usize>,
        /// What went wrong
        cause: String,
    },

    /// Corpus violates the positives-first ordering or label invariants.
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    /// A fold references a document outside the corpus.
    #[error("Fold {fold}: index {index} out of bounds (corpus size {len})")]
    IndexOutOfBounds {
        /// 1-based fold number
        fold: usize,
        /// Offending index
        index: usize,
        /// Corpus size
        len: usize,
    },

    /// A document is in both the train and test sets of a fold.
    #[error("Fold {fold}: index {index} appears in both train and test sets")]
    OverlappingFold {
        /// 1-based fold number
        fold: usize,
        /// Offending index
        index: usize,
    },

    /// Parallel sequences have different lengths.
    #[error("Length mismatch for {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// What was being compared
        context: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Accuracy is undefined for a fold without test documents.
    #[error("Fold {fold} has no test documents; accuracy is undefined")]
    EmptyTestSet {
        /// 1-based fold number (0 when evaluated outside cross-validation)
        fold: usize,
    },

    /// A fold has no training documents, so no class model can be estimated.
    #[error("Fold {fold} has no training documents")]
    EmptyTrainingSet {
        /// 1-based fold number (0 when trained outside cross-validation)
        fold: usize,
    },

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid run configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SentimentError {
    /// Create a length mismatch error.
    #[must_use]
    pub fn length_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create a parse error tied to a line of `file`.
    #[must_use]
    pub fn parse(file: impl Into<PathBuf>, line: Option<usize>, cause: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            cause: cause.into(),
        }
    }

    /// Attach a 1-based fold number to fold-scoped errors raised outside
    /// cross-validation.
    #[must_use]
    pub fn in_fold(self, fold: usize) -> Self {
        match self {
            Self::EmptyTestSet { .. } => Self::EmptyTestSet { fold },
            Self::EmptyTrainingSet { .. } => Self::EmptyTrainingSet { fold },
            other => other,
        }
    }

    /// True for failures of the loading layer (files, formats, corpus
    /// invariants, configuration), false for failures raised while running
    /// folds.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Parse { .. } | Self::InvalidCorpus(_) | Self::InvalidConfig(_)
        )
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(":{l}")).unwrap_or_default()
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentimentError>;
