//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use aprender_sentiment::prelude::*;
//! ```

pub use crate::classification::{Label, MultinomialNB};
pub use crate::corpus::{load_corpus_dir, load_fold_indices, Corpus};
pub use crate::error::{Result, SentimentError};
pub use crate::metrics::accuracy_percent;
pub use crate::model_selection::{cross_validate, CrossValidationResult, FoldPartition, FoldReport, KFold};
pub use crate::text::{CliticTokenizer, StopWordsFilter, Tokenizer, VocabularyBuilder};
