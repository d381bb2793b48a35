//! Run settings shared by the command-line subcommands.

use crate::error::{Result, SentimentError};
use crate::model_selection::KFold;

/// Default number of cross-validation folds.
pub const DEFAULT_FOLDS: usize = 10;

/// How cross-validation results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per fold followed by a summary line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Validated settings of one cross-validation or fold-generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Number of folds
    pub folds: usize,
    /// Shuffle seed for generated folds; `None` keeps corpus order
    pub seed: Option<u64>,
    /// Split each class separately when generating folds
    pub stratified: bool,
    /// Report format
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            folds: DEFAULT_FOLDS,
            seed: None,
            stratified: true,
            format: OutputFormat::Text,
        }
    }
}

impl RunConfig {
    /// Default settings with `folds` folds.
    #[must_use]
    pub fn new(folds: usize) -> Self {
        Self {
            folds,
            ..Self::default()
        }
    }

    /// Shuffle generated folds with `seed`; `None` keeps corpus order.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Split each class separately when generating folds.
    #[must_use]
    pub fn with_stratified(mut self, stratified: bool) -> Self {
        self.stratified = stratified;
        self
    }

    /// Set the report format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `folds` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.folds == 0 {
            return Err(SentimentError::InvalidConfig(
                "fold count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Fold generator matching these settings.
    #[must_use]
    pub fn kfold(&self) -> KFold {
        let kfold = KFold::new(self.folds).with_stratification(self.stratified);
        match self.seed {
            Some(seed) => kfold.with_random_state(seed),
            None => kfold,
        }
    }
}
