//! Stop words filtering for vocabulary construction.
//!
//! Stop words are loaded once from an external list and matched exactly and
//! case-sensitively. Tokens reaching the filter are already lower-cased by the
//! tokenizer, so no further normalization (stemming, case folding) happens
//! here.
//!
//! # File format
//!
//! One word per line. Lines are trimmed; blank lines and lines starting with
//! `#` are ignored.
//!
//! # Examples
//!
//! ```
//! use aprender_sentiment::text::StopWordsFilter;
//!
//! let filter = StopWordsFilter::parse("# common words\nthe\na\n\nand\n");
//! assert_eq!(filter.len(), 3);
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("The"));
//! ```

use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;

/// Set of stop words with O(1) exact membership checks.
#[derive(Debug, Clone, Default)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from an explicit word list. Words are stored as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use aprender_sentiment::text::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(["the", "of"]);
    /// assert!(filter.is_stop_word("of"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a stop word list (one word per line).
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a stop word list from a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let filter = Self::parse(&content);
        tracing::debug!(path = %path.display(), words = filter.len(), "loaded stop words");
        Ok(filter)
    }

    /// Check whether `word` is a stop word (exact, case-sensitive match).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// True if the filter removes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
