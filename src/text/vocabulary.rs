//! Term-frequency vocabularies.
//!
//! A [`Vocabulary`] maps every non-stop-word token of a document set to the
//! number of times it occurs. It is backed by a `BTreeMap`, so iteration is in
//! token order and every computation summing over it is reproducible.
//!
//! The same builder produces the global vocabulary of a fold, the
//! class-specific counts used in training and the per-document counts used
//! when scoring.
//!
//! # Examples
//!
//! ```
//! use aprender_sentiment::text::{StopWordsFilter, VocabularyBuilder};
//!
//! let stop_words = StopWordsFilter::new(["the", "was"]);
//! let builder = VocabularyBuilder::new(&stop_words);
//!
//! let vocabulary = builder.build(&["The plot was thin", "the plot twist"]);
//! assert_eq!(vocabulary.count("plot"), 2);
//! assert_eq!(vocabulary.count("the"), 0);
//! assert_eq!(vocabulary.len(), 3);
//! ```

use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::{CliticTokenizer, Tokenizer};
use std::collections::BTreeMap;

/// Token occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    counts: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    ///
    /// Surrounding whitespace is trimmed first; a token that is empty after
    /// trimming is ignored.
    pub fn add(&mut self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Occurrences of `token`, 0 when absent.
    #[must_use]
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether `token` occurs at least once.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no token was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Iterate distinct tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (token, count) in iter {
            if count > 0 {
                *counts.entry(token.into()).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

/// Builds vocabularies by tokenizing documents and dropping stop words.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder<'a, T = CliticTokenizer> {
    tokenizer: T,
    stop_words: &'a StopWordsFilter,
}

impl<'a> VocabularyBuilder<'a> {
    /// Builder using [`CliticTokenizer`].
    #[must_use]
    pub fn new(stop_words: &'a StopWordsFilter) -> Self {
        Self {
            tokenizer: CliticTokenizer::new(),
            stop_words,
        }
    }
}

impl<'a, T: Tokenizer> VocabularyBuilder<'a, T> {
    /// Swap in a different tokenizer.
    #[must_use]
    pub fn with_tokenizer<U: Tokenizer>(self, tokenizer: U) -> VocabularyBuilder<'a, U> {
        VocabularyBuilder {
            tokenizer,
            stop_words: self.stop_words,
        }
    }

    /// Stop words excluded by this builder.
    #[must_use]
    pub fn stop_words(&self) -> &StopWordsFilter {
        self.stop_words
    }

    /// Count every non-stop-word token across `documents`.
    ///
    /// No frequency pruning or size cap is applied: every surviving token
    /// appears, however rare.
    pub fn build<S: AsRef<str>>(&self, documents: &[S]) -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        for document in documents {
            self.extend(&mut vocabulary, document.as_ref());
        }
        vocabulary
    }

    /// Count the tokens of a single document.
    pub fn build_document(&self, document: &str) -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        self.extend(&mut vocabulary, document);
        vocabulary
    }

    fn extend(&self, vocabulary: &mut Vocabulary, document: &str) {
        for token in self.tokenizer.tokens(document) {
            if !self.stop_words.is_stop_word(&token) {
                vocabulary.add(&token);
            }
        }
    }
}
