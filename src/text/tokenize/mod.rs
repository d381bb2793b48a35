//! Tokenization for review text.
//!
//! The tokenizer lower-cases the whole document, then emits maximal runs of
//! ASCII letters and digits. A run may carry one clitic suffix from
//! [`CLITICS`] attached through an apostrophe, so `"Wouldn't"` stays a single
//! token `"wouldn't"`. Everything else (punctuation, whitespace, underscores,
//! non-ASCII letters, apostrophes without a known clitic) only separates
//! tokens and is never emitted.
//!
//! # Examples
//!
//! ```
//! use aprender_sentiment::text::{CliticTokenizer, Tokenizer};
//!
//! let tokenizer = CliticTokenizer::new();
//! let tokens = tokenizer.tokenize("Wouldn't stop, this movie was GREAT!");
//! assert_eq!(tokens, vec!["wouldn't", "stop", "this", "movie", "was", "great"]);
//! ```

use regex::Regex;
use std::iter::FusedIterator;
use std::sync::LazyLock;

/// Clitic suffixes kept attached to their host token.
pub const CLITICS: &[&str] = &["s", "d", "t", "ve", "mon", "ll", "m", "re"];

#[allow(clippy::expect_used)]
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[a-z0-9]+(?:'(?:{}))?", CLITICS.join("|")))
        .expect("token pattern is a valid regex")
});

/// Splits a document into a sequence of tokens.
///
/// Implementations must preserve token order and keep duplicates; term
/// frequency matters downstream.
pub trait Tokenizer {
    /// Lazy token stream for one document.
    type Tokens: Iterator<Item = String>;

    /// Start a token stream over `text`.
    fn tokens(&self, text: &str) -> Self::Tokens;

    /// Collect every token of `text`.
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokens(text).collect()
    }
}

/// Lower-casing alphanumeric tokenizer with clitic support.
///
/// # Examples
///
/// ```
/// use aprender_sentiment::text::{CliticTokenizer, Tokenizer};
///
/// let tokenizer = CliticTokenizer::new();
/// assert_eq!(tokenizer.tokenize("C'mon, it's 2 good_films"), vec!["c'mon", "it's", "2", "good", "films"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CliticTokenizer;

impl CliticTokenizer {
    /// Create a new tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for CliticTokenizer {
    type Tokens = Tokens;

    fn tokens(&self, text: &str) -> Tokens {
        Tokens {
            text: text.to_lowercase(),
            pos: 0,
        }
    }
}

/// Token stream produced by [`CliticTokenizer`].
///
/// Owns the lower-cased document, so it can be cloned to replay the sequence
/// from the current position.
#[derive(Debug, Clone)]
pub struct Tokens {
    text: String,
    pos: usize,
}

impl Tokens {
    /// Rewind to the first token.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let found = TOKEN_PATTERN.find_at(&self.text, self.pos)?;
        self.pos = found.end();
        Some(found.as_str().to_string())
    }
}

impl FusedIterator for Tokens {}
