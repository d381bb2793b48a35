//! Text processing for review classification.
//!
//! - [`tokenize`]: lower-casing tokenizer that keeps English clitics attached
//! - [`stopwords`]: exact-match stop word filtering
//! - [`vocabulary`]: term-frequency counting over document sets

pub mod stopwords;
pub mod tokenize;
pub mod vocabulary;

pub use stopwords::StopWordsFilter;
pub use tokenize::{CliticTokenizer, Tokenizer, Tokens};
pub use vocabulary::{Vocabulary, VocabularyBuilder};
