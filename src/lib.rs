//! Aprender Sentiment: Naive Bayes sentiment classification of movie reviews.
//!
//! Reviews are tokenized into lower-case words (English clitics such as the
//! `'s` of "film's" or the `'t` of "don't" stay attached), stop words are
//! dropped, and a two-class Multinomial Naive Bayes model with add-one
//! smoothing is trained and scored under K-fold cross-validation.
//!
//! # Quick Start
//!
//! ```
//! use aprender_sentiment::prelude::*;
//!
//! let corpus = Corpus::from_blocks(
//!     vec!["a wonderful film".into(), "wonderful acting".into()],
//!     vec!["a dreadful film".into(), "dreadful acting".into()],
//! );
//! let stop_words = StopWordsFilter::new(["a"]);
//! let builder = VocabularyBuilder::new(&stop_words);
//!
//! // Two stratified folds
//! let folds = KFold::new(2).split(corpus.labels()).unwrap();
//! let result = cross_validate(&corpus, &builder, &folds, |_| {}).unwrap();
//! assert_eq!(result.folds.len(), 2);
//!
//! // Fit on everything and classify new text
//! let model = MultinomialNB::fit(&builder, corpus.documents(), corpus.labels()).unwrap();
//! assert_eq!(model.predict(&builder, "simply wonderful"), Label::Positive);
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization, stop words and vocabulary counting
//! - [`classification`]: Class labels and the Multinomial Naive Bayes model
//! - [`metrics`]: Accuracy
//! - [`model_selection`]: Fold partitions, K-fold generation, cross-validation
//! - [`corpus`]: Review corpus and fold index files on disk
//! - [`config`]: Run settings
//! - [`report`]: Text and JSON cross-validation reports

pub mod classification;
pub mod config;
pub mod corpus;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod report;
pub mod text;

pub use error::{Result, SentimentError};
