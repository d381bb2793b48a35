//! Evaluation metrics for sentiment classifiers.

pub mod classification;

pub use classification::accuracy_percent;
