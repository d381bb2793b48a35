//! Labeled review corpus and its on-disk layout.
//!
//! A corpus directory holds two subdirectories, `pos/` and `neg/`, one review
//! per file. Labels are not stored anywhere: they are assigned by position,
//! with every positive review placed before every negative one. Because of
//! that coupling, [`Corpus::new`] checks the ordering instead of trusting it.

mod index_file;

pub use index_file::{format_fold_indices, load_fold_indices, parse_fold_indices, write_fold_indices};

use crate::classification::Label;
use crate::error::{Result, SentimentError};
use std::path::{Path, PathBuf};

/// Subdirectory holding positive reviews.
pub const POSITIVE_DIR: &str = "pos";
/// Subdirectory holding negative reviews.
pub const NEGATIVE_DIR: &str = "neg";

/// Ordered documents with one label each, positives first.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<String>,
    labels: Vec<Label>,
}

impl Corpus {
    /// Create a corpus from parallel documents and labels.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the lengths differ
    /// - `InvalidCorpus` if a positive document follows a negative one
    pub fn new(documents: Vec<String>, labels: Vec<Label>) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(SentimentError::length_mismatch(
                "corpus labels",
                documents.len(),
                labels.len(),
            ));
        }
        if let Some(first_negative) = labels.iter().position(|&l| l == Label::Negative) {
            if let Some(offset) = labels[first_negative..]
                .iter()
                .position(|&l| l == Label::Positive)
            {
                return Err(SentimentError::InvalidCorpus(format!(
                    "positive document at index {} follows negative document at index {first_negative}",
                    first_negative + offset
                )));
            }
        }
        Ok(Self { documents, labels })
    }

    /// Build a corpus from a positive block and a negative block, assigning
    /// labels by position.
    #[must_use]
    pub fn from_blocks(positives: Vec<String>, negatives: Vec<String>) -> Self {
        let mut labels = vec![Label::Positive; positives.len()];
        labels.resize(positives.len() + negatives.len(), Label::Negative);

        let mut documents = positives;
        documents.extend(negatives);
        Self { documents, labels }
    }

    /// Documents in corpus order.
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Labels in corpus order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if the corpus has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents with `label`.
    #[must_use]
    pub fn count(&self, label: Label) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Gather the documents and labels at `indices`, in index order.
    ///
    /// `fold` is only used to report out-of-range indices.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for any index past the end of the corpus.
    pub fn select(&self, indices: &[usize], fold: usize) -> Result<(Vec<&str>, Vec<Label>)> {
        let mut documents = Vec::with_capacity(indices.len());
        let mut labels = Vec::with_capacity(indices.len());
        for &index in indices {
            let document = self
                .documents
                .get(index)
                .ok_or(SentimentError::IndexOutOfBounds {
                    fold,
                    index,
                    len: self.len(),
                })?;
            documents.push(document.as_str());
            labels.push(self.labels[index]);
        }
        Ok((documents, labels))
    }
}

/// Load a corpus directory: `pos/` files first, then `neg/` files, each in
/// file-name order.
///
/// Files are decoded as UTF-8, replacing invalid sequences.
///
/// # Errors
///
/// - `InvalidCorpus` if either subdirectory is missing or unreadable
/// - `Io` if a review file cannot be read
pub fn load_corpus_dir(dir: &Path) -> Result<Corpus> {
    let positives = read_reviews(&dir.join(POSITIVE_DIR))?;
    let negatives = read_reviews(&dir.join(NEGATIVE_DIR))?;
    tracing::info!(
        corpus = %dir.display(),
        positive = positives.len(),
        negative = negatives.len(),
        "loaded corpus"
    );
    Ok(Corpus::from_blocks(positives, negatives))
}

fn read_reviews(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        SentimentError::InvalidCorpus(format!("cannot read {}: {e}", dir.display()))
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| -> Result<String> {
            let bytes = std::fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        })
        .collect()
}
