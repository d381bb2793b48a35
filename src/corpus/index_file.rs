//! Fold index file parser and writer.
//!
//! A fold run reads two files, one listing training indices and one listing
//! test indices. Line `i` of each file belongs to fold `i`, with the indices
//! separated by whitespace and/or commas. A blank line is an empty fold.
//!
//! ```text
//! 0 1 2 3 5 6 7
//! 0, 1, 2, 4, 6, 7
//! ```
//!
//! Indices are 0-based positions in the full corpus.

use crate::error::{Result, SentimentError};
use crate::model_selection::FoldPartition;
use std::path::Path;

/// Parse the first `folds` fold lines of an index file.
///
/// # Errors
///
/// Returns a `Parse` error for non-integer entries or when the file has fewer
/// than `folds` fold lines.
pub fn parse_fold_indices(content: &str, path: &Path, folds: usize) -> Result<Vec<Vec<usize>>> {
    let mut result = Vec::with_capacity(folds);
    let mut extra_lines = 0;

    for (line_num, line) in content.lines().enumerate() {
        if result.len() == folds {
            if !line.trim().is_empty() {
                extra_lines += 1;
            }
            continue;
        }

        let indices = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>().map_err(|_| {
                    SentimentError::parse(path, Some(line_num + 1), format!("Invalid index: {part}"))
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        result.push(indices);
    }

    if result.len() < folds {
        return Err(SentimentError::parse(
            path,
            None,
            format!("expected {folds} fold lines, found {}", result.len()),
        ));
    }
    if extra_lines > 0 {
        tracing::debug!(path = %path.display(), extra_lines, "ignoring fold lines past the requested fold count");
    }

    Ok(result)
}

/// Load `folds` partitions from a train index file and a test index file.
///
/// # Errors
///
/// Returns `Io` if a file cannot be read and `Parse` for malformed content.
pub fn load_fold_indices(train_path: &Path, test_path: &Path, folds: usize) -> Result<Vec<FoldPartition>> {
    let train = parse_fold_indices(&std::fs::read_to_string(train_path)?, train_path, folds)?;
    let test = parse_fold_indices(&std::fs::read_to_string(test_path)?, test_path, folds)?;

    Ok(train
        .into_iter()
        .zip(test)
        .map(|(train, test)| FoldPartition::new(train, test))
        .collect())
}

/// Render one fold per line, indices separated by single spaces.
pub fn format_fold_indices<'a, I>(folds: I) -> String
where
    I: IntoIterator<Item = &'a [usize]>,
{
    let mut out = String::new();
    for fold in folds {
        let line: Vec<String> = fold.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Write partitions as a train index file and a test index file.
///
/// # Errors
///
/// Returns `Io` if either file cannot be written.
pub fn write_fold_indices(partitions: &[FoldPartition], train_path: &Path, test_path: &Path) -> Result<()> {
    std::fs::write(
        train_path,
        format_fold_indices(partitions.iter().map(|p| p.train.as_slice())),
    )?;
    std::fs::write(
        test_path,
        format_fold_indices(partitions.iter().map(|p| p.test.as_slice())),
    )?;
    tracing::info!(
        folds = partitions.len(),
        train = %train_path.display(),
        test = %test_path.display(),
        "wrote fold index files"
    );
    Ok(())
}
