use super::*;
use std::io::Write;

// ========== StopWordsFilter Tests ==========

#[test]
fn test_new_exact_membership() {
    let filter = StopWordsFilter::new(vec!["the", "and", "is"]);
    assert!(filter.is_stop_word("the"));
    assert!(filter.is_stop_word("is"));
    assert!(!filter.is_stop_word("movie"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let filter = StopWordsFilter::new(vec!["the"]);
    assert!(!filter.is_stop_word("The"));
    assert!(!filter.is_stop_word("THE"));
}

#[test]
fn test_no_partial_matches() {
    let filter = StopWordsFilter::new(vec!["it"]);
    assert!(!filter.is_stop_word("it's"));
    assert!(!filter.is_stop_word("i"));
}

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let filter = StopWordsFilter::parse("# header\nthe\n\n  a  \r\n#not-a-word\nwasn't\n");
    assert_eq!(filter.len(), 3);
    assert!(filter.is_stop_word("a"));
    assert!(filter.is_stop_word("wasn't"));
    assert!(!filter.is_stop_word("#not-a-word"));
}

#[test]
fn test_parse_deduplicates() {
    let filter = StopWordsFilter::parse("the\nthe\nthe\n");
    assert_eq!(filter.len(), 1);
}

#[test]
fn test_empty_filter() {
    let filter = StopWordsFilter::default();
    assert!(filter.is_empty());
    assert!(!filter.is_stop_word(""));
    assert!(StopWordsFilter::parse("\n\n# only comments\n").is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "the\nof\nand").expect("write stop words");

    let filter = StopWordsFilter::load(file.path()).expect("load should succeed");
    assert_eq!(filter.len(), 3);
    assert!(filter.is_stop_word("of"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = StopWordsFilter::load(std::path::Path::new("/nonexistent/stopwords.txt"))
        .expect_err("missing file must fail");
    assert!(matches!(err, crate::error::SentimentError::Io(_)));
}
