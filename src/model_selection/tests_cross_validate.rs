use super::*;
use crate::text::StopWordsFilter;

fn review_corpus() -> Corpus {
    Corpus::from_blocks(
        vec![
            "a great film with a great cast".into(),
            "wonderful and great".into(),
            "great story, wonderful acting".into(),
            "wonderful".into(),
        ],
        vec![
            "a bad film with a dull cast".into(),
            "dull and bad".into(),
            "bad story, dull acting".into(),
            "awful".into(),
        ],
    )
}

fn stop_words() -> StopWordsFilter {
    StopWordsFilter::new(["a", "and", "with"])
}

#[test]
fn test_cross_validate_reports_every_fold_in_order() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);
    let partitions = KFold::new(4).split(corpus.labels()).expect("valid k");

    let mut seen = Vec::new();
    let result = cross_validate(&corpus, &builder, &partitions, |report| seen.push(report.fold))
        .expect("cross-validation");

    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert_eq!(result.folds.len(), 4);
    for report in &result.folds {
        assert_eq!(report.train_size, 6);
        assert_eq!(report.test_size, 2);
        assert!((0.0..=100.0).contains(&report.accuracy));
    }
}

#[test]
fn test_run_fold_uses_only_training_vocabulary() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);

    // Train on the two single-word reviews only
    let partition = FoldPartition::new(vec![3, 7], vec![0, 4]);
    let report = run_fold(&corpus, &builder, &partition, 1).expect("fold");

    assert_eq!(report.vocabulary_size, 2);
    assert_eq!(report.train_size, 2);
    assert!((report.positive_log_prior - 0.5_f64.ln()).abs() < 1e-12);
    assert!((report.negative_log_prior - 0.5_f64.ln()).abs() < 1e-12);
    // "wonderful" and "awful" never appear in the test reviews: ties go negative
    assert_eq!(report.accuracy, 50.0);
}

#[test]
fn test_folds_do_not_share_state() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);

    let first = FoldPartition::new(vec![0, 1, 4, 5], vec![2, 6]);
    let second = FoldPartition::new(vec![3, 7], vec![0, 4]);

    let alone = run_fold(&corpus, &builder, &second, 2).expect("fold");
    let result = cross_validate(&corpus, &builder, &[first, second], |_| {}).expect("folds");
    assert_eq!(result.folds[1].accuracy, alone.accuracy);
    assert_eq!(result.folds[1].vocabulary_size, alone.vocabulary_size);
}

#[test]
fn test_single_class_training_fold() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);

    let partition = FoldPartition::new(vec![0, 1, 2], vec![3, 7]);
    let report = run_fold(&corpus, &builder, &partition, 1).expect("fold");
    assert_eq!(report.negative_log_prior, f64::NEG_INFINITY);
    assert_eq!(report.positive_log_prior, 0.0);
    assert_eq!(report.accuracy, 50.0);
}

#[test]
fn test_out_of_range_index_names_fold() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);
    let partitions = vec![
        FoldPartition::new(vec![0, 4], vec![1, 5]),
        FoldPartition::new(vec![0, 4], vec![8]),
    ];

    let mut reported = 0;
    let err = cross_validate(&corpus, &builder, &partitions, |_| reported += 1)
        .expect_err("index 8 past corpus of 8");
    assert_eq!(reported, 1);
    assert!(matches!(
        err,
        SentimentError::IndexOutOfBounds {
            fold: 2,
            index: 8,
            len: 8
        }
    ));
    assert!(!err.is_input_error());
}

#[test]
fn test_empty_test_fold_is_error() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);
    let partitions = vec![FoldPartition::new(vec![0, 4], vec![])];

    let err = cross_validate(&corpus, &builder, &partitions, |_| {}).expect_err("no test docs");
    assert!(matches!(err, SentimentError::EmptyTestSet { fold: 1 }));
}

#[test]
fn test_empty_training_fold_is_error() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);
    let partitions = vec![
        FoldPartition::new(vec![0, 4], vec![1]),
        FoldPartition::new(vec![], vec![1]),
    ];

    let err = cross_validate(&corpus, &builder, &partitions, |_| {}).expect_err("no train docs");
    assert!(matches!(err, SentimentError::EmptyTrainingSet { fold: 2 }));
}

#[test]
fn test_overlapping_fold_is_error() {
    let corpus = review_corpus();
    let stop_words = stop_words();
    let builder = VocabularyBuilder::new(&stop_words);
    let partitions = vec![FoldPartition::new(vec![0, 1, 4], vec![1])];

    let err = cross_validate(&corpus, &builder, &partitions, |_| {}).expect_err("overlap");
    assert!(matches!(err, SentimentError::OverlappingFold { fold: 1, index: 1 }));
}

#[test]
fn test_summary_statistics() {
    let report = |fold, accuracy| FoldReport {
        fold,
        accuracy,
        train_size: 1,
        test_size: 1,
        vocabulary_size: 1,
        positive_log_prior: 0.0,
        negative_log_prior: 0.0,
    };
    let result = CrossValidationResult {
        folds: vec![report(1, 80.0), report(2, 90.0), report(3, 100.0)],
    };

    assert!((result.mean() - 90.0).abs() < 1e-12);
    assert!((result.std() - (200.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    assert_eq!(result.min(), 80.0);
    assert_eq!(result.max(), 100.0);
}

#[test]
fn test_summary_of_no_folds() {
    let result = CrossValidationResult::default();
    assert_eq!(result.mean(), 0.0);
    assert_eq!(result.std(), 0.0);
}
