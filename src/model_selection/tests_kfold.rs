// =========================================================================
// KFold partition contract
//
// Every generated fold set must satisfy, for any corpus size N >= K:
//   - exactly K partitions
//   - every document in exactly one test fold
//   - train and test disjoint, together covering 0..N
//   - test fold sizes differ by at most one per class
// =========================================================================

use super::*;
use crate::classification::Label;

fn corpus_labels(positive: usize, negative: usize) -> Vec<Label> {
    let mut labels = vec![Label::Positive; positive];
    labels.extend(std::iter::repeat(Label::Negative).take(negative));
    labels
}

fn assert_partition_contract(splits: &[FoldPartition], n: usize) {
    let mut test_counts = vec![0usize; n];
    for (fold, partition) in splits.iter().enumerate() {
        partition
            .validate(fold + 1, n)
            .unwrap_or_else(|e| panic!("fold {} invalid: {e}", fold + 1));

        let mut all: Vec<usize> = partition
            .train
            .iter()
            .chain(&partition.test)
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..n).collect::<Vec<_>>(), "fold {} does not cover corpus", fold + 1);

        for &idx in &partition.test {
            test_counts[idx] += 1;
        }
    }
    for (i, &count) in test_counts.iter().enumerate() {
        assert_eq!(count, 1, "document {i} appeared in {count} test folds (expected 1)");
    }
}

#[test]
fn kfold_produces_k_splits() {
    let labels = corpus_labels(50, 50);
    let splits = KFold::new(5).split(&labels).expect("valid k");
    assert_eq!(splits.len(), 5);
}

#[test]
fn kfold_stratified_partitions_cover_corpus() {
    // Non-divisible class sizes exercise remainder handling
    let labels = corpus_labels(9, 8);
    let splits = KFold::new(4).split(&labels).expect("valid k");
    assert_partition_contract(&splits, labels.len());
}

#[test]
fn kfold_unstratified_partitions_cover_corpus() {
    let labels = corpus_labels(9, 8);
    let splits = KFold::new(4)
        .with_stratification(false)
        .split(&labels)
        .expect("valid k");
    assert_partition_contract(&splits, labels.len());
}

#[test]
fn kfold_stratified_keeps_class_balance() {
    let labels = corpus_labels(10, 10);
    let splits = KFold::new(5).split(&labels).expect("valid k");

    for partition in &splits {
        let positives = partition
            .test
            .iter()
            .filter(|&&i| labels[i] == Label::Positive)
            .count();
        assert_eq!(positives, 2);
        assert_eq!(partition.test.len(), 4);
    }
}

#[test]
fn kfold_unstratified_is_contiguous_without_shuffle() {
    let labels = corpus_labels(3, 3);
    let splits = KFold::new(3)
        .with_stratification(false)
        .split(&labels)
        .expect("valid k");

    assert_eq!(splits[0].test, vec![0, 1]);
    assert_eq!(splits[1].test, vec![2, 3]);
    assert_eq!(splits[2].test, vec![4, 5]);
    assert_eq!(splits[1].train, vec![0, 1, 4, 5]);
}

#[test]
fn kfold_fold_sizes_differ_by_at_most_one() {
    let labels = corpus_labels(0, 17);
    let splits = KFold::new(4).split(&labels).expect("valid k");
    let sizes: Vec<usize> = splits.iter().map(|p| p.test.len()).collect();
    assert_eq!(sizes, vec![5, 4, 4, 4]);
}

#[test]
fn kfold_same_seed_same_folds() {
    let labels = corpus_labels(20, 20);
    let a = KFold::new(5).with_random_state(42).split(&labels).expect("valid k");
    let b = KFold::new(5).with_random_state(42).split(&labels).expect("valid k");
    assert_eq!(a, b);
}

#[test]
fn kfold_seed_changes_assignment() {
    let labels = corpus_labels(50, 50);
    let plain = KFold::new(5).split(&labels).expect("valid k");
    let shuffled = KFold::new(5).with_random_state(7).split(&labels).expect("valid k");
    assert_ne!(plain, shuffled);
    assert_partition_contract(&shuffled, labels.len());
}

#[test]
fn kfold_shuffled_stratified_keeps_class_balance() {
    let labels = corpus_labels(10, 10);
    let splits = KFold::new(5).with_random_state(3).split(&labels).expect("valid k");
    for partition in &splits {
        let negatives = partition
            .test
            .iter()
            .filter(|&&i| labels[i] == Label::Negative)
            .count();
        assert_eq!(negatives, 2);
    }
}

#[test]
fn kfold_indices_sorted() {
    let labels = corpus_labels(6, 6);
    let splits = KFold::new(3).with_random_state(11).split(&labels).expect("valid k");
    for partition in &splits {
        assert!(partition.test.windows(2).all(|w| w[0] < w[1]));
        assert!(partition.train.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn kfold_rejects_fewer_than_two_folds() {
    let labels = corpus_labels(5, 5);
    let err = KFold::new(1).split(&labels).expect_err("k = 1");
    assert!(matches!(err, SentimentError::InvalidConfig(_)));
}

#[test]
fn kfold_rejects_more_folds_than_documents() {
    let labels = corpus_labels(2, 1);
    let err = KFold::new(4).split(&labels).expect_err("k > n");
    assert!(err.to_string().contains("cannot split 3 documents into 4 folds"));
}

#[test]
fn partition_validate_out_of_bounds() {
    let partition = FoldPartition::new(vec![0, 1], vec![7]);
    let err = partition.validate(3, 5).expect_err("index 7");
    assert!(matches!(
        err,
        SentimentError::IndexOutOfBounds {
            fold: 3,
            index: 7,
            len: 5
        }
    ));
}

#[test]
fn partition_validate_overlap() {
    let partition = FoldPartition::new(vec![0, 1, 2], vec![2, 3]);
    let err = partition.validate(1, 4).expect_err("2 in both sets");
    assert!(matches!(err, SentimentError::OverlappingFold { fold: 1, index: 2 }));
}

#[test]
fn partition_validate_allows_partial_cover() {
    // Folds need not use every document
    let partition = FoldPartition::new(vec![0], vec![3]);
    assert!(partition.validate(1, 10).is_ok());
}

#[test]
fn kfold_minority_class_smaller_than_k_leaves_no_empty_fold() {
    let labels = corpus_labels(7, 3);
    let splits = KFold::new(10).split(&labels).expect("k = n");
    let sizes: Vec<usize> = splits.iter().map(|p| p.test.len()).collect();
    assert_eq!(sizes, vec![1; 10]);
    assert_partition_contract(&splits, labels.len());
}

#[test]
fn kfold_three_documents_three_folds() {
    let labels = corpus_labels(2, 1);
    let splits = KFold::new(3).split(&labels).expect("k = n");
    for partition in &splits {
        assert_eq!(partition.test.len(), 1);
        assert_eq!(partition.train.len(), 2);
    }
}

#[test]
fn kfold_remainders_continue_across_classes() {
    // 5 negatives and 5 positives over 4 folds: remainders land on folds 0 and 1
    let labels = corpus_labels(5, 5);
    let splits = KFold::new(4).split(&labels).expect("valid k");
    let sizes: Vec<usize> = splits.iter().map(|p| p.test.len()).collect();
    assert_eq!(sizes, vec![3, 3, 2, 2]);

    let shuffled = KFold::new(4).with_random_state(9).split(&labels).expect("valid k");
    let max = shuffled.iter().map(|p| p.test.len()).max().unwrap_or(0);
    let min = shuffled.iter().map(|p| p.test.len()).min().unwrap_or(0);
    assert!(max - min <= 1);
}
