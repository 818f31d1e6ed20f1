//! Property tests for the diff engine
//!
//! The engine path must be total: any two strings, including empty ones,
//! produce a valid result that reconstructs both inputs exactly.

use proptest::prelude::*;
use redraft_core::{compute_diff, DiffAlgorithmKind, DiffConfig, EditType};

fn config(algorithm: DiffAlgorithmKind) -> Option<DiffConfig> {
    Some(DiffConfig::default().with_algorithm(algorithm))
}

proptest! {
    #[test]
    fn round_trip_original(a in ".*", b in ".*") {
        for algorithm in [DiffAlgorithmKind::Myers, DiffAlgorithmKind::Lcs] {
            let result = compute_diff(&a, &b, config(algorithm));
            prop_assert_eq!(result.reconstruct_original(), a.clone());
        }
    }

    #[test]
    fn round_trip_revised(a in ".*", b in ".*") {
        for algorithm in [DiffAlgorithmKind::Myers, DiffAlgorithmKind::Lcs] {
            let result = compute_diff(&a, &b, config(algorithm));
            prop_assert_eq!(result.reconstruct_revised(), b.clone());
        }
    }

    #[test]
    fn identity_yields_single_equal_span(s in ".*") {
        let result = compute_diff(&s, &s, None);

        if s.is_empty() {
            prop_assert!(result.spans.is_empty());
        } else {
            prop_assert_eq!(result.spans.len(), 1);
            prop_assert_eq!(result.spans[0].kind, EditType::Equal);
        }
        prop_assert_eq!(result.statistics.edit_distance, 0);
    }

    #[test]
    fn cost_is_symmetric(a in ".*", b in ".*") {
        for algorithm in [DiffAlgorithmKind::Myers, DiffAlgorithmKind::Lcs] {
            let forward = compute_diff(&a, &b, config(algorithm));
            let backward = compute_diff(&b, &a, config(algorithm));

            prop_assert_eq!(
                forward.statistics.insertions,
                backward.statistics.deletions
            );
            prop_assert_eq!(
                forward.statistics.deletions,
                backward.statistics.insertions
            );
            prop_assert_eq!(
                forward.statistics.edit_distance,
                backward.statistics.edit_distance
            );
        }
    }

    #[test]
    fn repeated_calls_are_byte_identical(a in ".*", b in ".*") {
        for algorithm in [DiffAlgorithmKind::Myers, DiffAlgorithmKind::Lcs] {
            let first = compute_diff(&a, &b, config(algorithm));
            let second = compute_diff(&a, &b, config(algorithm));
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn myers_and_lcs_agree_on_cost(a in ".*", b in ".*") {
        let myers = compute_diff(&a, &b, config(DiffAlgorithmKind::Myers));
        let lcs = compute_diff(&a, &b, config(DiffAlgorithmKind::Lcs));
        prop_assert_eq!(
            myers.statistics.edit_distance,
            lcs.statistics.edit_distance
        );
    }
}

#[test]
fn empty_original_yields_single_insert_span() {
    let result = compute_diff("", "a brand new sentence", None);

    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].kind, EditType::Insert);
    assert_eq!(result.spans[0].revised, "a brand new sentence");
}

#[test]
fn empty_revised_yields_single_delete_span() {
    let result = compute_diff("everything removed", "", None);

    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].kind, EditType::Delete);
    assert_eq!(result.spans[0].original, "everything removed");
}

#[test]
fn single_word_removal_groups_into_one_delete() {
    let result = compute_diff(
        "I has went to the store yesterday.",
        "I went to the store yesterday.",
        None,
    );

    let changed = result.changed_spans();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].kind, EditType::Delete);
    assert_eq!(changed[0].original, "has ");

    assert_eq!(
        result.reconstruct_original(),
        "I has went to the store yesterday."
    );
    assert_eq!(
        result.reconstruct_revised(),
        "I went to the store yesterday."
    );
}
