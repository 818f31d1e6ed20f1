//! Diff algorithms
//!
//! Provides alignment algorithms for computing the difference between two
//! token sequences. Comparison is by token text equality, case- and
//! whitespace-sensitive. Both implementations produce a minimum-edit
//! alignment: the total count of inserted plus deleted tokens is minimal
//! (a Replace costs one delete run plus one insert run).
//!
//! Tie-break rule, shared by all algorithms: the common prefix and suffix of
//! the two sequences are matched greedily before the core algorithm runs,
//! which pins the earliest matching run to its maximal length. Within the
//! core, equal-cost choices consume the original side first, so deletes come
//! before inserts. The operation list for a given input pair is therefore
//! identical across runs.
pub mod lcs;
pub mod myers;

pub use lcs::LcsAlgorithm;
pub use myers::MyersAlgorithm;

use crate::diff::EditOp;
use crate::tokenizers::Token;

/// Trait for diff algorithms
pub trait DiffAlgorithm: Send + Sync {
    /// Compute an ordered, fully-covering operation list between two token
    /// sequences
    fn compute(&self, original: &[Token], revised: &[Token]) -> Vec<EditOp>;
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Lengths of the common prefix and (non-overlapping) common suffix
fn common_affix_lens(original: &[Token], revised: &[Token]) -> (usize, usize) {
    let max = original.len().min(revised.len());

    let mut prefix = 0;
    while prefix < max && original[prefix].text == revised[prefix].text {
        prefix += 1;
    }

    let mut suffix = 0;
    while suffix < max - prefix
        && original[original.len() - 1 - suffix].text == revised[revised.len() - 1 - suffix].text
    {
        suffix += 1;
    }

    (prefix, suffix)
}

/// Run a core matcher on the affix-trimmed middle of both sequences
///
/// `core` receives the middle slices and returns the matched index pairs
/// within them, strictly increasing on both sides. The prefix and suffix
/// matches are re-attached before the operation list is built.
fn align_with<F>(original: &[Token], revised: &[Token], core: F) -> Vec<EditOp>
where
    F: FnOnce(&[Token], &[Token]) -> Vec<(usize, usize)>,
{
    let (prefix, suffix) = common_affix_lens(original, revised);
    let middle_original = &original[prefix..original.len() - suffix];
    let middle_revised = &revised[prefix..revised.len() - suffix];

    let mut matches: Vec<(usize, usize)> = (0..prefix).map(|i| (i, i)).collect();
    matches.extend(
        core(middle_original, middle_revised)
            .into_iter()
            .map(|(i, j)| (i + prefix, j + prefix)),
    );

    let original_tail = original.len() - suffix;
    let revised_tail = revised.len() - suffix;
    matches.extend((0..suffix).map(|i| (original_tail + i, revised_tail + i)));

    ops_from_matches(original, revised, &matches)
}

/// Build the coalesced operation list from matched index pairs
///
/// Matches must be strictly increasing on both sides. Gaps between matched
/// runs become Delete, Insert, or Replace operations; consecutive matches
/// collapse into one Equal operation. The resulting ranges cover both
/// sequences exactly once per side, in order.
fn ops_from_matches(
    original: &[Token],
    revised: &[Token],
    matches: &[(usize, usize)],
) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let mut original_idx = 0;
    let mut revised_idx = 0;
    let mut i = 0;

    while i < matches.len() {
        let (match_original, match_revised) = matches[i];

        if original_idx < match_original || revised_idx < match_revised {
            push_change(
                &mut ops,
                original_idx..match_original,
                revised_idx..match_revised,
            );
        }

        // Extend the equal run across consecutive matches
        let original_start = match_original;
        let revised_start = match_revised;
        let mut original_end = match_original + 1;
        let mut revised_end = match_revised + 1;
        i += 1;
        while i < matches.len() && matches[i] == (original_end, revised_end) {
            original_end += 1;
            revised_end += 1;
            i += 1;
        }

        ops.push(EditOp::Equal {
            original: original_start..original_end,
            revised: revised_start..revised_end,
        });

        original_idx = original_end;
        revised_idx = revised_end;
    }

    if original_idx < original.len() || revised_idx < revised.len() {
        push_change(
            &mut ops,
            original_idx..original.len(),
            revised_idx..revised.len(),
        );
    }

    ops
}

fn push_change(
    ops: &mut Vec<EditOp>,
    original: std::ops::Range<usize>,
    revised: std::ops::Range<usize>,
) {
    match (original.is_empty(), revised.is_empty()) {
        (false, false) => ops.push(EditOp::Replace { original, revised }),
        (false, true) => ops.push(EditOp::Delete { original }),
        (true, false) => ops.push(EditOp::Insert { revised }),
        (true, true) => {}
    }
}
