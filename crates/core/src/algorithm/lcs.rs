use crate::algorithm::{self, DiffAlgorithm};
use crate::diff::EditOp;
use crate::tokenizers::Token;

/// Longest-common-subsequence diff algorithm
///
/// Classic O(N·M) dynamic programming over the affix-trimmed middle of both
/// sequences. Serves as the reference implementation the faster algorithms
/// are checked against. Backtracking is deterministic: on equal-cost paths
/// the original side is consumed first (deletes before inserts).
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LcsAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn compute(&self, original: &[Token], revised: &[Token]) -> Vec<EditOp> {
        algorithm::align_with(original, revised, lcs_matches)
    }
}

fn lcs_matches(original: &[Token], revised: &[Token]) -> Vec<(usize, usize)> {
    let n = original.len();
    let m = revised.len();

    if n == 0 || m == 0 {
        return vec![];
    }

    // DP table
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if original[i - 1].text == revised[j - 1].text {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Backtrack to find the matched pairs
    let mut matches = Vec::new();
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        if original[i - 1].text == revised[j - 1].text {
            matches.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matches.reverse();
    matches
}
