use crate::algorithm::{self, DiffAlgorithm};
use crate::diff::EditOp;
use crate::tokenizers::Token;

/// Myers O(ND) diff algorithm (the default)
///
/// Greedy forward search over edit-graph diagonals, run on the
/// affix-trimmed middle of both sequences. Produces the same minimal edit
/// cost as [`super::LcsAlgorithm`] in time proportional to the size of the
/// difference rather than the product of the sequence lengths. Equal-cost
/// choices consume the original side first, matching the shared tie-break
/// rule.
pub struct MyersAlgorithm;

impl MyersAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MyersAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffAlgorithm for MyersAlgorithm {
    fn compute(&self, original: &[Token], revised: &[Token]) -> Vec<EditOp> {
        algorithm::align_with(original, revised, myers_matches)
    }
}

/// Forward Myers search with a full trace, backtracked to the matched pairs
fn myers_matches(original: &[Token], revised: &[Token]) -> Vec<(usize, usize)> {
    let n = original.len() as isize;
    let m = revised.len() as isize;

    if n == 0 || m == 0 {
        return vec![];
    }

    let max = n + m;
    let offset = max;
    let width = (2 * max + 1) as usize;

    // v[k + offset] holds the furthest x reached on diagonal k
    let mut v = vec![0isize; width];
    let mut trace: Vec<Vec<isize>> = Vec::new();
    let mut found_d = 0;

    'search: for d in 0..=max {
        trace.push(v.clone());

        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;

            // Extend from the better neighbouring diagonal; ties take the
            // deletion (rightward) step
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            // Follow the diagonal as far as the tokens keep matching
            while x < n && y < m && original[x as usize].text == revised[y as usize].text {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                found_d = d;
                break 'search;
            }

            k += 2;
        }
    }

    backtrack(original, revised, &trace, found_d, offset)
}

fn backtrack(
    original: &[Token],
    revised: &[Token],
    trace: &[Vec<isize>],
    d_final: isize,
    offset: isize,
) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    let mut x = original.len() as isize;
    let mut y = revised.len() as isize;

    for d in (1..=d_final).rev() {
        let v = &trace[d as usize];
        let k = x - y;
        let idx = (k + offset) as usize;

        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        // Record the diagonal run (snake) that led to (x, y)
        while x > prev_x && y > prev_y {
            matches.push(((x - 1) as usize, (y - 1) as usize));
            x -= 1;
            y -= 1;
        }

        x = prev_x;
        y = prev_y;
    }

    // Leading diagonal at depth zero
    while x > 0 && y > 0 {
        matches.push(((x - 1) as usize, (y - 1) as usize));
        x -= 1;
        y -= 1;
    }

    matches.reverse();
    matches
}
