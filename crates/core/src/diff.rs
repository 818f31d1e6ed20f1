//! Diff result types and structures

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Type of edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditType {
    /// Content remained unchanged
    Equal,
    /// Content was inserted
    Insert,
    /// Content was deleted
    Delete,
    /// Content was replaced (a deleted run aligned with an inserted run)
    Replace,
}

/// A single alignment operation over half-open token-index ranges
///
/// Emitted by the aligner in left-to-right order. The original-side ranges of
/// all ops are disjoint and cover the original token sequence exactly once;
/// likewise the revised-side ranges cover the revised sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Tokens present in both sequences
    Equal {
        original: Range<usize>,
        revised: Range<usize>,
    },
    /// Tokens present only in the revised sequence
    Insert { revised: Range<usize> },
    /// Tokens present only in the original sequence
    Delete { original: Range<usize> },
    /// A deleted run aligned with an inserted run at the same position
    Replace {
        original: Range<usize>,
        revised: Range<usize>,
    },
}

impl EditOp {
    /// The edit type of this operation
    pub fn edit_type(&self) -> EditType {
        match self {
            EditOp::Equal { .. } => EditType::Equal,
            EditOp::Insert { .. } => EditType::Insert,
            EditOp::Delete { .. } => EditType::Delete,
            EditOp::Replace { .. } => EditType::Replace,
        }
    }

    /// The range this operation covers in the original token sequence
    pub fn original_range(&self) -> Option<Range<usize>> {
        match self {
            EditOp::Equal { original, .. }
            | EditOp::Delete { original }
            | EditOp::Replace { original, .. } => Some(original.clone()),
            EditOp::Insert { .. } => None,
        }
    }

    /// The range this operation covers in the revised token sequence
    pub fn revised_range(&self) -> Option<Range<usize>> {
        match self {
            EditOp::Equal { revised, .. }
            | EditOp::Insert { revised }
            | EditOp::Replace { revised, .. } => Some(revised.clone()),
            EditOp::Delete { .. } => None,
        }
    }
}

/// Statistics about the diff
///
/// Token counts, not span counts: a replacement of three tokens by one
/// contributes three deletions and one insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStatistics {
    /// Number of tokens present only in the revised text
    pub insertions: usize,

    /// Number of tokens present only in the original text
    pub deletions: usize,

    /// Number of replacement runs (one deleted run aligned with one inserted run)
    pub replacements: usize,

    /// Number of tokens common to both texts
    pub unchanged: usize,

    /// Total edit distance (insertions + deletions)
    pub edit_distance: usize,
}

impl DiffStatistics {
    /// Tally statistics from an ordered operation list
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = Self::default();

        for op in ops {
            match op {
                EditOp::Equal { original, .. } => stats.unchanged += original.len(),
                EditOp::Insert { revised } => stats.insertions += revised.len(),
                EditOp::Delete { original } => stats.deletions += original.len(),
                EditOp::Replace { original, revised } => {
                    stats.deletions += original.len();
                    stats.insertions += revised.len();
                    stats.replacements += 1;
                }
            }
        }

        stats.edit_distance = stats.insertions + stats.deletions;
        stats
    }
}

/// Complete diff result
///
/// The sole output artifact of the engine; owned by the caller and never
/// mutated after construction. Concatenating the original-side text of every
/// span reproduces `original_text`; likewise for the revised side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Ordered spans covering both texts
    pub spans: Vec<Span>,

    /// Statistics about the diff
    pub statistics: DiffStatistics,

    /// Original text
    pub original_text: String,

    /// Revised text
    pub revised_text: String,
}

impl DiffResult {
    pub fn new(
        original_text: String,
        revised_text: String,
        spans: Vec<Span>,
        statistics: DiffStatistics,
    ) -> Self {
        Self {
            spans,
            statistics,
            original_text,
            revised_text,
        }
    }

    /// Check if the diff contains no changes
    pub fn is_unchanged(&self) -> bool {
        self.spans.iter().all(|s| s.kind == EditType::Equal)
    }

    /// Get only the changed spans (exclude Equal)
    pub fn changed_spans(&self) -> Vec<&Span> {
        self.spans
            .iter()
            .filter(|s| s.kind != EditType::Equal)
            .collect()
    }

    /// Reconstruct the original text from the spans
    pub fn reconstruct_original(&self) -> String {
        self.spans.iter().map(|s| s.original.as_str()).collect()
    }

    /// Reconstruct the revised text from the spans
    pub fn reconstruct_revised(&self) -> String {
        self.spans.iter().map(|s| s.revised.as_str()).collect()
    }

    /// Get a summary of the diff
    pub fn summary(&self) -> String {
        format!(
            "{} insertions, {} deletions, {} replacements, {} tokens unchanged",
            self.statistics.insertions,
            self.statistics.deletions,
            self.statistics.replacements,
            self.statistics.unchanged
        )
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Result ===")?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f, "\nSpans:")?;

        for (i, span) in self.spans.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, span.description())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_op_ranges() {
        let op = EditOp::Replace {
            original: 2..4,
            revised: 2..3,
        };

        assert_eq!(op.edit_type(), EditType::Replace);
        assert_eq!(op.original_range(), Some(2..4));
        assert_eq!(op.revised_range(), Some(2..3));

        let insert = EditOp::Insert { revised: 0..1 };
        assert_eq!(insert.original_range(), None);
        assert_eq!(insert.revised_range(), Some(0..1));
    }

    #[test]
    fn test_statistics_from_ops() {
        let ops = vec![
            EditOp::Equal {
                original: 0..3,
                revised: 0..3,
            },
            EditOp::Replace {
                original: 3..5,
                revised: 3..4,
            },
            EditOp::Delete { original: 5..6 },
        ];

        let stats = DiffStatistics::from_ops(&ops);
        assert_eq!(stats.unchanged, 3);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.deletions, 3);
        assert_eq!(stats.replacements, 1);
        assert_eq!(stats.edit_distance, 4);
    }

    #[test]
    fn test_diff_result_reconstruction() {
        let spans = vec![
            Span::new(EditType::Equal, "I ".to_string(), "I ".to_string()),
            Span::new(EditType::Delete, "has ".to_string(), String::new()),
            Span::new(EditType::Equal, "went".to_string(), "went".to_string()),
        ];
        let stats = DiffStatistics::default();
        let result = DiffResult::new("I has went".to_string(), "I went".to_string(), spans, stats);

        assert_eq!(result.reconstruct_original(), "I has went");
        assert_eq!(result.reconstruct_revised(), "I went");
        assert!(!result.is_unchanged());
        assert_eq!(result.changed_spans().len(), 1);
    }
}
