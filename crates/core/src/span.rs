//! Span merging and lossless text reconstruction
//!
//! Coalesces adjacent same-kind edit operations into user-facing spans and
//! reconstructs each span's literal substrings from the referenced tokens.
//! Merging only groups adjacency; it never reorders operations.

use crate::diff::{EditOp, EditType};
use crate::tokenizers::Token;
use serde::{Deserialize, Serialize};

/// A renderable run of one or more adjacent same-kind edit operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The kind of change this span represents
    pub kind: EditType,

    /// Literal substring on the original side (empty for Insert spans)
    pub original: String,

    /// Literal substring on the revised side (empty for Delete spans)
    pub revised: String,
}

impl Span {
    pub fn new(kind: EditType, original: String, revised: String) -> Self {
        Self {
            kind,
            original,
            revised,
        }
    }

    /// Get a human-readable description of this span
    pub fn description(&self) -> String {
        match self.kind {
            EditType::Equal => format!("Equal: {:?}", self.original),
            EditType::Insert => format!("Insert: {:?}", self.revised),
            EditType::Delete => format!("Delete: {:?}", self.original),
            EditType::Replace => format!("Replace: {:?} → {:?}", self.original, self.revised),
        }
    }
}

/// Merge an ordered operation list into spans with reconstructed text
///
/// Consecutive operations of identical kind collapse into one span. The
/// span texts are built by concatenating the referenced token texts in
/// order, which keeps the result lossless: the original-side texts of all
/// spans concatenate to the original input, and likewise for the revised
/// side.
pub fn merge_spans(ops: &[EditOp], original: &[Token], revised: &[Token]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();

    for op in ops {
        let original_text = op
            .original_range()
            .map(|r| slice_text(original, r))
            .unwrap_or_default();
        let revised_text = op
            .revised_range()
            .map(|r| slice_text(revised, r))
            .unwrap_or_default();

        match spans.last_mut() {
            Some(last) if last.kind == op.edit_type() => {
                last.original.push_str(&original_text);
                last.revised.push_str(&revised_text);
            }
            _ => {
                spans.push(Span::new(op.edit_type(), original_text, revised_text));
            }
        }
    }

    spans
}

fn slice_text(tokens: &[Token], range: std::ops::Range<usize>) -> String {
    tokens[range].iter().map(|t| t.text.as_str()).collect()
}
