//! Diff rendering
//!
//! Converts a span sequence into display-ready segment streams. Segments are
//! the source of truth; HTML and ANSI output are serializations on top, so a
//! UI layer can choose its own presentation without re-parsing markup.

use crate::diff::{DiffResult, EditType};
use serde::{Deserialize, Serialize};

/// Display classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Unchanged text
    Equal,
    /// Added text (revised side only)
    Insert,
    /// Removed text (original side only)
    Delete,
    /// Modified text; used by the side-by-side view so replacements can be
    /// coloured distinctly from pure inserts and deletes
    Replace,
}

/// A typed run of display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// An ordered sequence of display segments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderedDiff {
    pub segments: Vec<Segment>,
}

impl RenderedDiff {
    /// Reconstruct the original plain text (everything except Insert segments)
    pub fn original_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind != SegmentKind::Insert)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Reconstruct the revised plain text (everything except Delete segments)
    pub fn revised_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind != SegmentKind::Delete)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Serialize as HTML span markup
    ///
    /// Class names: `diff-added`, `diff-deleted`, `diff-modified`; unchanged
    /// text is emitted as a bare span.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for segment in &self.segments {
            let escaped = escape_html(&segment.text);
            match segment.kind {
                SegmentKind::Equal => {
                    html.push_str(&format!("<span>{}</span>", escaped));
                }
                SegmentKind::Insert => {
                    html.push_str(&format!("<span class=\"diff-added\">{}</span>", escaped));
                }
                SegmentKind::Delete => {
                    html.push_str(&format!("<span class=\"diff-deleted\">{}</span>", escaped));
                }
                SegmentKind::Replace => {
                    html.push_str(&format!("<span class=\"diff-modified\">{}</span>", escaped));
                }
            }
        }

        html
    }

    /// Serialize for terminal display
    ///
    /// Deletes are struck through in red, inserts green, replacements yellow.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Equal => out.push_str(&segment.text),
                SegmentKind::Insert => {
                    out.push_str("\x1b[32m");
                    out.push_str(&segment.text);
                    out.push_str("\x1b[0m");
                }
                SegmentKind::Delete => {
                    out.push_str("\x1b[9;31m");
                    out.push_str(&segment.text);
                    out.push_str("\x1b[0m");
                }
                SegmentKind::Replace => {
                    out.push_str("\x1b[33m");
                    out.push_str(&segment.text);
                    out.push_str("\x1b[0m");
                }
            }
        }

        out
    }
}

/// Render a diff as a single unified segment stream
///
/// Equal spans become Equal segments, deletions Delete segments, insertions
/// Insert segments; a Replace span becomes its Delete segment followed by
/// its Insert segment. Filtering the stream by kind recovers either plain
/// text exactly.
pub fn render(result: &DiffResult) -> RenderedDiff {
    let mut segments = Vec::new();

    for span in &result.spans {
        match span.kind {
            EditType::Equal => {
                segments.push(Segment::new(SegmentKind::Equal, span.original.clone()));
            }
            EditType::Insert => {
                segments.push(Segment::new(SegmentKind::Insert, span.revised.clone()));
            }
            EditType::Delete => {
                segments.push(Segment::new(SegmentKind::Delete, span.original.clone()));
            }
            EditType::Replace => {
                segments.push(Segment::new(SegmentKind::Delete, span.original.clone()));
                segments.push(Segment::new(SegmentKind::Insert, span.revised.clone()));
            }
        }
    }

    RenderedDiff { segments }
}

/// Render a diff as paired original-side and revised-side streams
///
/// The original stream carries Equal, Delete, and Replace segments; the
/// revised stream carries Equal, Insert, and Replace segments. Each stream
/// is lossless for its own side, and Replace segments keep their distinct
/// tag so the view can colour modifications separately.
pub fn side_by_side(result: &DiffResult) -> (RenderedDiff, RenderedDiff) {
    let mut original = Vec::new();
    let mut revised = Vec::new();

    for span in &result.spans {
        match span.kind {
            EditType::Equal => {
                original.push(Segment::new(SegmentKind::Equal, span.original.clone()));
                revised.push(Segment::new(SegmentKind::Equal, span.revised.clone()));
            }
            EditType::Insert => {
                revised.push(Segment::new(SegmentKind::Insert, span.revised.clone()));
            }
            EditType::Delete => {
                original.push(Segment::new(SegmentKind::Delete, span.original.clone()));
            }
            EditType::Replace => {
                original.push(Segment::new(SegmentKind::Replace, span.original.clone()));
                revised.push(Segment::new(SegmentKind::Replace, span.revised.clone()));
            }
        }
    }

    (
        RenderedDiff { segments: original },
        RenderedDiff { segments: revised },
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
