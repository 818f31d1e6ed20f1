//! # Redraft
//!
//! A word-level revision diff library for LLM-assisted prose editing. Sends
//! text to a local inference service under one of two revision modes, then
//! turns the original and revised strings into a structurally faithful,
//! lossless diff: tokenization, minimal-edit alignment, span merging, and
//! typed rendering.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: split text into word/whitespace/punctuation runs
//!   without dropping a single character
//! - **Algorithms**: compute a minimal, deterministic alignment between the
//!   two token sequences
//! - **Spans**: merged same-kind runs carrying the literal substrings of
//!   both sides
//! - **Rendering**: typed segment streams a UI can colour without
//!   re-parsing markup
//! - **Assistant**: builds the mode's instruction prompt, calls the
//!   backend, validates the reply, and diffs the result
//!
//! ## Example
//!
//! ```rust
//! use redraft_core::{compute_diff, render};
//!
//! let result = compute_diff("I has went to the store.", "I went to the store.", None);
//! assert_eq!(result.reconstruct_original(), "I has went to the store.");
//! assert_eq!(result.reconstruct_revised(), "I went to the store.");
//!
//! let rendered = render(&result);
//! println!("{}", rendered.to_ansi());
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod render;
pub mod revise;
pub mod span;
pub mod tokenizers;

// Re-export main types
pub use config::{DiffAlgorithmKind, DiffConfig};
pub use diff::{DiffResult, DiffStatistics, EditOp, EditType};
pub use engine::DiffEngine;
pub use error::RevisionError;
pub use render::{render, side_by_side, RenderedDiff, Segment, SegmentKind};
pub use revise::{
    build_prompt, parse_response, Assistant, BackendConfig, OllamaBackend, RevisionBackend,
    RevisionMode, RevisionRequest,
};
pub use span::Span;

/// Main entry point for computing diffs between two strings
///
/// # Arguments
///
/// * `original` - The original text
/// * `revised` - The revised text
/// * `config` - Optional configuration (uses default if None)
///
/// # Example
///
/// ```rust
/// use redraft_core::compute_diff;
///
/// let result = compute_diff("hello world", "hello rust", None);
/// println!("{}", result.summary());
/// ```
pub fn compute_diff(original: &str, revised: &str, config: Option<DiffConfig>) -> DiffResult {
    let config = config.unwrap_or_default();
    let engine = DiffEngine::new(config);
    engine.diff(original, revised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_diff() {
        let result = compute_diff("hello world", "hello rust", None);
        assert!(!result.spans.is_empty());
        assert!(!result.is_unchanged());
    }

    #[test]
    fn test_with_lcs_algorithm() {
        let config = DiffConfig::default().with_algorithm(DiffAlgorithmKind::Lcs);

        let result = compute_diff("hello world", "hello world", Some(config));
        assert!(result.is_unchanged());
    }
}
