//! Configuration for the diff engine

use crate::tokenizers::Tokenizer;

/// Diff algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffAlgorithmKind {
    /// Myers O(ND) algorithm (default, fast for small differences)
    Myers,
    /// Dynamic-programming LCS (reference implementation, O(N·M))
    Lcs,
}

impl Default for DiffAlgorithmKind {
    fn default() -> Self {
        Self::Myers
    }
}

/// Configuration for diff computation
///
/// Immutable once constructed; the engine clones what it needs, so multiple
/// engines with different configurations can run concurrently.
#[derive(Clone, Default)]
pub struct DiffConfig {
    /// Algorithm to use for computing diffs
    pub algorithm: DiffAlgorithmKind,

    /// Tokenizer to use (word-level when not set)
    pub tokenizer: Option<Box<dyn Tokenizer>>,
}

impl DiffConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diff algorithm
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }
}
