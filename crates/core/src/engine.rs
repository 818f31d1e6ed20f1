//! Main diff engine that orchestrates the diff process

use crate::algorithm::{DiffAlgorithm, LcsAlgorithm, MyersAlgorithm};
use crate::config::{DiffAlgorithmKind, DiffConfig};
use crate::diff::{DiffResult, DiffStatistics};
use crate::span::merge_spans;
use crate::tokenizers::{Token, WordTokenizer};

/// The main diff engine
///
/// The entire pipeline is pure and synchronous: each call operates only on
/// its inputs and stack-local data, so a single engine is safe to use from
/// concurrent requests.
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    /// Create a new diff engine with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Create a diff engine with the default configuration
    pub fn default_config() -> Self {
        Self::new(DiffConfig::default())
    }

    /// Compute the diff between two strings
    ///
    /// Tokenizes both sides, runs the configured alignment algorithm, merges
    /// adjacent same-kind operations into spans, and tallies statistics.
    /// Total for any pair of inputs, including empty strings.
    pub fn diff(&self, original: &str, revised: &str) -> DiffResult {
        let (original_tokens, revised_tokens) = self.tokenize(original, revised);

        let ops = self
            .algorithm()
            .compute(&original_tokens, &revised_tokens);

        let statistics = DiffStatistics::from_ops(&ops);
        let spans = merge_spans(&ops, &original_tokens, &revised_tokens);

        DiffResult::new(original.to_string(), revised.to_string(), spans, statistics)
    }

    fn tokenize(&self, original: &str, revised: &str) -> (Vec<Token>, Vec<Token>) {
        let tokenizer = self
            .config
            .tokenizer
            .as_ref()
            .map(|t| t.clone_box())
            .unwrap_or_else(|| Box::new(WordTokenizer::new()));

        (tokenizer.tokenize(original), tokenizer.tokenize(revised))
    }

    fn algorithm(&self) -> Box<dyn DiffAlgorithm> {
        match self.config.algorithm {
            DiffAlgorithmKind::Myers => Box::new(MyersAlgorithm::new()),
            DiffAlgorithmKind::Lcs => Box::new(LcsAlgorithm::new()),
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::default_config()
    }
}
