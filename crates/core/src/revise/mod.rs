//! Revision request orchestration
//!
//! Maps a revision mode to its fixed instruction template, validates the
//! backend's reply, and runs the diff engine over the original and revised
//! texts. This module is the only place in the crate that talks to the
//! outside world; everything downstream of it is pure.

mod backend;

pub use backend::{BackendConfig, OllamaBackend, RevisionBackend};

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::engine::DiffEngine;
use crate::error::RevisionError;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

const GRAMMAR_INSTRUCTION: &str = "Correct the grammar, spelling, and punctuation in the \
     following text. Do **not** change the style, tone, vocabulary, structure, or meaning. \
     Respond with **only** the corrected text.";

const FULL_INSTRUCTION: &str = "Improve the clarity, style and academic tone of the \
     following text. Do **not** change the meaning and the language. Respond with the \
     corrected text **only**.";

/// The supported revision intents
///
/// A closed enum with an exhaustive template mapping: adding a third mode is
/// a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionMode {
    /// Fix grammar, spelling, and punctuation only
    GrammarCorrection,
    /// Full clarity/tone/structure revision
    FullRevision,
}

impl RevisionMode {
    /// The instruction template for this mode
    pub fn instruction(&self) -> &'static str {
        match self {
            RevisionMode::GrammarCorrection => GRAMMAR_INSTRUCTION,
            RevisionMode::FullRevision => FULL_INSTRUCTION,
        }
    }

    /// The wire literal for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            RevisionMode::GrammarCorrection => "grammar",
            RevisionMode::FullRevision => "full",
        }
    }
}

impl FromStr for RevisionMode {
    type Err = RevisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grammar" => Ok(RevisionMode::GrammarCorrection),
            "full" => Ok(RevisionMode::FullRevision),
            other => Err(RevisionError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for RevisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable revision request, created per user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRequest {
    pub mode: RevisionMode,
    pub source_text: String,
}

impl RevisionRequest {
    pub fn new(mode: RevisionMode, source_text: impl Into<String>) -> Self {
        Self {
            mode,
            source_text: source_text.into(),
        }
    }

    /// The full prompt sent to the backend
    pub fn prompt(&self) -> String {
        build_prompt(self.mode, &self.source_text)
    }
}

/// Build the instruction payload for the given mode and source text
pub fn build_prompt(mode: RevisionMode, source_text: &str) -> String {
    format!("{}\n\n{}", mode.instruction(), source_text)
}

/// Validate and normalize a raw backend reply
///
/// Fails with `EmptyResponse` on blank or whitespace-only text, and with
/// `MalformedResponse` when the payload cannot be interpreted as plain text.
pub fn parse_response(raw: &str) -> Result<String, RevisionError> {
    if raw.contains('\u{0}') {
        return Err(RevisionError::MalformedResponse(
            "response contains non-text data".to_string(),
        ));
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RevisionError::EmptyResponse);
    }

    Ok(trimmed.to_string())
}

/// The revision orchestrator
///
/// Owns a backend and a diff configuration; each `revise` call is
/// independent, so one assistant can serve concurrent requests. Dropping
/// the returned future cancels the in-flight backend request without
/// corrupting any state — the engine holds none across calls.
pub struct Assistant {
    backend: Box<dyn RevisionBackend>,
    diff_config: DiffConfig,
}

impl Assistant {
    /// Create an assistant over the given backend with default diff settings
    pub fn new(backend: Box<dyn RevisionBackend>) -> Self {
        Self {
            backend,
            diff_config: DiffConfig::default(),
        }
    }

    /// Set the diff configuration
    pub fn with_diff_config(mut self, diff_config: DiffConfig) -> Self {
        self.diff_config = diff_config;
        self
    }

    /// Revise `text` under `mode` and diff the result against the input
    ///
    /// The source text is trimmed before prompting, mirroring what the
    /// backend is actually asked to revise; the returned diff's original
    /// side is the trimmed text.
    pub async fn revise(
        &self,
        mode: RevisionMode,
        text: &str,
    ) -> Result<DiffResult, RevisionError> {
        let source = text.trim();
        if source.is_empty() {
            return Err(RevisionError::EmptyInput);
        }

        let request = RevisionRequest::new(mode, source);
        debug!(mode = %mode, chars = source.len(), "requesting revision");

        let raw = self.backend.complete(&request.prompt()).await?;
        let revised = parse_response(&raw)?;
        info!(mode = %mode, "revision received");

        let engine = DiffEngine::new(self.diff_config.clone());
        Ok(engine.diff(source, &revised))
    }

    /// Revise with a wire-format mode literal (`"grammar"` or `"full"`)
    pub async fn revise_str(&self, mode: &str, text: &str) -> Result<DiffResult, RevisionError> {
        self.revise(mode.parse()?, text).await
    }
}
