//! Revision flow without a running model server
//!
//! Wires the assistant to a canned backend through the same `RevisionBackend`
//! seam the Ollama backend uses. Swap in `OllamaBackend::new()` to talk to a
//! real local model.

use async_trait::async_trait;
use redraft_core::{render, Assistant, RevisionBackend, RevisionError, RevisionMode};

/// Pretends to be the model: always returns the same corrected sentence
struct CannedBackend;

#[async_trait]
impl RevisionBackend for CannedBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, RevisionError> {
        Ok("I went to the store yesterday.".to_string())
    }
}

#[tokio::main]
async fn main() -> Result<(), RevisionError> {
    let assistant = Assistant::new(Box::new(CannedBackend));

    let draft = "I has went to the store yesterday.";
    let result = assistant
        .revise(RevisionMode::GrammarCorrection, draft)
        .await?;

    println!("Draft:   {}", draft);
    println!("Revised: {}", result.revised_text);
    println!("\n{}", render(&result).to_ansi());
    println!("\n{}", result.summary());

    Ok(())
}
