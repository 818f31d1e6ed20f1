//! End-to-end revision flow against fake backends
//!
//! No network: the backends here implement `RevisionBackend` directly, the
//! same seam the Ollama backend plugs into.

use async_trait::async_trait;
use redraft_core::{
    render, Assistant, EditType, RevisionBackend, RevisionError, RevisionMode, SegmentKind,
};
use std::sync::{Arc, Mutex};

/// Replies with a fixed revision and records every prompt it receives
struct ScriptedBackend {
    reply: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBackend {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl RevisionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<String, RevisionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Always fails with the given transport error
struct FailingBackend {
    timeout: bool,
}

#[async_trait]
impl RevisionBackend for FailingBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, RevisionError> {
        if self.timeout {
            Err(RevisionError::BackendTimeout)
        } else {
            Err(RevisionError::BackendUnavailable("connection refused".into()))
        }
    }
}

#[tokio::test]
async fn grammar_revision_end_to_end() {
    let backend = Box::new(ScriptedBackend::new("I went to the store yesterday."));
    let assistant = Assistant::new(backend);

    let result = assistant
        .revise(
            RevisionMode::GrammarCorrection,
            "I has went to the store yesterday.",
        )
        .await
        .unwrap();

    let changed = result.changed_spans();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].kind, EditType::Delete);
    assert_eq!(changed[0].original, "has ");

    assert_eq!(
        result.reconstruct_original(),
        "I has went to the store yesterday."
    );
    assert_eq!(
        result.reconstruct_revised(),
        "I went to the store yesterday."
    );

    let rendered = render(&result);
    assert!(rendered
        .segments
        .iter()
        .any(|s| s.kind == SegmentKind::Delete && s.text == "has "));
}

#[tokio::test]
async fn prompt_carries_mode_instruction_and_input() {
    let backend = ScriptedBackend::new("ok");
    let prompts = backend.prompts.clone();
    let assistant = Assistant::new(Box::new(backend));

    assistant
        .revise_str("grammar", "teh cat sat")
        .await
        .unwrap();
    assistant.revise_str("full", "teh cat sat").await.unwrap();

    let seen = prompts.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].contains("grammar, spelling, and punctuation"));
    assert!(seen[0].contains("teh cat sat"));
    assert!(seen[1].contains("clarity, style and academic tone"));
    assert!(seen[1].contains("teh cat sat"));
    assert_ne!(seen[0], seen[1]);
}

#[tokio::test]
async fn invalid_mode_never_reaches_the_backend() {
    struct PanickingBackend;

    #[async_trait]
    impl RevisionBackend for PanickingBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, RevisionError> {
            panic!("backend must not be called for an invalid mode");
        }
    }

    let assistant = Assistant::new(Box::new(PanickingBackend));
    let err = assistant
        .revise_str("creative", "some text")
        .await
        .unwrap_err();

    assert!(matches!(err, RevisionError::InvalidMode(m) if m == "creative"));
}

#[tokio::test]
async fn empty_input_is_rejected_before_the_backend() {
    let backend = ScriptedBackend::new("ignored");
    let prompts = backend.prompts.clone();
    let assistant = Assistant::new(Box::new(backend));

    for input in ["", "   ", "\n\t "] {
        let err = assistant
            .revise(RevisionMode::FullRevision, input)
            .await
            .unwrap_err();
        assert!(matches!(err, RevisionError::EmptyInput));
    }

    assert!(prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_backend_reply_is_an_empty_response_error() {
    let assistant = Assistant::new(Box::new(ScriptedBackend::new("   \n")));

    let err = assistant
        .revise(RevisionMode::GrammarCorrection, "fine input")
        .await
        .unwrap_err();
    assert!(matches!(err, RevisionError::EmptyResponse));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn transport_failures_surface_as_retryable() {
    let timeout = Assistant::new(Box::new(FailingBackend { timeout: true }));
    let err = timeout
        .revise(RevisionMode::FullRevision, "some text")
        .await
        .unwrap_err();
    assert!(matches!(err, RevisionError::BackendTimeout));
    assert!(err.is_retryable());

    let unavailable = Assistant::new(Box::new(FailingBackend { timeout: false }));
    let err = unavailable
        .revise(RevisionMode::FullRevision, "some text")
        .await
        .unwrap_err();
    assert!(matches!(err, RevisionError::BackendUnavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unchanged_revision_is_a_single_equal_span() {
    let assistant = Assistant::new(Box::new(ScriptedBackend::new("Already perfect prose.")));

    let result = assistant
        .revise(RevisionMode::GrammarCorrection, "Already perfect prose.")
        .await
        .unwrap();

    assert!(result.is_unchanged());
    assert_eq!(result.spans.len(), 1);
}
