//! Revision backends
//!
//! `RevisionBackend` is the seam between the orchestrator and the inference
//! service: a fake implementation stands in for the model in tests, and
//! `OllamaBackend` talks to a local Ollama server over HTTP.

use crate::error::RevisionError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// An opaque completion function mapping a prompt to revised text
///
/// Implementations may be slow or hang; callers cancel by dropping the
/// future. The orchestrator never retries — retry policy belongs to the
/// caller.
#[async_trait]
pub trait RevisionBackend: Send + Sync {
    /// Send one prompt, receive one textual completion
    async fn complete(&self, prompt: &str) -> Result<String, RevisionError>;
}

/// Configuration for the Ollama backend
///
/// An explicit immutable value passed in at construction, so backends with
/// different endpoints or models can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the Ollama server
    pub base_url: String,

    /// Model name passed in each generate request
    pub model: String,

    /// Bound on the whole request, connection included
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Default configuration, honouring `OLLAMA_BASE_URL`/`OLLAMA_HOST`
    pub fn from_env() -> Self {
        let base_url = std::env::var("OLLAMA_BASE_URL")
            .or_else(|_| std::env::var("OLLAMA_HOST"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Local Ollama backend
///
/// Posts to `{base_url}/api/generate` with streaming disabled and reads the
/// `response` field of the JSON reply.
pub struct OllamaBackend {
    client: Client,
    config: BackendConfig,
}

impl OllamaBackend {
    /// Create a backend from the environment-derived default configuration
    pub fn new() -> Result<Self, RevisionError> {
        Self::with_config(BackendConfig::from_env())
    }

    /// Create a backend with an explicit configuration
    pub fn with_config(config: BackendConfig) -> Result<Self, RevisionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RevisionError::BackendUnavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration this backend was built with
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[async_trait]
impl RevisionBackend for OllamaBackend {
    async fn complete(&self, prompt: &str) -> Result<String, RevisionError> {
        let url = format!(
            "{}/api/generate",
            self.config.base_url.trim_end_matches('/')
        );
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(RevisionError::BackendUnavailable(format!(
                "{status}: {detail}"
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RevisionError::MalformedResponse(e.to_string()))?;

        Ok(payload.response)
    }
}

fn map_transport_error(err: reqwest::Error) -> RevisionError {
    if err.is_timeout() {
        RevisionError::BackendTimeout
    } else {
        RevisionError::BackendUnavailable(err.to_string())
    }
}
