use std::time::Duration;

use async_trait::async_trait;

use crate::openai::{BackendError, CompletionRequest, completion};

/// Anything that can turn a `CompletionRequest` into text. The
/// orchestrator only ever talks to this trait so tests can swap in a
/// stub instead of hitting the network.
#[async_trait]
pub trait CompletionBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError>;
}

pub type BoxedCompletionBackend = Box<dyn CompletionBackend + Send + Sync + 'static>;

/// Delay between retry attempts.
#[async_trait]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

pub type BoxedSleeper = Box<dyn Sleeper + Send + Sync + 'static>;

#[derive(Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

/// Completion backend for OpenAI or any API that is compatible with
/// its chat completions endpoint.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
}

impl OpenAiBackend {
    pub fn new(api_hostname: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError> {
        completion(&self.client, request, &self.api_hostname, &self.api_key).await
    }
}
