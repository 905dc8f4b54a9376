//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{Router, body::Body};

use species_chat::ai::chat::{BoxedCompletionBackend, OpenAiBackend, Sleeper, SpeciesChat};
use species_chat::api::AppState;
use species_chat::api::app;
use species_chat::core::AppConfig;

/// Config pointing the OpenAI backend at `api_hostname`, usually a
/// `mockito` server.
pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_model: String::from("gpt-4o-mini"),
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        history_budget: 6000,
    }
}

/// Records backoff delays without actually waiting.
#[derive(Clone, Default)]
pub struct InstantSleeper {
    pub delays: Arc<Mutex<Vec<Duration>>>,
}

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Creates a test application router whose chatbot talks to the
/// OpenAI compatible API at `api_hostname` and never sleeps between
/// retries.
pub fn test_app(api_hostname: &str, sleeper: InstantSleeper) -> Router {
    let config = test_config(api_hostname);
    let backend = OpenAiBackend::new(&config.openai_api_hostname, &config.openai_api_key);
    let chat = SpeciesChat::builder(Box::new(backend), &config.openai_model)
        .history_budget(config.history_budget)
        .sleeper(Box::new(sleeper))
        .build()
        .expect("Failed to build chat");
    app(Arc::new(AppState::new(chat)))
}

/// Creates a test application router whose chatbot uses `backend`
/// directly instead of an HTTP API.
pub fn test_app_with_backend(backend: BoxedCompletionBackend) -> Router {
    let chat = SpeciesChat::builder(backend, "gpt-4o-mini")
        .sleeper(Box::new(InstantSleeper::default()))
        .build()
        .expect("Failed to build chat");
    app(Arc::new(AppState::new(chat)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// A successful chat completion response body with `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
