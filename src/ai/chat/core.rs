use std::time::Duration;

use anyhow::Result;

use super::backend::{BoxedCompletionBackend, BoxedSleeper, OpenAiBackend, TokioSleeper};
use super::errors::{
    AUTH_FAILED_MESSAGE, ErrorKind, GENERIC_FAILURE_MESSAGE, QUOTA_EXHAUSTED_MESSAGE, classify,
};
use super::guardrail::{REFUSAL_MESSAGE, is_off_topic};
use super::history::clamp_history;
use super::models::ChatTurn;
use crate::ai::prompt::species_system_prompt;
use crate::core::{AppConfig, DEFAULT_HISTORY_BUDGET};
use crate::openai::{CompletionRequest, Message, Role};

pub const MAX_ATTEMPTS: usize = 3;
pub const BACKOFF_STEP: Duration = Duration::from_millis(400);
pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f64 = 0.7;

/// How a single call to `SpeciesChat` ended. Every outcome maps to
/// exactly one message for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Refused,
    Answered(String),
    AuthFailed,
    QuotaExhausted,
    Failed,
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Refused => REFUSAL_MESSAGE,
            Outcome::Answered(text) => text,
            Outcome::AuthFailed => AUTH_FAILED_MESSAGE,
            Outcome::QuotaExhausted => QUOTA_EXHAUSTED_MESSAGE,
            Outcome::Failed => GENERIC_FAILURE_MESSAGE,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Outcome::Answered(text) => text,
            other => other.message().to_string(),
        }
    }
}

/// Answers questions about animals and species using an LLM.
///
/// Each call runs the topic guardrail, clamps the conversation history
/// to the character budget, then asks the backend for a completion,
/// retrying rate limits with a linear backoff. Holds no state between
/// calls so a single instance can be shared by every request.
///
/// Use `SpeciesChat::builder()` or `SpeciesChat::from_config()` to
/// construct one.
pub struct SpeciesChat {
    backend: BoxedCompletionBackend,
    sleeper: BoxedSleeper,
    model: String,
    system_message: String,
    history_budget: usize,
}

impl SpeciesChat {
    pub fn builder(backend: BoxedCompletionBackend, model: &str) -> SpeciesChatBuilder {
        SpeciesChatBuilder::new(backend, model)
    }

    /// Build the chatbot used by the server and CLI, talking to the
    /// OpenAI compatible API in `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let backend = OpenAiBackend::new(&config.openai_api_hostname, &config.openai_api_key);
        Self::builder(Box::new(backend), &config.openai_model)
            .history_budget(config.history_budget)
            .build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The request sent to the backend for `message`: the system
    /// message, whatever history fits the budget, then the message.
    pub fn completion_request(&self, message: &str, history: &[ChatTurn]) -> CompletionRequest {
        let clamped = clamp_history(history, self.history_budget);
        let mut messages = Vec::with_capacity(clamped.len() + 2);
        messages.push(Message::new(Role::System, &self.system_message));
        messages.extend(clamped.iter().map(Message::from));
        messages.push(Message::new(Role::User, message));

        CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// Reply to `message`. Never fails, every error is turned into a
    /// message suitable for showing to the user.
    pub async fn respond(&self, message: &str, history: &[ChatTurn]) -> String {
        self.outcome(message, history).await.into_message()
    }

    pub async fn outcome(&self, message: &str, history: &[ChatTurn]) -> Outcome {
        if is_off_topic(message) {
            tracing::debug!("Refusing off-topic message");
            return Outcome::Refused;
        }

        let request = self.completion_request(message, history);

        for attempt in 0..MAX_ATTEMPTS {
            tracing::debug!("Completion attempt {} of {}", attempt + 1, MAX_ATTEMPTS);

            let kind = match self.backend.complete(&request).await {
                Ok(content) => {
                    let content = content.trim();
                    if !content.is_empty() {
                        return Outcome::Answered(content.to_string());
                    }
                    tracing::warn!("Completion attempt {} returned no content", attempt + 1);
                    ErrorKind::EmptyResponse
                }
                Err(e) => match classify(&e) {
                    ErrorKind::InvalidCredential => {
                        tracing::error!("Completion API rejected the API key: {}", e);
                        return Outcome::AuthFailed;
                    }
                    ErrorKind::QuotaExhausted => {
                        tracing::error!("Completion API quota exhausted: {}", e);
                        return Outcome::QuotaExhausted;
                    }
                    kind if !kind.is_retryable() => {
                        tracing::error!("OpenAI API error: {}", e);
                        return Outcome::Failed;
                    }
                    kind => {
                        tracing::warn!("Completion attempt {} failed: {}", attempt + 1, e);
                        kind
                    }
                },
            };

            let is_last_attempt = attempt + 1 == MAX_ATTEMPTS;
            if kind == ErrorKind::RateLimited && !is_last_attempt {
                let delay = BACKOFF_STEP * (attempt as u32 + 1);
                tracing::warn!("Rate limited, retrying in {}ms", delay.as_millis());
                self.sleeper.sleep(delay).await;
            }
        }

        tracing::error!("Giving up on completion after {} attempts", MAX_ATTEMPTS);
        Outcome::Failed
    }
}

pub struct SpeciesChatBuilder {
    backend: BoxedCompletionBackend,
    sleeper: BoxedSleeper,
    model: String,
    system_message: Option<String>,
    history_budget: usize,
}

impl SpeciesChatBuilder {
    pub fn new(backend: BoxedCompletionBackend, model: &str) -> Self {
        Self {
            backend,
            sleeper: Box::new(TokioSleeper),
            model: model.to_string(),
            system_message: None,
            history_budget: DEFAULT_HISTORY_BUDGET,
        }
    }

    pub fn sleeper(mut self, sleeper: BoxedSleeper) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn history_budget(mut self, budget: usize) -> Self {
        self.history_budget = budget;
        self
    }

    pub fn system_message(mut self, system_message: &str) -> Self {
        self.system_message = Some(system_message.to_string());
        self
    }

    /// Fails if the default system message can't be rendered.
    pub fn build(self) -> Result<SpeciesChat> {
        let system_message = match self.system_message {
            Some(msg) => msg,
            None => species_system_prompt()?,
        };

        Ok(SpeciesChat {
            backend: self.backend,
            sleeper: self.sleeper,
            model: self.model,
            system_message,
            history_budget: self.history_budget,
        })
    }
}
