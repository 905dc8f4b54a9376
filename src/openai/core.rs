use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Body of a `/v1/chat/completions` request. Serializes directly to
/// the payload the API expects.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Everything that can go wrong talking to an OpenAI compatible API.
/// `Api` keeps the raw status and error code so callers can decide
/// what to do with it.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("OpenAI API error (status {status}, code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("Request to the completion API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unable to decode completion response: {0}")]
    Decode(String),
}

// {
//     "error": {
//         "message": "You exceeded your current quota, ...",
//         "type": "insufficient_quota",
//         "param": null,
//         "code": "insufficient_quota"
//     }
// }
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

fn api_error(status: u16, body: &str) -> BackendError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => BackendError::Api {
            status,
            code: error.code,
            message: error.message.unwrap_or_default(),
        },
        Err(_) => BackendError::Api {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}

/// Sends a chat completion request and returns the content of the
/// first choice. A response without content returns an empty string
/// so the caller decides whether that counts as a failure.
pub async fn completion(
    client: &reqwest::Client,
    request: &CompletionRequest,
    api_hostname: &str,
    api_key: &str,
) -> Result<String, BackendError> {
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    let resp: Value = serde_json::from_str(&body)
        .map_err(|e| BackendError::Decode(format!("{}. Body: {}", e, body)))?;
    let content = resp["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    Ok(content)
}
