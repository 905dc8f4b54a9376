//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::error::Category;

use super::public;
use crate::api::public::{ApiError, ErrorResponse};
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

fn bad_request(error: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
}

/// Answer the next message in a conversation with the species chatbot
async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    // The body is parsed by hand so any content type is accepted. Only
    // well-formed JSON with the wrong shape is the client's fault,
    // anything that isn't JSON at all is an internal error.
    let payload = match serde_json::from_slice::<public::ChatRequest>(&body) {
        Ok(payload) => payload,
        Err(e) if e.classify() == Category::Data => {
            tracing::debug!("Rejected chat request: {}", e);
            return Ok(bad_request(public::INVALID_REQUEST_MESSAGE));
        }
        Err(e) => return Err(e.into()),
    };

    let message = payload.message.trim().to_string();
    if message.is_empty() {
        return Ok(bad_request(public::EMPTY_MESSAGE_MESSAGE));
    }
    let history = payload.history.unwrap_or_default();

    // Run the chat in its own task so that retries finish even if the
    // client goes away. A panic in the task comes back as an error.
    let chat = Arc::clone(&state.chat);
    let response = tokio::spawn(async move { chat.respond(&message, &history).await }).await?;

    Ok(Json(public::ChatResponse::new(&response)).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
