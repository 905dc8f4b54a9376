//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::chat::ChatTurn;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid or missing message";
pub const EMPTY_MESSAGE_MESSAGE: &str = "Message cannot be empty";

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    pub message: String,
    // Prior turns, oldest first
    pub history: Option<Vec<ChatTurn>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.into(),
        }
    }
}
