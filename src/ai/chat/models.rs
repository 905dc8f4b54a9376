//! The models for a conversation with the species chatbot.
use serde::{Deserialize, Serialize};

use crate::openai::{Message, Role};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum TurnRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl From<TurnRole> for Role {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => Role::User,
            TurnRole::Assistant => Role::Assistant,
        }
    }
}

/// One prior message in a conversation. Turns are supplied by the
/// caller and never modified, so the fields are read-only.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatTurn {
    role: TurnRole,
    content: String,
}

impl ChatTurn {
    pub fn new(role: TurnRole, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    /// Length used for history budgeting, counted in characters
    /// rather than bytes so non-ASCII text isn't penalized.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<&ChatTurn> for Message {
    fn from(turn: &ChatTurn) -> Self {
        Message::new(turn.role.into(), &turn.content)
    }
}
