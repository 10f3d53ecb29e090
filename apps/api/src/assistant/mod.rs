//! Assistant backends: the single point of entry for "AI" answers.
//!
//! Handlers never produce feedback or interview replies themselves; they go
//! through `ResumeReviewer` and `InterviewResponder`, carried in `AppState` as
//! trait objects. The only implementations today are delayed canned
//! responses (see [`stub`]).

pub mod stub;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("resume review failed: {0}")]
    Review(String),

    #[error("interview reply failed: {0}")]
    Interview(String),
}

impl AssistantError {
    /// Message safe to show to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::Review(_) => "Failed to get feedback. Please try again.",
            AssistantError::Interview(_) => "Failed to get a reply. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }
}

/// Produces formatted feedback for a resume's text.
#[async_trait]
pub trait ResumeReviewer: Send + Sync {
    async fn review(&self, resume_text: &str) -> Result<String, AssistantError>;
}

/// Produces the interviewer's next turn given the conversation so far.
#[async_trait]
pub trait InterviewResponder: Send + Sync {
    async fn reply(&self, history: &[ChatMessage]) -> Result<ChatMessage, AssistantError>;
}
