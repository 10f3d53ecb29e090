use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::stub::INTERVIEW_GREETING;
use crate::assistant::{ChatMessage, InterviewResponder};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    /// Conversation so far, as returned by the previous call.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
}

/// Starts a conversation with the interviewer's greeting.
pub fn opening() -> Conversation {
    Conversation {
        messages: vec![ChatMessage::ai(INTERVIEW_GREETING)],
    }
}

/// Appends the user's message and the interviewer's answer.
/// An empty history is treated as a fresh conversation.
pub async fn take_turn(
    responder: &dyn InterviewResponder,
    req: ReplyRequest,
) -> Result<Conversation, AppError> {
    let text = req.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }

    let mut messages = if req.history.is_empty() {
        opening().messages
    } else {
        req.history
    };
    messages.push(ChatMessage::user(text));

    let reply = responder.reply(&messages).await?;
    messages.push(reply);
    Ok(Conversation { messages })
}

/// GET /api/v1/interviews
pub async fn handle_start() -> Json<Conversation> {
    Json(opening())
}

/// POST /api/v1/interviews/reply
pub async fn handle_reply(
    State(state): State<AppState>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<Conversation>, AppError> {
    Ok(Json(take_turn(state.interviewer.as_ref(), req).await?))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::assistant::stub::{StubInterviewResponder, INTERVIEW_FOLLOW_UP};
    use crate::assistant::Sender;

    #[tokio::test(start_paused = true)]
    async fn test_turn_appends_user_then_ai() {
        let responder = StubInterviewResponder::new(Duration::from_secs(2));
        let req = ReplyRequest {
            history: opening().messages,
            message: "  I like distributed systems.  ".to_string(),
        };

        let convo = take_turn(&responder, req).await.unwrap();

        assert_eq!(convo.messages.len(), 3);
        assert_eq!(convo.messages[1], ChatMessage::user("I like distributed systems."));
        assert_eq!(convo.messages[2].sender, Sender::Ai);
        assert_eq!(convo.messages[2].text, INTERVIEW_FOLLOW_UP);
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let responder = StubInterviewResponder::new(Duration::ZERO);
        let req = ReplyRequest {
            history: vec![],
            message: "   ".to_string(),
        };
        assert!(matches!(
            take_turn(&responder, req).await,
            Err(AppError::Validation(_))
        ));
    }
}
