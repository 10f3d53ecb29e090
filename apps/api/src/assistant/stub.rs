use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::assistant::{AssistantError, ChatMessage, InterviewResponder, ResumeReviewer};

pub const INTERVIEW_GREETING: &str =
    "Hello! I'm your AI interviewer. When you're ready, tell me a bit about yourself to begin.";

pub const INTERVIEW_FOLLOW_UP: &str =
    "That's interesting. Can you tell me about a challenging project you've worked on?";

pub const RESUME_FEEDBACK: &str = "\
**Overall Impression:** Strong resume with excellent potential. The layout is clean and easy to read.

**Suggestions for Improvement:**
- **Quantify Achievements:** Instead of \"Improved performance\", use metrics like \"Improved application performance by 15%\".
- **Action Verbs:** Start each bullet point with a strong action verb (e.g., \"Engineered\", \"Architected\", \"Implemented\").
- **Skills Section:** Consider adding a \"Proficient\" and \"Familiar\" subsection to better categorize your technical skills.

This is a great start! Keep refining it.";

/// Canned feedback after a fixed delay.
pub struct StubResumeReviewer {
    delay: Duration,
}

impl StubResumeReviewer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeReviewer for StubResumeReviewer {
    async fn review(&self, resume_text: &str) -> Result<String, AssistantError> {
        let preview: String = resume_text.chars().take(50).collect();
        debug!("Reviewing resume: {preview}...");
        tokio::time::sleep(self.delay).await;
        Ok(RESUME_FEEDBACK.to_string())
    }
}

/// Canned interviewer turn after a fixed delay, whatever was said.
pub struct StubInterviewResponder {
    delay: Duration,
}

impl StubInterviewResponder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl InterviewResponder for StubInterviewResponder {
    async fn reply(&self, history: &[ChatMessage]) -> Result<ChatMessage, AssistantError> {
        debug!("Interview turn after {} message(s)", history.len());
        tokio::time::sleep(self.delay).await;
        Ok(ChatMessage::ai(INTERVIEW_FOLLOW_UP))
    }
}
