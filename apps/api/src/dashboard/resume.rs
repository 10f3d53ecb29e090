use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::assistant::ResumeReviewer;
use crate::errors::AppError;
use crate::state::AppState;

/// Upload limit shown to users ("PDF, DOC, DOCX up to 5MB").
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub file_name: String,
    pub feedback: String,
}

pub struct ResumeUpload {
    pub file_name: String,
    pub size: usize,
}

/// Checks the upload and asks the reviewer for feedback.
/// Documents are not parsed yet; the reviewer sees a stand-in built from the
/// file name.
pub async fn review_upload(
    reviewer: &dyn ResumeReviewer,
    upload: Option<ResumeUpload>,
) -> Result<FeedbackResponse, AppError> {
    let upload =
        upload.ok_or_else(|| AppError::Validation("Please upload a file first.".to_string()))?;

    let extension = upload
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.iter().any(|ext| *ext == extension) {
        return Err(AppError::Validation(
            "Only PDF, DOC, or DOCX files are supported.".to_string(),
        ));
    }
    if upload.size > MAX_RESUME_BYTES {
        return Err(AppError::Validation(
            "Files must be 5MB or smaller.".to_string(),
        ));
    }

    info!("Reviewing resume {} ({} bytes)", upload.file_name, upload.size);
    let text = format!("Resume content for {}", upload.file_name);
    let feedback = reviewer.review(&text).await?;
    Ok(FeedbackResponse {
        file_name: upload.file_name,
        feedback,
    })
}

/// POST /api/v1/resume/feedback (multipart, field `file`)
pub async fn handle_feedback(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FeedbackResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
        upload = Some(ResumeUpload {
            file_name,
            size: bytes.len(),
        });
    }

    Ok(Json(review_upload(state.reviewer.as_ref(), upload).await?))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::assistant::stub::{StubResumeReviewer, RESUME_FEEDBACK};
    use crate::assistant::AssistantError;

    struct FailingReviewer;

    #[async_trait]
    impl ResumeReviewer for FailingReviewer {
        async fn review(&self, _resume_text: &str) -> Result<String, AssistantError> {
            Err(AssistantError::Review("backend down".into()))
        }
    }

    fn upload(name: &str, size: usize) -> Option<ResumeUpload> {
        Some(ResumeUpload {
            file_name: name.to_string(),
            size,
        })
    }

    #[tokio::test]
    async fn test_missing_file() {
        let reviewer = StubResumeReviewer::new(Duration::ZERO);
        match review_upload(&reviewer, None).await {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Please upload a file first."),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_unsupported_type_and_oversize() {
        let reviewer = StubResumeReviewer::new(Duration::ZERO);
        assert!(review_upload(&reviewer, upload("cv.png", 10)).await.is_err());
        assert!(review_upload(&reviewer, upload("cv.pdf", MAX_RESUME_BYTES + 1))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_feedback_for_valid_upload() {
        let reviewer = StubResumeReviewer::new(Duration::ZERO);
        let response = review_upload(&reviewer, upload("Jane_CV.DOCX", 2048))
            .await
            .unwrap();
        assert_eq!(response.file_name, "Jane_CV.DOCX");
        assert_eq!(response.feedback, RESUME_FEEDBACK);
    }

    #[tokio::test]
    async fn test_reviewer_failure_surfaces_user_message() {
        let err = review_upload(&FailingReviewer, upload("cv.pdf", 10))
            .await
            .unwrap_err();
        match err {
            AppError::Assistant(e) => {
                assert_eq!(e.user_message(), "Failed to get feedback. Please try again.")
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
