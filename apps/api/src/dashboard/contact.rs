use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub status: &'static str,
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}

pub fn accept(req: &ContactRequest) -> Result<ContactReceipt, AppError> {
    if req.name.trim().is_empty() || req.message.trim().is_empty() {
        return Err(AppError::Validation(
            "Name and message are required".to_string(),
        ));
    }
    let email = req.email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::Validation(format!("'{email}' is not an email address")));
    }

    let receipt = ContactReceipt {
        id: Uuid::new_v4(),
        status: "sent",
        message: "Your message has been sent successfully. We'll get back to you soon.",
        received_at: Utc::now(),
    };
    info!("Contact message {} from {email}", receipt.id);
    Ok(receipt)
}

/// POST /api/v1/contact
pub async fn handle_contact(
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactReceipt>), AppError> {
    Ok((StatusCode::ACCEPTED, Json(accept(&req)?)))
}
