//! Identity providers: where `sign_in` gets its profile from.
//!
//! `AppState` carries an `Arc<dyn IdentityProvider>`; the mock is the only
//! backend today. A real OAuth provider plugs in here without touching the
//! session manager or its subscribers.

use anyhow::Result;
use async_trait::async_trait;

use crate::session::models::UserProfile;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self) -> Result<UserProfile>;
}

/// Always returns the same demo account.
pub struct MockIdentityProvider;

pub const MOCK_UID: &str = "mock-uid-12345";

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn authenticate(&self) -> Result<UserProfile> {
        Ok(UserProfile {
            uid: MOCK_UID.to_string(),
            email: Some("alex.doe@example.com".to_string()),
            display_name: Some("Alex Doe".to_string()),
            photo_url: Some("https://picsum.photos/seed/alex/100/100".to_string()),
            skills: Vec::new(),
            resume_url: None,
        })
    }
}
