use serde::{Deserialize, Serialize};

/// The signed-in principal, stored verbatim in the `"user"` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

/// Snapshot observed by subscribers.
///
/// `loading` is true only until the initial storage read completes; it is
/// distinct from `user: None`, which means "signed out".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub loading: bool,
    pub user: Option<UserProfile>,
}

impl SessionState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            user: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
