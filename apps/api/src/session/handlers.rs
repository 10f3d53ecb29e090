use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
    Json,
};

use crate::errors::AppError;
use crate::session::models::{SessionState, UserProfile};
use crate::state::AppState;

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionState> {
    Json(state.session.state())
}

/// POST /api/v1/session/sign-in
pub async fn handle_sign_in(State(state): State<AppState>) -> Result<Json<SessionState>, AppError> {
    state.session.sign_in().await?;
    Ok(Json(state.session.state()))
}

/// POST /api/v1/session/sign-out
pub async fn handle_sign_out(State(state): State<AppState>) -> Result<Json<SessionState>, AppError> {
    state.session.sign_out().await?;
    Ok(Json(state.session.state()))
}

/// GET /api/v1/profile/:uid
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    state
        .session
        .profile(&uid)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {uid} not found")))
}

/// PUT /api/v1/profile/:uid
/// Saves the signed-in user's profile; the body's uid must match the path.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    if profile.uid != uid {
        return Err(AppError::Validation(format!(
            "Profile uid {} does not match path {uid}",
            profile.uid
        )));
    }
    Ok(Json(state.session.save_profile(profile).await?))
}

/// Middleware for gated endpoints: no user means a login prompt, and a
/// session that is still loading is reported as such rather than as
/// signed out.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = state.session.state();
    if session.loading {
        return Err(AppError::SessionLoading);
    }
    if session.user.is_none() {
        return Err(AppError::LoginRequired);
    }
    Ok(next.run(request).await)
}
