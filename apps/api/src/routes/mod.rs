pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::dashboard::{aptitude, contact, interviews, progress, resume};
use crate::pages::handlers as pages;
use crate::roadmap::handlers as roadmap;
use crate::session::handlers as session;
use crate::state::AppState;

/// Multipart overhead on top of the largest accepted resume.
const RESUME_BODY_LIMIT: usize = resume::MAX_RESUME_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Gated: login prompt without a session, 503 while the session loads.
    let gated = Router::new()
        .route("/api/v1/interviews", get(interviews::handle_start))
        .route("/api/v1/interviews/reply", post(interviews::handle_reply))
        .route(
            "/api/v1/resume/feedback",
            post(resume::handle_feedback).layer(DefaultBodyLimit::max(RESUME_BODY_LIMIT)),
        )
        .route("/api/v1/progress", get(progress::handle_progress))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_session,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/sign-in", post(session::handle_sign_in))
        .route("/api/v1/session/sign-out", post(session::handle_sign_out))
        .route(
            "/api/v1/profile/:uid",
            get(session::handle_get_profile).put(session::handle_put_profile),
        )
        // Pages
        .route("/api/v1/pages", get(pages::handle_home_page))
        .route("/api/v1/pages/*path", get(pages::handle_page))
        // Roadmap
        .route("/api/v1/roadmap", get(roadmap::handle_get_roadmap))
        .route("/api/v1/roadmap/search", post(roadmap::handle_search))
        .route("/api/v1/roadmap/resolve", get(roadmap::handle_resolve))
        .route("/api/v1/roadmap/topics", get(roadmap::handle_topics))
        .route("/api/v1/roadmap/classic", get(roadmap::handle_classic))
        // Aptitude
        .route(
            "/api/v1/aptitude/questions/:index",
            get(aptitude::handle_question),
        )
        .route("/api/v1/aptitude/answer", post(aptitude::handle_answer))
        .route("/api/v1/aptitude/challenge", get(aptitude::handle_challenge))
        // Contact
        .route("/api/v1/contact", post(contact::handle_contact))
        .merge(gated)
        .with_state(state)
}
