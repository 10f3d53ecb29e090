use std::sync::Arc;

use crate::assistant::{InterviewResponder, ResumeReviewer};
use crate::roadmap::RoadmapView;
use crate::session::SessionManager;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one session for this deployment; gated routes read it per request.
    pub session: Arc<SessionManager>,
    /// What the roadmap page currently shows. Searches are last-write-wins.
    pub roadmap: Arc<RoadmapView>,
    /// Pluggable resume reviewer. Default: canned feedback after a delay.
    pub reviewer: Arc<dyn ResumeReviewer>,
    /// Pluggable interviewer. Default: canned follow-up after a delay.
    pub interviewer: Arc<dyn InterviewResponder>,
}
