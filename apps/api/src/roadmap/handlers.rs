use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::templates::{classic_roadmap, RoadmapTemplate, POPULAR_TOPICS};
use crate::roadmap::view::ViewState;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub q: String,
}

#[derive(Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<&'static str>,
    pub search_enabled: bool,
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.roadmap.snapshot())
}

/// POST /api/v1/roadmap/search
/// Failures are reported in the view's `error` field; the previous template stays.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<ViewState> {
    Json(state.roadmap.search(&req.query).await)
}

/// GET /api/v1/roadmap/resolve?q=
/// Stateless lookup; does not touch the displayed view.
pub async fn handle_resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<RoadmapTemplate>, AppError> {
    state
        .roadmap
        .resolver()
        .resolve(&params.q)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::Validation("Query must not be blank".to_string()))
}

/// GET /api/v1/roadmap/classic
/// The fixed timeline; independent of searches.
pub async fn handle_classic() -> Json<RoadmapTemplate> {
    Json(classic_roadmap())
}

/// GET /api/v1/roadmap/topics
pub async fn handle_topics(State(state): State<AppState>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: POPULAR_TOPICS.to_vec(),
        search_enabled: state.roadmap.resolver().search_enabled(),
    })
}
