use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::pages::{render, Page, PageView};
use crate::state::AppState;

/// GET /api/v1/pages
pub async fn handle_home_page(State(state): State<AppState>) -> Json<PageView> {
    Json(render(Page::Home, &state.session.state()))
}

/// GET /api/v1/pages/*path
/// Unknown paths still get a page (the not-found page), with a 404 status.
pub async fn handle_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> (StatusCode, Json<PageView>) {
    let page = Page::from_path(&format!("/{}", path.trim_start_matches('/')));
    let status = if page == Page::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(render(page, &state.session.state())))
}
