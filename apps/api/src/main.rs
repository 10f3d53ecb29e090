mod assistant;
mod config;
mod dashboard;
mod errors;
mod pages;
mod roadmap;
mod routes;
mod session;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::assistant::stub::{StubInterviewResponder, StubResumeReviewer};
use crate::config::Config;
use crate::roadmap::search::CustomSearchClient;
use crate::roadmap::{RoadmapView, TopicResolver};
use crate::routes::build_router;
use crate::session::identity::MockIdentityProvider;
use crate::session::SessionManager;
use crate::state::AppState;
use crate::storage::{FileSlotStore, MemorySlotStore, SlotStore, MEMORY_STORAGE};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AI Mentor API v{}", env!("CARGO_PKG_VERSION"));

    // Session: one slot in a JSON file, read once after a simulated identity check
    let store: Arc<dyn SlotStore> = if config.storage_path.as_os_str() == MEMORY_STORAGE {
        info!("Session storage is in-memory; sign-ins will not survive a restart");
        Arc::new(MemorySlotStore::new())
    } else {
        let file = FileSlotStore::new(config.storage_path.clone());
        info!("Session storage at {}", file.path().display());
        Arc::new(file)
    };
    let session = SessionManager::new(store, Arc::new(MockIdentityProvider));
    let _session_log = session.on_change(|state| match &state.user {
        Some(user) => debug!("Session now signed in as {}", user.uid),
        None => debug!("Session now signed out"),
    });
    let _initial_read = session.initialize(config.session_init_delay);

    // Roadmap resolver, with search augmentation only when fully configured
    let resolver = match config.search.clone() {
        Some(credentials) => match CustomSearchClient::new(credentials) {
            Ok(client) => {
                info!("Roadmap search augmentation enabled");
                TopicResolver::with_search(Arc::new(client))
            }
            Err(e) => {
                warn!("Search client unavailable ({e}); using static roadmaps only");
                TopicResolver::new()
            }
        },
        None => {
            info!("Search credentials not set; using static roadmaps only");
            TopicResolver::new()
        }
    };

    let state = AppState {
        session,
        roadmap: Arc::new(RoadmapView::new(resolver)),
        reviewer: Arc::new(StubResumeReviewer::new(config.assistant_delay)),
        interviewer: Arc::new(StubInterviewResponder::new(config.assistant_delay)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
