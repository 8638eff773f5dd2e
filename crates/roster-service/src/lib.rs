//! Backstage Roster Service
//!
//! Event-companion backend for the "Agents In Harmony" concert.
//! Attendees upload a photo at the door, get a spy codename and a
//! clearance status, and appear on the live venue roster.
//!
//! ## Endpoints
//!
//! - `POST /api/agents` - Register an attendee (multipart photo upload)
//! - `GET /api/agents` - Current roster, newest first
//! - `GET /api/agents/live` - Roster snapshots over server-sent events
//! - `GET /api/agents/{id}/photo` - One agent's processed photo
//! - `GET /api/program` - Setlist and audience missions
//! - `GET /health` - Health check

pub mod config;
pub mod feed;
pub mod handlers;
pub mod program;
pub mod register;
pub mod storage;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use config::Config;
pub use handlers::AppState;
pub use register::{PhotoUpload, Registrar};
pub use storage::{MemoryStore, RedisStore, RosterStore};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    let media_dir = match state.config.photo_store {
        config::PhotoStoreKind::Blob => Some(state.config.media_dir.clone()),
        config::PhotoStoreKind::Inline => None,
    };

    let state = Arc::new(state);

    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health_handler))
        // Registration and roster
        .route("/api/agents", post(handlers::register_agent_handler))
        .route("/api/agents", get(handlers::list_agents_handler))
        .route("/api/agents/live", get(feed::live_roster_handler))
        .route(
            "/api/agents/{id}/photo",
            get(handlers::agent_photo_handler),
        )
        // Event program
        .route("/api/program", get(handlers::program_handler));

    // Blob mode serves processed photos straight from disk.
    if let Some(dir) = media_dir {
        router = router.nest_service("/media", ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
