//! Backstage Roster Service
//!
//! REST API for attendee registration and the live venue roster

use anyhow::{Context, Result};
use roster_service::{
    create_router, AppState, Config, MemoryStore, RedisStore, Registrar, RosterStore,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .ensure_directories()
        .context("Failed to create media directory")?;

    info!("Starting Backstage Roster Service");
    info!("Listening on {}", config.api_address());

    // Initialize the roster store
    let store: Arc<dyn RosterStore> = if config.mock_mode {
        info!("Mock mode: using the in-memory roster store");
        Arc::new(MemoryStore::new())
    } else {
        info!("Redis URL: {}", config.redis_url);
        Arc::new(
            RedisStore::new(&config.redis_url)
                .await
                .context("Failed to initialize the roster store")?,
        )
    };

    // Seed the used-codename set from whatever is already on the
    // roster so restarts do not hand out repeats.
    let used_codenames = match store.list_agents().await {
        Ok(agents) => agents.into_iter().map(|a| a.codename).collect(),
        Err(err) => {
            warn!("Could not preload used codenames: {err}");
            HashSet::new()
        }
    };
    info!("Preloaded {} used codenames", used_codenames.len());

    // Create application state
    let registrar = Registrar::from_config(&config, store.clone());
    let state = AppState {
        store,
        registrar,
        used_codenames: RwLock::new(used_codenames),
        config: config.clone(),
    };

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(&config.api_address())
        .await
        .context("Failed to bind to address")?;

    info!(
        "Backstage Roster Service running on http://{}",
        config.api_address()
    );

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
