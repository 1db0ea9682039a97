//! Application wiring: state, routes, and server lifecycle.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use pixport_core::Config;

use crate::state::AppState;

/// Build the application state and router. The scratch directory is created
/// here so the first request never races directory setup.
pub async fn initialize_app(config: &Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config));

    tokio::fs::create_dir_all(&state.scratch_dir).await?;
    tracing::info!(scratch_dir = %state.scratch_dir.display(), "Scratch directory ready");

    routes::setup_routes(config, state)
}
