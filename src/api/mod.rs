pub mod errors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::ScandeckError;
use crate::scanners::{ScannerSnapshot, SnapshotProvider};

/// Shared server state: the provider that produces snapshots and the
/// snapshot currently being served. Requests read the snapshot; only
/// an explicit reload swaps it.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SnapshotProvider>,
    pub snapshot: Arc<RwLock<ScannerSnapshot>>,
}

pub async fn create_app_state(
    provider: Arc<dyn SnapshotProvider>,
) -> Result<AppState, ScandeckError> {
    let snapshot = provider.fetch().await?;
    info!(
        provider = provider.provider_name(),
        sources = snapshot.sources().len(),
        "Loaded initial scanner snapshot"
    );
    Ok(AppState {
        provider,
        snapshot: Arc::new(RwLock::new(snapshot)),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/findings", axum::routing::get(routes::findings::list_findings))
        .route("/api/findings/sorted", axum::routing::get(routes::findings::sorted_findings))
        .route("/api/findings/grouped", axum::routing::get(routes::findings::grouped_findings))
        .route("/api/findings/stats", axum::routing::get(routes::findings::finding_stats))
        .route("/api/findings/:id", axum::routing::get(routes::findings::get_finding))
        .route("/api/sources", axum::routing::get(routes::sources::list_sources))
        .route("/api/reload", axum::routing::post(routes::sources::reload_snapshot))
        // The dashboard frontend is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
