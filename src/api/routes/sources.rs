use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::api::AppState;
use crate::errors::ScandeckError;

pub async fn list_sources(State(state): State<AppState>) -> Json<Value> {
    let snapshot = state.snapshot.read().await;
    let sources: Vec<Value> = snapshot
        .sources()
        .into_iter()
        .map(|source| {
            json!({
                "source": source.as_str(),
                "records": snapshot.record_count(source),
            })
        })
        .collect();

    Json(json!({
        "provider": state.provider.provider_name(),
        "sources": sources,
        "loadedAt": snapshot.loaded_at.to_rfc3339(),
    }))
}

/// Fetches a fresh snapshot from the provider and swaps it in. Until the
/// swap happens, requests keep being served from the old snapshot.
pub async fn reload_snapshot(
    State(state): State<AppState>,
) -> Result<Json<Value>, ScandeckError> {
    let fresh = state.provider.fetch().await?;
    info!(
        provider = state.provider.provider_name(),
        sources = fresh.sources().len(),
        "Reloaded scanner snapshot"
    );

    let mut snapshot = state.snapshot.write().await;
    *snapshot = fresh;

    Ok(Json(json!({
        "reloaded": true,
        "sources": snapshot.sources().iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        "loadedAt": snapshot.loaded_at.to_rfc3339(),
    })))
}
