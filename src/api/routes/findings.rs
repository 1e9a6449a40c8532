use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::errors::ScandeckError;
use crate::models::ScanSource;
use crate::triage;
use crate::triage::normalizer::NormalizedBatch;

#[derive(Deserialize)]
pub struct SourceQuery {
    /// Restrict to one scanner: "image" or "dynamic".
    pub source: Option<String>,
}

/// Normalizes the current snapshot for a request. Every endpoint derives
/// its view from this; the snapshot itself is never mutated.
async fn normalized(
    state: &AppState,
    source: Option<&str>,
) -> Result<NormalizedBatch, ScandeckError> {
    let filter = match source {
        Some(raw) => Some(raw.parse::<ScanSource>().map_err(ScandeckError::Config)?),
        None => None,
    };
    let snapshot = state.snapshot.read().await;
    snapshot.normalize(filter)
}

pub async fn list_findings(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<Value>, ScandeckError> {
    let batch = normalized(&state, query.source.as_deref()).await?;
    Ok(Json(json!({
        "findings": batch.findings,
        "total": batch.findings.len(),
        "warnings": batch.warnings,
    })))
}

pub async fn sorted_findings(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<Value>, ScandeckError> {
    let batch = normalized(&state, query.source.as_deref()).await?;
    let sorted = triage::sort(&batch.findings);
    Ok(Json(json!({
        "findings": sorted,
        "total": sorted.len(),
        "warnings": batch.warnings,
    })))
}

pub async fn grouped_findings(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<Value>, ScandeckError> {
    let batch = normalized(&state, query.source.as_deref()).await?;
    let groups = triage::group(&batch.findings);
    Ok(Json(json!({
        "groups": groups,
        "total": batch.findings.len(),
        "warnings": batch.warnings,
    })))
}

pub async fn finding_stats(
    State(state): State<AppState>,
    Query(query): Query<SourceQuery>,
) -> Result<Json<Value>, ScandeckError> {
    let batch = normalized(&state, query.source.as_deref()).await?;
    let stats = triage::summarize(&batch.findings);
    Ok(Json(json!({
        "stats": stats,
        "warnings": batch.warnings,
    })))
}

pub async fn get_finding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ScandeckError> {
    let batch = normalized(&state, None).await?;
    match triage::find_by_id(&batch.findings, &id) {
        Some(finding) => Ok(Json(json!(finding))),
        None => Err(ScandeckError::FindingNotFound(id)),
    }
}
