//! HTTP handlers for the DocWatch API

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use docwatch_types::{AuditResult, Severity};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{AuditRequest, HealthResponse};
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Service info endpoint
pub async fn info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": state.service.name,
        "version": state.service.version,
        "description": state.service.description,
        "endpoints": {
            "audit": "/audit",
            "health": "/health"
        }
    }))
}

/// Audit one patient's document set
pub async fn audit_documents(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<AuditResult>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let result = state.auditor.audit(&req.records, req.qa_time_manual_minutes);

    if let Some(message) = &result.error {
        tracing::info!("Audit rejected: {}", message);
        return Ok(Json(result));
    }

    let patients: Vec<&str> = {
        let mut ids: Vec<&str> = req.records.iter().map(|r| r.patient_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    };

    for finding in result
        .inconsistencies
        .iter()
        .filter(|f| f.severity == Severity::High)
    {
        tracing::warn!(
            "High-severity {} mismatch for {:?}: {} distinct values",
            finding.field,
            patients,
            finding.values.len()
        );
    }

    tracing::info!(
        "Audited {} records for {:?}: {} inconsistencies, escape rate {}",
        req.records.len(),
        patients,
        result.near_miss_detected,
        result.escape_rate
    );

    Ok(Json(result))
}
