//! Request and response models for the DocWatch API

use docwatch_types::DocumentRecord;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body of `POST /audit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub records: Vec<DocumentRecord>,
    pub qa_time_manual_minutes: f64,
}

impl AuditRequest {
    /// Shape checks the auditor itself does not perform
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.qa_time_manual_minutes.is_finite() {
            return Err(ApiError::InvalidRequest(
                "qa_time_manual_minutes must be a finite number".to_string(),
            ));
        }
        if self.qa_time_manual_minutes < 0.0 {
            return Err(ApiError::InvalidRequest(format!(
                "qa_time_manual_minutes must be >= 0 (got {})",
                self.qa_time_manual_minutes
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Process-wide service identity
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: "RT-DocWatch API",
            version: env!("CARGO_PKG_VERSION"),
            description: "Radiotherapy document consistency audit to catch laterality, dose and fraction errors",
        }
    }
}
