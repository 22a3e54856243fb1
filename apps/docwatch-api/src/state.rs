//! Application state for the DocWatch API

use consistency_engine::ConsistencyAuditor;

use crate::models::ServiceInfo;

/// Shared, read-only state; audits carry no data between requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub auditor: ConsistencyAuditor,
    pub service: ServiceInfo,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auditor: ConsistencyAuditor::new(),
            service: ServiceInfo::current(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
