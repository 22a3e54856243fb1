//! DocWatch API - radiotherapy document consistency audits over HTTP
//!
//! Provides REST endpoints for:
//! - Auditing a patient's document set (`POST /audit`)
//! - Health check (`GET /health`)
//! - Service info (`GET /`)

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use config::Config;
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The browser front-end calls the API from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        .route("/audit", post(handlers::audit_documents))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}
