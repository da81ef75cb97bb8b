use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Which profile store is serving requests.
    pub store: &'static str,
}

/// GET /api/health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match state.store.health_check().await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            "degraded"
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
        store: state.store.backend(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
