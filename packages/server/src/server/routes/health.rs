use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AxumAppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub intents: usize,
    pub examples: usize,
    pub services: usize,
    pub hospitals: usize,
}

/// Health check endpoint
///
/// Datasets are loaded before the server binds, so a running process is
/// always healthy. The counts show what was loaded.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let deps = &state.server_deps;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            intents: deps.responses.len(),
            examples: deps.classifier.index().len(),
            services: deps.matcher.len(),
            hospitals: deps.hospitals.len(),
        }),
    )
}
