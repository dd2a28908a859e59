//! Chat endpoint.
//!
//! POST /chat  {"message": "..."}  ->  {"response": "..."}

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::common::ResponderError;
use crate::server::app::AxumAppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing or null is treated as an empty message
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Dispatcher failure rendered as an HTTP error
pub struct ChatError(ResponderError);

impl From<ResponderError> for ChatError {
    fn from(err: ResponderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self.0 {
            ResponderError::Generation(e) => {
                error!(error = %e, "Generation unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": "generation unavailable"})),
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal error"})),
                )
                    .into_response()
            }
        }
    }
}

pub async fn chat_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let message = request.message.unwrap_or_default();
    let reply = state.dispatcher.dispatch(&message).await?;

    info!(source = ?reply.source, response_length = reply.text.len(), "Chat reply");

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}
