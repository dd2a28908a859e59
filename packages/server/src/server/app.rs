//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::dispatch::Dispatcher;
use crate::kernel::ServerDeps;
use crate::server::routes::{chat_handler, health_handler};
use crate::server::static_files::serve_chat_page;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
    pub dispatcher: Arc<Dispatcher>,
}

impl AxumAppState {
    pub fn new(server_deps: ServerDeps) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(&server_deps));
        Self {
            server_deps: Arc::new(server_deps),
            dispatcher,
        }
    }
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps) -> Router {
    let app_state = AxumAppState::new(server_deps);

    // CORS configuration - allow any origin, the chat page may be hosted elsewhere
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(serve_chat_page))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
