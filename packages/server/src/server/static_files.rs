use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Chat page compiled into the binary
#[derive(RustEmbed)]
#[folder = "static"]
pub struct ChatAssets;

/// Serve the chat page
pub async fn serve_chat_page() -> Response {
    serve_asset::<ChatAssets>("index.html")
}

fn serve_asset<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
