use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = asset_path(uri.path());

        match Asset::get(path) {
            Some(content) => asset_response(path, content.data.into_owned()),
            None => {
                // SPA Fallback: serve index.html for unknown paths (handled by client-side router)
                match Asset::get("index.html") {
                    Some(content) => asset_response("index.html", content.data.into_owned()),
                    None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
                }
            }
        }
    }
}

/// Map a request path onto an embedded asset name
fn asset_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

fn asset_response(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    ([(header::CONTENT_TYPE, mime.as_ref().to_string())], data).into_response()
}
