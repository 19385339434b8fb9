use tower_http::cors::{Any, CorsLayer};

/// Allows the UI (or any other origin) to call the API from the browser.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
