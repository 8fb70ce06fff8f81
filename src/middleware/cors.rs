use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Browser clients may call the API from any origin; only the verbs and
/// headers the routes understand are advertised.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(Any)
}
