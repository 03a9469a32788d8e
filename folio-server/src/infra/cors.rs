use axum::http::{HeaderValue, Method, header};
use folio_config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Allow-list CORS for the configured site origins. A `*` entry opens the API
/// to any origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring CORS origin that is not a valid header value");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
