//! # Folio Server
//!
//! HTTP surface of the portfolio site. Content comes from the CMS through an
//! injected [`folio_core::CmsClient`]; the handlers only shape it:
//!
//! - `GET  /health`
//! - `GET  /api/v1/dock?signed_in=&sidebar_open=`
//! - `GET  /api/v1/testimonials`
//! - `GET  /api/v1/skills`
//! - `POST /api/v1/contact`
#![allow(missing_docs)]

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers::health::health_handler, infra::cors::cors_layer};

/// Build the full application router.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors);

    Router::new()
        .route("/health", get(health_handler))
        .merge(routes::create_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
