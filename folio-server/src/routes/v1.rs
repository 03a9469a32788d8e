use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    handlers::{
        contact::submit_contact_handler, dock::get_dock_handler,
        skills::get_skills_handler, testimonials::get_testimonials_handler,
    },
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/dock", get(get_dock_handler))
        .route("/testimonials", get(get_testimonials_handler))
        .route("/skills", get(get_skills_handler))
        .route("/contact", post(submit_contact_handler))
}
