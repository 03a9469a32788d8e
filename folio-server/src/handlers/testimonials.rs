use axum::{Json, extract::State};
use folio_core::carousel::{AutoplaySettings, Carousel, Slide};
use folio_core::{Testimonial, normalize_testimonials};
use serde::Serialize;

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplayView {
    /// True only when autoplay is configured and there is something to
    /// rotate.
    pub enabled: bool,
    pub interval_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsResponse {
    pub items: Vec<Testimonial>,
    /// Initial stacking with the first testimonial active.
    pub slides: Vec<Slide>,
    pub active_index: usize,
    pub autoplay: AutoplayView,
}

/// Featured testimonials shaped for the carousel
pub async fn get_testimonials_handler(
    State(state): State<AppState>,
) -> AppResult<Json<TestimonialsResponse>> {
    let records = state.cms.featured_testimonials().await?;
    let items = normalize_testimonials(&records);

    let settings = state.autoplay();
    let autoplay = AutoplayView {
        enabled: settings.enabled && items.len() > 1,
        interval_ms: u64::try_from(settings.interval.as_millis())
            .unwrap_or(u64::MAX),
    };

    // The rotation itself runs in the browser; only the initial frame is
    // computed here, so no timer is armed.
    let carousel = Carousel::new(items, AutoplaySettings::disabled());
    let slides = carousel.slides();
    let active_index = carousel.active_index();

    Ok(Json(TestimonialsResponse {
        items: carousel.items().to_vec(),
        slides,
        active_index,
        autoplay,
    }))
}
