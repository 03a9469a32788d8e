//! Testimonial carousel
//!
//! Split into a pure index state machine
//! ([`rotation`]), the background timer that drives autoplay ([`autoplay`]),
//! the host-facing wrapper that ties items, state and timer together
//! ([`session`]), and the deterministic per-slide tilt ([`tilt`]).

pub mod autoplay;
pub mod rotation;
pub mod session;
pub mod tilt;

pub use autoplay::{
    AutoplaySettings, AutoplayTick, AutoplayTimer, DEFAULT_AUTOPLAY_INTERVAL,
    TICK_BUFFER,
};
pub use rotation::{RotationController, RotationState};
pub use session::{Carousel, CarouselItem, Slide};
pub use tilt::{item_tilt, stable_rotate};
