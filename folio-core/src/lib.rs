//! Presentation core for the folio portfolio site.
//!
//! The crate turns CMS documents into the view models the site renders:
//!
//! - [`layout`]: the floating dock, split into an inline bar and a "more"
//!   panel by the overflow partitioner.
//! - [`carousel`]: the testimonial rotation state machine, its scoped
//!   autoplay timer, and the deterministic tilt helper.
//! - [`testimonials`], [`skills`]: shaping of the corresponding sections.
//! - [`contact`]: contact form validation and submission.
//! - [`cms`]: the injected content client and its Sanity implementation.

pub mod carousel;
pub mod cms;
pub mod contact;
pub mod error;
pub mod icons;
pub mod layout;
pub mod skills;
pub mod testimonials;

pub use carousel::{
    AutoplaySettings, Carousel, CarouselItem, RotationController,
    RotationState, stable_rotate,
};
pub use cms::{CmsClient, SanityClient, SanityOptions, SharedCmsClient};
pub use contact::{ContactReceipt, submit_contact, validate_contact};
pub use error::{CmsError, ContactError};
pub use icons::IconKey;
pub use layout::{
    DockAction, DockContext, DockLayout, DockLink, DockThresholds, Partition,
    build_dock, partition,
};
pub use skills::{SkillBar, SkillGroup, group_skills};
pub use testimonials::{Testimonial, normalize_testimonials};
