//! Content model definitions shared across folio crates.
//!
//! These are the shapes the CMS hands back from its queries. Every field the
//! studio marks as optional is an `Option` here; defaults are applied by the
//! presentation layer in `folio-core`, never at deserialization time.
#![allow(missing_docs)]

pub mod contact;
pub mod dataset;
pub mod navigation;
pub mod skill;
pub mod testimonial;

// Intentionally curated re-exports for downstream consumers.
pub use contact::{ContactDocument, ContactForm, ContactStatus};
pub use dataset::{DEFAULT_API_VERSION, DEFAULT_DATASET};
pub use navigation::NavigationEntry;
pub use skill::SkillRecord;
pub use testimonial::TestimonialRecord;
