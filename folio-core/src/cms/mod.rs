//! Content backend seam.
//!
//! Handlers never reach for a global client; a [`CmsClient`] is built once at
//! startup and passed in explicitly.

pub mod memory;
pub mod queries;
pub mod sanity;

use std::sync::Arc;

use async_trait::async_trait;
use folio_model::{
    ContactDocument, NavigationEntry, SkillRecord, TestimonialRecord,
};

use crate::error::Result;

pub use memory::InMemoryCms;
pub use sanity::{SanityClient, SanityOptions};

pub type SharedCmsClient = Arc<dyn CmsClient + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CmsClient {
    /// Navigation entries, ordered by their display order.
    async fn navigation(&self) -> Result<Vec<NavigationEntry>>;

    /// Featured testimonials, ordered by their display order.
    async fn featured_testimonials(&self) -> Result<Vec<TestimonialRecord>>;

    /// Skills, ordered by category then display order.
    async fn skills(&self) -> Result<Vec<SkillRecord>>;

    /// Store a contact submission and return the new document id.
    async fn create_contact(&self, document: &ContactDocument) -> Result<String>;
}
