#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A testimonial document with image references already resolved to URLs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TestimonialRecord {
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub testimonial: Option<String>,
    /// 1-5 stars.
    pub rating: Option<f32>,
    pub avatar_url: Option<String>,
    pub company_logo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<i64>,
}

impl TestimonialRecord {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}
