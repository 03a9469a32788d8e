#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SkillRecord {
    pub name: Option<String>,
    /// Kebab-case category slug, e.g. `frontend` or `dev-ops`.
    pub category: Option<String>,
    pub proficiency: Option<String>,
    /// 0-100.
    pub percentage: Option<f32>,
    pub years_of_experience: Option<f32>,
    /// CSS color used for the chart bar.
    pub color: Option<String>,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn with_percentage(mut self, percentage: f32) -> Self {
        self.percentage = Some(percentage);
        self
    }
}
