#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A navigation document as authored in the studio.
///
/// The studio requires title, href and icon, but drafts and partially
/// migrated datasets can still return nulls, so all of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct NavigationEntry {
    pub title: Option<String>,
    pub href: Option<String>,
    /// Tabler icon name, e.g. `IconHome` or `IconBrandGithub`.
    pub icon: Option<String>,
    pub is_external: Option<bool>,
    /// Display order; lower numbers come first.
    pub order: Option<i64>,
}

impl NavigationEntry {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn external(mut self) -> Self {
        self.is_external = Some(true);
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_studio_payload_with_nulls() {
        let raw = r#"{"title":"GitHub","href":null,"icon":"IconBrandGithub","isExternal":true}"#;
        let entry: NavigationEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(entry.title.as_deref(), Some("GitHub"));
        assert_eq!(entry.href, None);
        assert_eq!(entry.is_external, Some(true));
        assert_eq!(entry.order, None);
    }
}
