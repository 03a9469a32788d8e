use folio_model::NavigationEntry;
use serde::Serialize;
use tracing::debug;

use super::overflow::{Partition, partition};
use crate::icons::IconKey;

pub const DEFAULT_TITLE: &str = "";
pub const DEFAULT_HREF: &str = "#";
pub const DEFAULT_ICON: &str = "IconHome";
pub const SIGN_OUT_TITLE: &str = "Sign Out";

/// Inline bar capacity on wide screens.
pub const MAX_VISIBLE_COMPACT: usize = 6;
/// Menu capacity on narrow screens.
pub const MAX_VISIBLE_EXPANDED: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockAction {
    Navigate { href: String, external: bool },
    SignOut,
}

/// One rendered dock entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockLink {
    pub key: String,
    pub title: String,
    pub icon: IconKey,
    pub action: DockAction,
}

impl DockLink {
    pub fn navigate(
        title: impl Into<String>,
        href: impl Into<String>,
        icon: IconKey,
        external: bool,
    ) -> Self {
        let title = title.into();
        let href = href.into();
        Self {
            key: format!("{title}-{href}"),
            title,
            icon,
            action: DockAction::Navigate { href, external },
        }
    }

    pub fn sign_out() -> Self {
        Self {
            key: format!("{SIGN_OUT_TITLE}-"),
            title: SIGN_OUT_TITLE.to_string(),
            icon: IconKey::Logout,
            action: DockAction::SignOut,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match &self.action {
            DockAction::Navigate { href, .. } => Some(href),
            DockAction::SignOut => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.action, DockAction::Navigate { external: true, .. })
    }
}

impl From<&NavigationEntry> for DockLink {
    fn from(entry: &NavigationEntry) -> Self {
        // Empty strings fall back the same way as missing values.
        let icon_name = entry
            .icon
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_ICON);
        let title = entry
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let href = entry
            .href
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HREF);
        DockLink::navigate(
            title,
            href,
            IconKey::resolve(icon_name),
            entry.is_external.unwrap_or(false),
        )
    }
}

/// Visitor state that decides whether the sign-out affordance is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DockContext {
    pub signed_in: bool,
    /// The sidebar carries its own sign-out control while open.
    pub sidebar_open: bool,
}

impl DockContext {
    pub fn shows_sign_out(&self) -> bool {
        self.signed_in && !self.sidebar_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockThresholds {
    pub compact: usize,
    pub expanded: usize,
}

impl Default for DockThresholds {
    fn default() -> Self {
        Self {
            compact: MAX_VISIBLE_COMPACT,
            expanded: MAX_VISIBLE_EXPANDED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DockLayout {
    /// Inline bar plus its "More" panel.
    pub compact: Partition<DockLink>,
    /// Narrow-screen menu plus its sideways "More" panel.
    pub expanded: Partition<DockLink>,
}

/// Convert navigation entries into dock links, appending the sign-out link
/// when the context calls for it.
pub fn dock_links(
    entries: &[NavigationEntry],
    context: DockContext,
) -> Vec<DockLink> {
    let mut links: Vec<DockLink> = entries.iter().map(DockLink::from).collect();
    if context.shows_sign_out() {
        links.push(DockLink::sign_out());
    }
    links
}

/// Build both dock layouts. Returns `None` when there is no navigation to
/// show, in which case the dock is not rendered at all.
pub fn build_dock(
    entries: &[NavigationEntry],
    context: DockContext,
    thresholds: DockThresholds,
) -> Option<DockLayout> {
    if entries.is_empty() {
        return None;
    }

    let links = dock_links(entries, context);
    let layout = DockLayout {
        compact: partition(&links, thresholds.compact),
        expanded: partition(&links, thresholds.expanded),
    };
    debug!(
        links = links.len(),
        compact_hidden = layout.compact.hidden.len(),
        expanded_hidden = layout.expanded.hidden.len(),
        "built dock layout"
    );
    Some(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(n: usize) -> Vec<NavigationEntry> {
        (0..n)
            .map(|i| {
                NavigationEntry::new(format!("Item {i}"), format!("#s{i}"))
                    .with_icon("IconCode")
            })
            .collect()
    }

    #[test]
    fn missing_fields_take_defaults() {
        let link = DockLink::from(&NavigationEntry::default());

        assert_eq!(link.title, "");
        assert_eq!(link.href(), Some("#"));
        assert_eq!(link.icon, IconKey::Home);
        assert!(!link.is_external());
        assert_eq!(link.key, "-#");
    }

    #[test]
    fn unknown_icon_resolves_to_fallback() {
        let entry = NavigationEntry::new("Blog", "#blog").with_icon("IconNope");
        assert_eq!(DockLink::from(&entry).icon, IconKey::QuestionMark);
    }

    #[test]
    fn external_flag_is_carried() {
        let entry = NavigationEntry::new("GitHub", "https://github.com/x")
            .with_icon("IconBrandGithub")
            .external();
        let link = DockLink::from(&entry);

        assert!(link.is_external());
        assert_eq!(link.key, "GitHub-https://github.com/x");
    }

    #[test]
    fn sign_out_only_when_signed_in_and_sidebar_closed() {
        let entries = nav(2);
        let cases = [
            (false, false, 2),
            (false, true, 2),
            (true, true, 2),
            (true, false, 3),
        ];
        for (signed_in, sidebar_open, expected) in cases {
            let links = dock_links(
                &entries,
                DockContext {
                    signed_in,
                    sidebar_open,
                },
            );
            assert_eq!(links.len(), expected);
        }

        let links = dock_links(
            &entries,
            DockContext {
                signed_in: true,
                sidebar_open: false,
            },
        );
        let last = links.last().unwrap();
        assert_eq!(last.action, DockAction::SignOut);
        assert_eq!(last.href(), None);
    }

    #[test]
    fn nine_links_split_for_both_layouts() {
        let layout = build_dock(
            &nav(9),
            DockContext::default(),
            DockThresholds::default(),
        )
        .unwrap();

        assert_eq!(layout.compact.visible.len(), 6);
        assert_eq!(layout.compact.hidden.len(), 3);
        assert_eq!(layout.compact.hidden[0].title, "Item 6");
        assert!(layout.compact.overflowed);
        assert_eq!(layout.expanded.visible.len(), 8);
        assert_eq!(layout.expanded.hidden.len(), 1);
    }

    #[test]
    fn sign_out_can_push_a_layout_into_overflow() {
        let entries = nav(6);
        let signed_in = DockContext {
            signed_in: true,
            sidebar_open: false,
        };

        let plain =
            build_dock(&entries, DockContext::default(), Default::default())
                .unwrap();
        assert!(!plain.compact.overflowed);

        let layout =
            build_dock(&entries, signed_in, Default::default()).unwrap();
        assert!(layout.compact.overflowed);
        assert_eq!(layout.compact.hidden, vec![DockLink::sign_out()]);
        assert!(!layout.expanded.overflowed);
    }

    #[test]
    fn empty_navigation_renders_no_dock() {
        let signed_in = DockContext {
            signed_in: true,
            sidebar_open: false,
        };
        assert!(build_dock(&[], signed_in, Default::default()).is_none());
    }

    #[test]
    fn serializes_actions_with_kind_tag() {
        let json = serde_json::to_value(DockLink::sign_out()).unwrap();
        assert_eq!(json["action"]["kind"], "sign_out");
        assert_eq!(json["icon"], "IconLogout");
    }
}
