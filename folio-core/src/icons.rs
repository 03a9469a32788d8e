//! Closed registry of the icons the site knows how to render.
//!
//! The CMS stores icons as Tabler component names. Rather than resolving
//! arbitrary names at render time, each known name maps to an [`IconKey`]
//! and anything else falls back to [`IconKey::QuestionMark`].

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Home,
    User,
    Briefcase,
    Code,
    Tools,
    School,
    Certificate,
    Trophy,
    Message,
    Mail,
    Book,
    Article,
    Star,
    BrandGithub,
    BrandLinkedin,
    BrandX,
    Logout,
    Menu,
    Close,
    ArrowLeft,
    ArrowRight,
    QuestionMark,
}

impl IconKey {
    /// Every registered icon, in registry order.
    pub const ALL: &'static [IconKey] = &[
        IconKey::Home,
        IconKey::User,
        IconKey::Briefcase,
        IconKey::Code,
        IconKey::Tools,
        IconKey::School,
        IconKey::Certificate,
        IconKey::Trophy,
        IconKey::Message,
        IconKey::Mail,
        IconKey::Book,
        IconKey::Article,
        IconKey::Star,
        IconKey::BrandGithub,
        IconKey::BrandLinkedin,
        IconKey::BrandX,
        IconKey::Logout,
        IconKey::Menu,
        IconKey::Close,
        IconKey::ArrowLeft,
        IconKey::ArrowRight,
        IconKey::QuestionMark,
    ];

    /// Icon used for unknown names.
    pub const FALLBACK: IconKey = IconKey::QuestionMark;

    /// Tabler component name, as stored in the CMS.
    pub const fn name(self) -> &'static str {
        match self {
            IconKey::Home => "IconHome",
            IconKey::User => "IconUser",
            IconKey::Briefcase => "IconBriefcase",
            IconKey::Code => "IconCode",
            IconKey::Tools => "IconTools",
            IconKey::School => "IconSchool",
            IconKey::Certificate => "IconCertificate",
            IconKey::Trophy => "IconTrophy",
            IconKey::Message => "IconMessage",
            IconKey::Mail => "IconMail",
            IconKey::Book => "IconBook",
            IconKey::Article => "IconArticle",
            IconKey::Star => "IconStar",
            IconKey::BrandGithub => "IconBrandGithub",
            IconKey::BrandLinkedin => "IconBrandLinkedin",
            IconKey::BrandX => "IconBrandX",
            IconKey::Logout => "IconLogout",
            IconKey::Menu => "IconMenu2",
            IconKey::Close => "IconX",
            IconKey::ArrowLeft => "IconArrowLeft",
            IconKey::ArrowRight => "IconArrowRight",
            IconKey::QuestionMark => "IconQuestionMark",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(name: &str) -> Option<IconKey> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// Lookup with the registry fallback applied.
    pub fn resolve(name: &str) -> IconKey {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::debug!(icon = name, "unknown icon name, using fallback");
            Self::FALLBACK
        })
    }

    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for IconKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
