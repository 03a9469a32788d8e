use thiserror::Error;

use crate::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("SANITY_PROJECT_ID is required")]
    MissingProjectId,
    #[error("carousel interval must be greater than zero")]
    ZeroCarouselInterval,
    #[error("CORS origin '{origin}' is not an http(s) origin")]
    InvalidCorsOrigin { origin: String },
}

/// Reject configurations the server cannot run with and collect warnings for
/// the ones it can run with in a degraded way.
pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.cms.project_id.trim().is_empty() {
        return Err(ConfigGuardRailError::MissingProjectId);
    }

    if config.carousel.interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroCarouselInterval);
    }

    for origin in &config.cors.allowed_origins {
        if origin != "*"
            && !(origin.starts_with("http://") || origin.starts_with("https://"))
        {
            return Err(ConfigGuardRailError::InvalidCorsOrigin {
                origin: origin.clone(),
            });
        }
    }

    if config.cors.is_wildcard_included() {
        warnings.push_with_hint(
            "CORS allows any origin",
            "List the site origins in CORS_ALLOWED_ORIGINS",
        );
    }

    if !config.cms.has_token() {
        warnings.push_with_hint(
            "SANITY_API_TOKEN not configured; contact submissions will be rejected",
            "Create a token with write access in the Sanity project settings",
        );
    }

    let dock = &config.dock;
    if dock.max_visible_compact == 0 || dock.max_visible_expanded == 0 {
        warnings.push(
            "A dock threshold is zero; every link will be placed behind \"More\"",
        );
    }

    Ok(warnings)
}
