use std::{fmt, sync::Arc};

use folio_config::Config;
use folio_core::{DockThresholds, SharedCmsClient, carousel::AutoplaySettings};

/// Shared handler state. The CMS client is built once at startup and injected
/// here; handlers never construct their own.
#[derive(Clone)]
pub struct AppState {
    pub cms: SharedCmsClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(cms: SharedCmsClient, config: Config) -> Self {
        Self {
            cms,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dock_thresholds(&self) -> DockThresholds {
        DockThresholds {
            compact: self.config.dock.max_visible_compact,
            expanded: self.config.dock.max_visible_expanded,
        }
    }

    pub fn autoplay(&self) -> AutoplaySettings {
        let carousel = &self.config.carousel;
        if carousel.autoplay {
            AutoplaySettings::enabled(carousel.interval)
        } else {
            AutoplaySettings {
                enabled: false,
                interval: carousel.interval,
            }
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
