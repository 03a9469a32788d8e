use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{parse_bool, parse_csv};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub cms: FileCmsConfig,
    #[serde(default)]
    pub dock: FileDockConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCmsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cdn: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDockConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible_compact: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible_expanded: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    /// Humantime string, e.g. `"5s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: Option<String>,
    pub sanity_api_version: Option<String>,
    pub sanity_api_token: Option<String>,
    pub sanity_use_cdn: Option<bool>,
    pub dock_max_visible_compact: Option<usize>,
    pub dock_max_visible_expanded: Option<usize>,
    pub carousel_autoplay: Option<bool>,
    pub carousel_interval: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl EnvConfig {
    /// Read the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let number = |name: &str| var(name).and_then(|s| s.trim().parse().ok());

        Self {
            config_path: var("FOLIO_CONFIG").map(PathBuf::from),
            server_host: var("SERVER_HOST"),
            server_port: var("SERVER_PORT").and_then(|s| s.trim().parse().ok()),
            sanity_project_id: var("SANITY_PROJECT_ID"),
            sanity_dataset: var("SANITY_DATASET"),
            sanity_api_version: var("SANITY_API_VERSION"),
            sanity_api_token: var("SANITY_API_TOKEN"),
            sanity_use_cdn: var("SANITY_USE_CDN").and_then(|s| parse_bool(&s)),
            dock_max_visible_compact: number("DOCK_MAX_VISIBLE_COMPACT"),
            dock_max_visible_expanded: number("DOCK_MAX_VISIBLE_EXPANDED"),
            carousel_autoplay: var("CAROUSEL_AUTOPLAY")
                .and_then(|s| parse_bool(&s)),
            carousel_interval: var("CAROUSEL_INTERVAL"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| parse_csv(&s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_parses_typed_values() {
        let vars: HashMap<&str, &str> = [
            ("SERVER_PORT", "8080"),
            ("SANITY_USE_CDN", "false"),
            ("DOCK_MAX_VISIBLE_COMPACT", "4"),
            ("CORS_ALLOWED_ORIGINS", "https://a.dev,https://b.dev"),
            ("SANITY_DATASET", "   "),
        ]
        .into_iter()
        .collect();
        let env = EnvConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(env.server_port, Some(8080));
        assert_eq!(env.sanity_use_cdn, Some(false));
        assert_eq!(env.dock_max_visible_compact, Some(4));
        assert_eq!(env.cors_allowed_origins.map(|o| o.len()), Some(2));
        assert!(env.sanity_dataset.is_none());
    }

    #[test]
    fn unparsable_numbers_are_ignored() {
        let env = EnvConfig::from_lookup(|k| {
            (k == "SERVER_PORT").then(|| "eighty".to_string())
        });
        assert!(env.server_port.is_none());
    }
}
