use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub use folio_model::dataset::{DEFAULT_API_VERSION, DEFAULT_DATASET};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_VISIBLE_COMPACT: usize = 6;
pub const DEFAULT_MAX_VISIBLE_EXPANDED: usize = 8;
pub const DEFAULT_CAROUSEL_INTERVAL: Duration = Duration::from_millis(5000);

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cms: CmsConfig,
    pub dock: DockConfig,
    pub carousel: CarouselConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for a socket bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Write token; required for contact submissions only.
    pub token: Option<String>,
    pub use_cdn: bool,
}

impl CmsConfig {
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmsConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("use_cdn", &self.use_cdn)
            .finish()
    }
}

/// Overflow thresholds for the navigation dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockConfig {
    pub max_visible_compact: usize,
    pub max_visible_expanded: usize,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            max_visible_compact: DEFAULT_MAX_VISIBLE_COMPACT,
            max_visible_expanded: DEFAULT_MAX_VISIBLE_EXPANDED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval: DEFAULT_CAROUSEL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
