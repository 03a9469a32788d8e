use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

use crate::{
    models::{
        CarouselConfig, CmsConfig, Config, ConfigMetadata, CorsConfig,
        DEFAULT_API_VERSION, DEFAULT_DATASET, DockConfig, ServerConfig,
    },
    sources::{EnvConfig, FileConfig},
    util::parse_duration,
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["folio.toml", "config/folio.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, read the process environment and resolve the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.resolve(EnvConfig::gather(), env_file_loaded)
    }

    /// Resolve against an already gathered environment. No `.env` file is
    /// read.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.resolve(env, false)
    }

    fn resolve(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            compose_config(file_config, env, config_path, env_file_loaded)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicitly requested file must exist; default locations are
        // optional.
        let (path, required) = match (&self.options.config_path, &env.config_path)
        {
            (Some(explicit), _) => (explicit.clone(), true),
            (None, Some(from_env)) => (from_env.clone(), true),
            (None, None) => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(found) => (found, false),
                None => return Ok((None, None)),
            },
        };

        if !path.exists() {
            if required {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if file_config.is_none() {
        warnings.push_with_hint(
            "No folio.toml detected; falling back to environment variables",
            "Pass --config or set FOLIO_CONFIG to use a configuration file",
        );
    }

    let FileConfig {
        server: file_server,
        cms: file_cms,
        dock: file_dock,
        carousel: file_carousel,
        cors: file_cors,
    } = file_config.unwrap_or_default();

    let server_defaults = ServerConfig::default();
    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or(server_defaults.host),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(server_defaults.port),
    };

    let cms = CmsConfig {
        project_id: env
            .sanity_project_id
            .or(file_cms.project_id)
            .unwrap_or_default(),
        dataset: env
            .sanity_dataset
            .or(file_cms.dataset)
            .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
        api_version: env
            .sanity_api_version
            .or(file_cms.api_version)
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
        token: env
            .sanity_api_token
            .or(file_cms.token)
            .filter(|token| !token.trim().is_empty()),
        use_cdn: env.sanity_use_cdn.or(file_cms.use_cdn).unwrap_or(true),
    };

    let dock_defaults = DockConfig::default();
    let dock = DockConfig {
        max_visible_compact: env
            .dock_max_visible_compact
            .or(file_dock.max_visible_compact)
            .unwrap_or(dock_defaults.max_visible_compact),
        max_visible_expanded: env
            .dock_max_visible_expanded
            .or(file_dock.max_visible_expanded)
            .unwrap_or(dock_defaults.max_visible_expanded),
    };

    let carousel_defaults = CarouselConfig::default();
    let interval = match env.carousel_interval.or(file_carousel.interval) {
        Some(raw) => parse_duration(&raw).map_err(|source| {
            ConfigLoadError::InvalidDuration {
                field: "carousel.interval",
                value: raw.clone(),
                source,
            }
        })?,
        None => carousel_defaults.interval,
    };
    let carousel = CarouselConfig {
        autoplay: env
            .carousel_autoplay
            .or(file_carousel.autoplay)
            .unwrap_or(carousel_defaults.autoplay),
        interval,
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_else(|| CorsConfig::default().allowed_origins),
    };

    let config = Config {
        server,
        cms,
        dock,
        carousel,
        cors,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    warnings.extend(validation::apply_guard_rails(&config)?);

    Ok((config, warnings))
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid duration '{value}' for {field}")]
    InvalidDuration {
        field: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
