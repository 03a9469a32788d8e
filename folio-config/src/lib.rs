//! Configuration library for the folio server.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables (optionally seeded from a `.env` file). The loader
//! returns the resolved [`Config`] together with non-fatal [`ConfigWarnings`].
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CarouselConfig, CmsConfig, Config, ConfigMetadata, CorsConfig, DockConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
