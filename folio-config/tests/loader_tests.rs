use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use folio_config::sources::EnvConfig;
use folio_config::{ConfigGuardRailError, ConfigLoadError, ConfigLoader};
use tempfile::NamedTempFile;

fn env(vars: &[(&str, &str)]) -> EnvConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::from_lookup(|name| vars.get(name).cloned())
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_apply_when_only_project_is_set() {
    let load = ConfigLoader::new()
        .load_from_env(env(&[("SANITY_PROJECT_ID", "abc123")]))
        .expect("config loads");
    let config = load.config;

    assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.cms.dataset, folio_model::DEFAULT_DATASET);
    assert_eq!(config.cms.api_version, folio_model::DEFAULT_API_VERSION);
    assert!(config.cms.use_cdn);
    assert_eq!(config.dock.max_visible_compact, 6);
    assert_eq!(config.dock.max_visible_expanded, 8);
    assert!(config.carousel.autoplay);
    assert_eq!(config.carousel.interval, Duration::from_millis(5000));
    assert!(config.metadata.config_path.is_none());

    let messages: Vec<_> =
        load.warnings.iter().map(|w| w.message.as_str()).collect();
    assert!(messages.iter().any(|m| m.contains("No folio.toml")));
    assert!(messages.iter().any(|m| m.contains("SANITY_API_TOKEN")));
}

#[test]
fn file_values_are_read() {
    let file = config_file(
        r#"
[server]
host = "127.0.0.1"
port = 8088

[cms]
project_id = "fromfile"
dataset = "staging"
use_cdn = false
token = "sk-file"

[dock]
max_visible_compact = 4

[carousel]
autoplay = false
interval = "7s"

[cors]
allowed_origins = ["https://folio.dev"]
"#,
    );

    let load = ConfigLoader::new()
        .with_config_path(file.path())
        .load_from_env(env(&[]))
        .expect("config loads");
    let config = load.config;

    assert_eq!(config.server.bind_address(), "127.0.0.1:8088");
    assert_eq!(config.cms.project_id, "fromfile");
    assert_eq!(config.cms.dataset, "staging");
    assert!(!config.cms.use_cdn);
    assert!(config.cms.has_token());
    assert_eq!(config.dock.max_visible_compact, 4);
    assert_eq!(config.dock.max_visible_expanded, 8);
    assert!(!config.carousel.autoplay);
    assert_eq!(config.carousel.interval, Duration::from_secs(7));
    assert_eq!(config.cors.allowed_origins, ["https://folio.dev"]);
    assert_eq!(config.metadata.config_path.as_deref(), Some(file.path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_overrides_file() {
    let file = config_file(
        r#"
[server]
port = 8088

[cms]
project_id = "fromfile"

[carousel]
interval = "7s"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load_from_env(env(&[
            ("SERVER_PORT", "9000"),
            ("SANITY_PROJECT_ID", "fromenv"),
            ("CAROUSEL_INTERVAL", "250ms"),
        ]))
        .expect("config loads")
        .config;

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.cms.project_id, "fromenv");
    assert_eq!(config.carousel.interval, Duration::from_millis(250));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_from_env(env(&[("SANITY_PROJECT_ID", "abc123")]))
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { path: p } if p == path));
}

#[test]
fn config_path_from_environment_must_exist() {
    let err = ConfigLoader::new()
        .load_from_env(env(&[
            ("FOLIO_CONFIG", "/definitely/not/here/folio.toml"),
            ("SANITY_PROJECT_ID", "abc123"),
        ]))
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn parse_errors_carry_the_path() {
    let file = config_file("[server\nport = ");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load_from_env(env(&[]))
        .unwrap_err();

    match err {
        ConfigLoadError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_interval_is_rejected() {
    let err = ConfigLoader::new()
        .load_from_env(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("CAROUSEL_INTERVAL", "whenever"),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::InvalidDuration { field: "carousel.interval", .. }
    ));
}

#[test]
fn zero_interval_trips_guard_rail() {
    let err = ConfigLoader::new()
        .load_from_env(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("CAROUSEL_INTERVAL", "0s"),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::ZeroCarouselInterval)
    ));
}

#[test]
fn project_id_is_required() {
    let err = ConfigLoader::new().load_from_env(env(&[])).unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::MissingProjectId)
    ));
}

#[test]
fn malformed_cors_origin_is_rejected() {
    let err = ConfigLoader::new()
        .load_from_env(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("CORS_ALLOWED_ORIGINS", "folio.dev"),
        ]))
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::InvalidCorsOrigin { .. })
    ));
}

#[test]
fn token_debug_output_is_redacted() {
    let config = ConfigLoader::new()
        .load_from_env(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_API_TOKEN", "sk-very-secret"),
        ]))
        .expect("config loads")
        .config;

    let rendered = format!("{:?}", config.cms);
    assert!(!rendered.contains("sk-very-secret"));
}
