use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use folio_config::{Config, ConfigLoader, sources::EnvConfig};
use folio_core::cms::InMemoryCms;
use folio_server::{AppState, create_app};
use serde_json::Value;

// Shared across test binaries; not every helper is used by each.
#[allow(unused)]
#[derive(Debug)]
pub struct TestApp {
    pub router: Router,
    pub cms: Arc<InMemoryCms>,
}

#[allow(unused)]
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let mut all = vec![("SANITY_PROJECT_ID", "test-project")];
    all.extend_from_slice(vars);
    let env = EnvConfig::from_lookup(|name| {
        all.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    });
    ConfigLoader::new()
        .load_from_env(env)
        .expect("test configuration is valid")
        .config
}

#[allow(unused)]
pub fn build_test_app(cms: InMemoryCms) -> TestApp {
    build_test_app_with_config(cms, test_config(&[]))
}

#[allow(unused)]
pub fn build_test_app_with_config(cms: InMemoryCms, config: Config) -> TestApp {
    let cms = Arc::new(cms);
    let state = AppState::new(cms.clone(), config);
    TestApp {
        router: create_app(state),
        cms,
    }
}

#[allow(unused)]
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json")
}

#[allow(unused)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[allow(unused)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}
