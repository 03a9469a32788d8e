//! Sanity HTTP client.
//!
//! Reads go through the query endpoint (optionally the CDN); writes go through
//! the mutation endpoint on the live API and require a token.

use std::time::Duration;

use async_trait::async_trait;
pub use folio_model::dataset::{DEFAULT_API_VERSION, DEFAULT_DATASET};
use folio_model::{
    ContactDocument, NavigationEntry, SkillRecord, TestimonialRecord,
};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{CmsClient, queries};
use crate::error::{CmsError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for one Sanity project.
#[derive(Clone, PartialEq, Eq)]
pub struct SanityOptions {
    pub project_id: String,
    pub dataset: String,
    /// Dated API version, e.g. `2024-01-01`.
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
    /// Overrides the `https://{project}.api.sanity.io` host, mainly for tests.
    pub api_host: Option<String>,
}

impl SanityOptions {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: true,
            api_host: None,
        }
    }
}

impl std::fmt::Debug for SanityOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityOptions")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_version", &self.api_version)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("use_cdn", &self.use_cdn)
            .field("api_host", &self.api_host)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
struct MutationResult {
    id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SanityClient {
    http: Client,
    options: SanityOptions,
}

impl SanityClient {
    pub fn new(options: SanityOptions) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, options })
    }

    pub fn options(&self) -> &SanityOptions {
        &self.options
    }

    fn base_url(&self, cdn: bool) -> Result<Url> {
        let raw = match &self.options.api_host {
            Some(host) => host.clone(),
            None => {
                let domain = if cdn { "apicdn" } else { "api" };
                format!("https://{}.{domain}.sanity.io", self.options.project_id)
            }
        };
        Ok(Url::parse(&raw)?)
    }

    /// `GET /v{version}/data/query/{dataset}?query=...`
    pub fn query_url(&self, groq: &str) -> Result<Url> {
        // Authenticated reads bypass the CDN so drafts and private documents
        // are not served from a shared cache.
        let cdn = self.options.use_cdn && self.options.token.is_none();
        let mut url = self.base_url(cdn)?.join(&format!(
            "v{}/data/query/{}",
            self.options.api_version, self.options.dataset
        ))?;
        url.query_pairs_mut().append_pair("query", groq);
        Ok(url)
    }

    /// `POST /v{version}/data/mutate/{dataset}?returnIds=true`
    pub fn mutate_url(&self) -> Result<Url> {
        let mut url = self.base_url(false)?.join(&format!(
            "v{}/data/mutate/{}",
            self.options.api_version, self.options.dataset
        ))?;
        url.query_pairs_mut().append_pair("returnIds", "true");
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.options.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn query<T>(&self, groq: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.query_url(groq)?;
        let response = self.authorize(self.http.get(url)).send().await?;
        let body = read_success(response).await?;
        let parsed: QueryResponse<Vec<T>> = serde_json::from_str(&body)?;
        Ok(parsed.result.unwrap_or_default())
    }
}

async fn read_success(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!(status = status.as_u16(), "CMS request rejected");
        return Err(CmsError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(body)
}

/// Pull the human readable part out of a Sanity error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/description")
                .or_else(|| value.pointer("/message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Body of a single-document create transaction.
pub fn create_mutation(document: &ContactDocument) -> Result<serde_json::Value> {
    Ok(json!({
        "mutations": [{ "create": serde_json::to_value(document)? }]
    }))
}

#[async_trait]
impl CmsClient for SanityClient {
    #[instrument(skip(self), level = "debug")]
    async fn navigation(&self) -> Result<Vec<NavigationEntry>> {
        self.query(queries::NAVIGATION).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn featured_testimonials(&self) -> Result<Vec<TestimonialRecord>> {
        self.query(queries::FEATURED_TESTIMONIALS).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn skills(&self) -> Result<Vec<SkillRecord>> {
        self.query(queries::SKILLS).await
    }

    #[instrument(skip(self, document), level = "debug")]
    async fn create_contact(&self, document: &ContactDocument) -> Result<String> {
        if self.options.token.is_none() {
            return Err(CmsError::MissingToken);
        }
        let body = create_mutation(document)?;
        let response = self
            .authorize(self.http.post(self.mutate_url()?))
            .json(&body)
            .send()
            .await?;
        let text = read_success(response).await?;
        let parsed: MutationResponse = serde_json::from_str(&text)?;
        let id = parsed
            .results
            .into_iter()
            .find_map(|r| r.id)
            .ok_or(CmsError::MissingDocumentId(ContactDocument::DOC_TYPE))?;
        debug!(%id, "contact document created");
        Ok(id)
    }
}
