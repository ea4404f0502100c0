//! DigiGrub portal REST API client
//!
//! A typed client for the portal backend under `/api/v1`. Covers the
//! indexing status endpoints and the content endpoints (titles, social
//! posts, blog articles) with no UI logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal_client::{GenerateTitlesRequest, PortalClient, SourceType};
//!
//! let client = PortalClient::from_env();
//!
//! // Indexing overview
//! let stats = client.indexing_stats().await?;
//!
//! // Generate five titles from the jobs data
//! let titles = client.generate_titles(GenerateTitlesRequest {
//!     source_type: SourceType::Jobs,
//!     count: Some(5),
//!     sector: Some("Engineering".into()),
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! Read operations (stats, filters, lists) retry once on transient
//! failures; generate and save calls are sent exactly once.

pub mod error;
pub mod types;

pub use error::{PortalError, Result};
pub use types::*;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Retries for read operations. Mutations get none.
const READ_RETRIES: u32 = 1;

/// Portal backend API client.
#[derive(Clone)]
pub struct PortalClient {
    http_client: Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new client against the given base URL (including `/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from the `API_URL` environment variable, falling back to the
    /// local development backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Indexing
    // -------------------------------------------------------------------------

    /// Indexing progress for every source table.
    pub async fn indexing_stats(&self) -> Result<IndexingStatsResponse> {
        let url = format!("{}/indexing/stats", self.base_url);
        self.send(|client| client.get(&url), READ_RETRIES).await
    }

    /// High-level counters for the dashboard cards.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let url = format!("{}/indexing/dashboard", self.base_url);
        self.send(|client| client.get(&url), READ_RETRIES).await
    }

    /// Status of the crawler processes feeding the source tables.
    pub async fn crawler_statuses(&self) -> Result<CrawlerStatusResponse> {
        let url = format!("{}/indexing/crawlers", self.base_url);
        self.send(|client| client.get(&url), READ_RETRIES).await
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    /// Available filter values (sectors, categories, sources).
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let url = format!("{}/content/filters", self.base_url);
        self.send(|client| client.get(&url), READ_RETRIES).await
    }

    /// Generate a batch of titles. Titles are not persisted by this call.
    pub async fn generate_titles(
        &self,
        request: GenerateTitlesRequest,
    ) -> Result<GenerateTitlesResponse> {
        let url = format!("{}/content/generate-titles", self.base_url);
        self.send(|client| client.post(&url).json(&request), 0).await
    }

    /// Persist one generated title.
    pub async fn save_title(&self, request: SaveTitleRequest) -> Result<SaveTitleResponse> {
        let url = format!("{}/content/titles/save", self.base_url);
        self.send(|client| client.post(&url).json(&request), 0).await
    }

    /// List saved titles matching the request filters.
    pub async fn list_titles(&self, request: ListTitlesRequest) -> Result<Vec<Title>> {
        let url = format!("{}/content/titles/list", self.base_url);
        self.send(|client| client.post(&url).json(&request), READ_RETRIES)
            .await
    }

    /// Generate a social media post. The backend persists it before
    /// responding.
    pub async fn generate_social(
        &self,
        request: GenerateSocialRequest,
    ) -> Result<GenerateSocialResponse> {
        let url = format!("{}/content/social/generate", self.base_url);
        self.send(|client| client.post(&url).json(&request), 0).await
    }

    /// List saved social media posts matching the request filters.
    pub async fn list_social(&self, request: ListContentRequest) -> Result<Vec<SocialPost>> {
        let url = format!("{}/content/social/list", self.base_url);
        self.send(|client| client.post(&url).json(&request), READ_RETRIES)
            .await
    }

    /// Generate a blog article. The backend persists it before responding.
    pub async fn generate_blog(
        &self,
        request: GenerateBlogRequest,
    ) -> Result<GenerateBlogResponse> {
        let url = format!("{}/content/blogs/generate", self.base_url);
        self.send(|client| client.post(&url).json(&request), 0).await
    }

    /// List saved blog articles matching the request filters.
    pub async fn list_blogs(&self, request: ListContentRequest) -> Result<Vec<BlogPost>> {
        let url = format!("{}/content/blogs/list", self.base_url);
        self.send(|client| client.post(&url).json(&request), READ_RETRIES)
            .await
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    /// Send a request, retrying transient failures up to `retries` times.
    /// The builder closure is re-invoked per attempt since a sent request
    /// consumes its builder.
    async fn send<R, F>(&self, build: F, retries: u32) -> Result<R>
    where
        R: DeserializeOwned,
        F: Fn(&Client) -> reqwest::RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.execute(&build).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt <= retries => {
                    warn!(error = %e, attempt, "portal request failed, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute<R, F>(&self, build: &F) -> Result<R>
    where
        R: DeserializeOwned,
        F: Fn(&Client) -> reqwest::RequestBuilder,
    {
        let response = build(&self.http_client).send().await.map_err(|e| {
            warn!(error = %e, "portal request failed");
            PortalError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "portal API error");
            return Err(PortalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = %status, "portal request ok");
        response
            .json::<R>()
            .await
            .map_err(|e| PortalError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = PortalClient::new("http://backend:9000/api/v1");
        assert_eq!(client.base_url(), "http://backend:9000/api/v1");
    }

    #[test]
    fn test_transient_classification() {
        assert!(PortalError::Network("connection refused".into()).is_transient());
        assert!(PortalError::Api {
            status: 503,
            message: String::new()
        }
        .is_transient());
        assert!(!PortalError::Api {
            status: 400,
            message: String::new()
        }
        .is_transient());
        assert!(!PortalError::Parse("bad json".into()).is_transient());
    }
}
