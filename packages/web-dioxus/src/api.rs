//! Server functions bridging the UI to the portal backend REST API.
//!
//! Each function wraps one backend endpoint. The browser reaches these
//! through the Dioxus server-function transport; during SSR they run
//! in-process.

use dioxus::prelude::*;
use portal_client::{
    BlogPost, CrawlerStatus, DashboardStats, FilterOptions, GenerateBlogRequest,
    GenerateBlogResponse, GenerateSocialRequest, GenerateSocialResponse, GenerateTitlesRequest,
    GenerateTitlesResponse, IndexingStatsResponse, ListContentRequest, ListTitlesRequest,
    SaveTitleRequest, SaveTitleResponse, SocialPost, Title,
};

/// Client for server-side requests to the backend. Base URL comes from
/// the `API_URL` environment variable.
#[cfg(feature = "server")]
fn portal_client() -> portal_client::PortalClient {
    portal_client::PortalClient::from_env()
}

// ============================================================================
// Dashboard
// ============================================================================

#[server]
pub async fn fetch_indexing_stats() -> Result<IndexingStatsResponse, ServerFnError> {
    portal_client()
        .indexing_stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    portal_client()
        .dashboard_stats()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn fetch_crawler_statuses() -> Result<Vec<CrawlerStatus>, ServerFnError> {
    let response = portal_client()
        .crawler_statuses()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(response.crawlers)
}

// ============================================================================
// Generation
// ============================================================================

#[server]
pub async fn fetch_filter_options() -> Result<FilterOptions, ServerFnError> {
    portal_client()
        .filter_options()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn generate_titles(
    request: GenerateTitlesRequest,
) -> Result<GenerateTitlesResponse, ServerFnError> {
    portal_client()
        .generate_titles(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn save_title(request: SaveTitleRequest) -> Result<SaveTitleResponse, ServerFnError> {
    portal_client()
        .save_title(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn generate_social(
    request: GenerateSocialRequest,
) -> Result<GenerateSocialResponse, ServerFnError> {
    portal_client()
        .generate_social(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn generate_blog(
    request: GenerateBlogRequest,
) -> Result<GenerateBlogResponse, ServerFnError> {
    portal_client()
        .generate_blog(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

// ============================================================================
// Saved content
// ============================================================================

#[server]
pub async fn list_titles(request: ListTitlesRequest) -> Result<Vec<Title>, ServerFnError> {
    portal_client()
        .list_titles(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn list_social(request: ListContentRequest) -> Result<Vec<SocialPost>, ServerFnError> {
    portal_client()
        .list_social(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn list_blogs(request: ListContentRequest) -> Result<Vec<BlogPost>, ServerFnError> {
    portal_client()
        .list_blogs(request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
