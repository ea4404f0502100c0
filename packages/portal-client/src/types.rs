//! Portal API request and response types.
//!
//! Field names match the backend wire format exactly (snake_case JSON).
//! Optional request fields are skipped when absent so the backend applies
//! its own defaults.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Source type
// =============================================================================

/// Data source a piece of content is generated from.
///
/// The backend accepts exactly these two values; sector filters apply only
/// to `jobs`, category and source filters only to `news`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Jobs,
    News,
}

impl SourceType {
    /// Wire value ("jobs" or "news").
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Jobs => "jobs",
            SourceType::News => "news",
        }
    }

    /// Human-readable label for selects and tags.
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Jobs => "Jobs Data",
            SourceType::News => "News Articles",
        }
    }

    pub fn variants() -> &'static [SourceType] {
        &[SourceType::Jobs, SourceType::News]
    }

    /// Parse a wire value back into a source type.
    pub fn from_value(value: &str) -> Option<SourceType> {
        match value {
            "jobs" => Some(SourceType::Jobs),
            "news" => Some(SourceType::News),
            _ => None,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Indexing
// =============================================================================

/// Indexing progress for one source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingStats {
    pub table_name: String,
    pub total_records: i64,
    pub indexed_records: i64,
    pub unindexed_records: i64,
    /// Percent of records indexed, rounded to two decimals by the backend.
    pub index_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
    pub vector_table: String,
}

impl IndexingStats {
    /// Indexing counts as complete only at exactly 100 percent.
    pub fn is_complete(&self) -> bool {
        self.index_percentage == 100.0
    }
}

/// Indexing progress across all source tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingStatsResponse {
    /// Per-table stats keyed by table name.
    pub stats: BTreeMap<String, IndexingStats>,
    pub total_records: i64,
    pub total_indexed: i64,
    pub overall_percentage: f64,
}

impl IndexingStatsResponse {
    pub fn is_complete(&self) -> bool {
        self.overall_percentage == 100.0
    }
}

/// High-level counters for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_jobs: i64,
    pub total_news: i64,
    pub total_tnnews: i64,
    pub total_aijobs: i64,
    pub indexed_today: i64,
    pub crawlers_active: i64,
    pub indexing_success_rate: f64,
}

/// Status of one crawler process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlerStatus {
    pub name: String,
    /// One of "running", "stopped", "scheduled", "error".
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_run: Option<NaiveDateTime>,
    pub records_crawled: i64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlerStatusResponse {
    pub crawlers: Vec<CrawlerStatus>,
}

// =============================================================================
// Filters
// =============================================================================

/// Available filter values for the content generator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub news_categories: Vec<String>,
    pub news_sources: Vec<String>,
    pub job_sectors: Vec<String>,
}

// =============================================================================
// Titles
// =============================================================================

/// Request body for `POST /content/generate-titles`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateTitlesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub source_type: SourceType,
    /// Number of titles to generate (backend default 5, max 10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
    /// Jobs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// News only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// News only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTitlesResponse {
    pub topic: String,
    pub source_type: SourceType,
    /// Filters the backend actually applied, echoed back for display.
    pub filters_applied: serde_json::Value,
    pub titles: Vec<String>,
}

/// Request body for `POST /content/titles/save`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveTitleRequest {
    pub source_type: SourceType,
    pub topic: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTitleResponse {
    pub id: i64,
    pub message: String,
}

/// Request body for `POST /content/titles/list`. All fields optional;
/// omitted fields leave that dimension unfiltered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTitlesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_used: Option<bool>,
    /// Backend default 50, max 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// A saved generated title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: i64,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    pub topic: String,
    pub title: String,
    #[serde(default)]
    pub is_used: bool,
    #[serde(default)]
    pub used_count: i64,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Title {
    /// Active filters as a short display string, e.g. "Sector: Engineering".
    pub fn filter_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sector) = &self.filter_sector {
            parts.push(format!("Sector: {sector}"));
        }
        if let Some(category) = &self.filter_category {
            parts.push(format!("Category: {category}"));
        }
        if let Some(source) = &self.filter_source {
            parts.push(format!("Source: {source}"));
        }
        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(", ")
        }
    }
}

// =============================================================================
// Social content
// =============================================================================

/// Request body for `POST /content/social/generate`.
///
/// The backend persists the generated post before responding, so a
/// successful generate is also a save.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateSocialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub topic: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateSocialResponse {
    pub id: i64,
    pub content: String,
    pub message: String,
}

/// Request body for `POST /content/social/list` and `POST /content/blogs/list`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// A saved social media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_id: Option<i64>,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

// =============================================================================
// Blogs
// =============================================================================

/// Request body for `POST /content/blogs/generate`.
///
/// Like social generation, the backend persists the article before
/// responding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateBlogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_id: Option<i64>,
    pub title: String,
    pub topic: String,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// "short", "medium", or "long".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBlogResponse {
    pub id: i64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub word_count: i64,
    pub message: String,
}

/// A saved blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_id: Option<i64>,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_source: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_wire_values() {
        assert_eq!(serde_json::to_string(&SourceType::Jobs).unwrap(), "\"jobs\"");
        assert_eq!(serde_json::to_string(&SourceType::News).unwrap(), "\"news\"");
        assert_eq!(SourceType::from_value("news"), Some(SourceType::News));
        assert_eq!(SourceType::from_value("podcasts"), None);
    }

    #[test]
    fn test_list_request_omits_unset_fields() {
        let request = ListTitlesRequest {
            source_type: Some(SourceType::Jobs),
            filter_sector: Some("Engineering".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["source_type"], "jobs");
        assert_eq!(body["filter_sector"], "Engineering");
        assert!(body.get("filter_category").is_none());
        assert!(body.get("filter_source").is_none());
        assert!(body.get("is_used").is_none());
        assert!(body.get("limit").is_none());
    }

    #[test]
    fn test_is_used_tristate() {
        let unfiltered = ListTitlesRequest::default();
        let body = serde_json::to_value(&unfiltered).unwrap();
        assert!(body.get("is_used").is_none());

        let unused_only = ListTitlesRequest {
            is_used: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&unused_only).unwrap();
        assert_eq!(body["is_used"], false);

        let used_only = ListTitlesRequest {
            is_used: Some(true),
            ..Default::default()
        };
        let body = serde_json::to_value(&used_only).unwrap();
        assert_eq!(body["is_used"], true);
    }

    #[test]
    fn test_generate_request_serialization() {
        let request = GenerateTitlesRequest {
            source_type: SourceType::News,
            count: Some(7),
            category: Some("technology".to_string()),
            source: Some("TechDaily".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["source_type"], "news");
        assert_eq!(body["count"], 7);
        assert_eq!(body["category"], "technology");
        assert_eq!(body["source"], "TechDaily");
        assert!(body.get("sector").is_none());
        assert!(body.get("topic").is_none());
    }

    #[test]
    fn test_title_deserializes_wire_payload() {
        let json = r#"{
            "id": 42,
            "source_type": "jobs",
            "source_id": null,
            "filter_sector": "Engineering",
            "filter_category": null,
            "filter_source": null,
            "topic": "",
            "title": "Top Engineering Roles This Week",
            "is_used": true,
            "used_count": 3,
            "created_at": "2025-08-20T10:30:00",
            "created_by": "admin"
        }"#;

        let title: Title = serde_json::from_str(json).unwrap();
        assert_eq!(title.id, 42);
        assert_eq!(title.source_type, SourceType::Jobs);
        assert_eq!(title.filter_sector.as_deref(), Some("Engineering"));
        assert!(title.is_used);
        assert_eq!(title.used_count, 3);
        assert_eq!(title.filter_summary(), "Sector: Engineering");
    }

    #[test]
    fn test_filter_summary_empty() {
        let json = r#"{
            "id": 1,
            "source_type": "news",
            "topic": "",
            "title": "Untargeted",
            "created_at": "2025-08-20T10:30:00"
        }"#;

        let title: Title = serde_json::from_str(json).unwrap();
        assert_eq!(title.filter_summary(), "None");
        assert!(!title.is_used);
        assert_eq!(title.used_count, 0);
    }

    #[test]
    fn test_indexing_complete_only_at_hundred() {
        let stats = IndexingStats {
            table_name: "jobs".to_string(),
            total_records: 1000,
            indexed_records: 999,
            unindexed_records: 1,
            index_percentage: 99.9,
            last_updated: None,
            vector_table: "jobs_vectors".to_string(),
        };
        assert!(!stats.is_complete());

        let done = IndexingStats {
            indexed_records: 1000,
            unindexed_records: 0,
            index_percentage: 100.0,
            ..stats
        };
        assert!(done.is_complete());
    }

    #[test]
    fn test_stats_response_deserializes_table_map() {
        let json = r#"{
            "stats": {
                "jobs": {
                    "table_name": "jobs",
                    "total_records": 500,
                    "indexed_records": 250,
                    "unindexed_records": 250,
                    "index_percentage": 50.0,
                    "last_updated": "2025-08-21T08:00:00",
                    "vector_table": "jobs_vectors"
                },
                "news_articles": {
                    "table_name": "news_articles",
                    "total_records": 500,
                    "indexed_records": 500,
                    "unindexed_records": 0,
                    "index_percentage": 100.0,
                    "vector_table": "news_vectors"
                }
            },
            "total_records": 1000,
            "total_indexed": 750,
            "overall_percentage": 75.0
        }"#;

        let response: IndexingStatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.stats.len(), 2);
        assert!(response.stats["news_articles"].is_complete());
        assert!(!response.is_complete());
        assert_eq!(response.total_indexed, 750);
    }
}
