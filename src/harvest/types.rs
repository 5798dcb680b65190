// src/harvest/types.rs
use anyhow::Result;

/// One raw item as delivered by a fetch collaborator, before normalization.
/// Every field is optional; absent fields become empty strings downstream,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawItem {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Feed summary/description, or the visible page text for HTML items.
    pub summary: Option<String>,
    /// Raw publication/closing date text exactly as found at the source.
    pub published: Option<String>,
}

/// Structured feed retrieval (RSS 2.0 or Atom) for one source URL.
#[async_trait::async_trait]
pub trait FeedFetch: Send + Sync {
    async fn fetch_feed(&self, url: &str) -> Result<Vec<RawItem>>;
}

/// Degraded single-item retrieval from a raw HTML page: page title plus the
/// first link found on the page.
#[async_trait::async_trait]
pub trait HtmlFetch: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<RawItem>;
}
