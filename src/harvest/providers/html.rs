// src/harvest/providers/html.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::harvest::types::{HtmlFetch, RawItem};

/// Fallback fetcher for sources without a usable feed. Produces one
/// pseudo-item per page: the page title, the first link on the page (the
/// page URL itself when it has none), and the visible text as summary.
pub struct HtmlProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http(reqwest::Client),
}

impl HtmlProvider {
    pub fn from_fixture(body: &str) -> Self {
        Self {
            mode: Mode::Fixture(body.to_string()),
        }
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            mode: Mode::Http(client),
        }
    }

    fn extract_item(body: &str, url: &str) -> RawItem {
        let document = Html::parse_document(body);
        let title_sel = Selector::parse("title").expect("title selector");
        let anchor_sel = Selector::parse("a[href]").expect("anchor selector");
        let body_sel = Selector::parse("body").expect("body selector");

        let title = document
            .select(&title_sel)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let link = document
            .select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());

        let page_text = document
            .select(&body_sel)
            .next()
            .map(|b| b.text().collect::<Vec<_>>().join(" "))
            .filter(|t| !t.trim().is_empty());

        RawItem {
            title,
            link: Some(link),
            summary: page_text,
            published: None,
        }
    }
}

#[async_trait]
impl HtmlFetch for HtmlProvider {
    async fn fetch_html(&self, url: &str) -> Result<RawItem> {
        match &self.mode {
            Mode::Fixture(body) => Ok(Self::extract_item(body, url)),
            Mode::Http(client) => {
                let resp = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("html GET {url}"))?;
                let body = resp
                    .error_for_status()
                    .with_context(|| format!("html status {url}"))?
                    .text()
                    .await
                    .with_context(|| format!("html body {url}"))?;
                Ok(Self::extract_item(&body, url))
            }
        }
    }
}
