// src/harvest/providers/feed.rs
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::harvest::types::{FeedFetch, RawItem};

// --- RSS 2.0 shape ---

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

// --- Atom shape ---

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entry: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<String>,
    #[serde(rename = "link", default)]
    link: Vec<AtomLink>,
    summary: Option<String>,
    content: Option<String>,
    published: Option<String>,
    updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
}

/// Feed fetcher that understands RSS 2.0 and Atom documents.
///
/// Items are returned verbatim; text normalization belongs to the item
/// normalizer, not the fetch layer.
pub struct FeedProvider {
    mode: Mode,
}

enum Mode {
    /// Owned body, for tests and offline runs.
    Fixture(String),
    Http(reqwest::Client),
}

impl FeedProvider {
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

    /// Parse a feed document. RSS is tried first; a document that is neither
    /// usable RSS nor Atom is an error, which makes the orchestrator fall
    /// back to plain HTML extraction for that source.
    fn parse_feed_str(body: &str, url: &str) -> Result<Vec<RawItem>> {
        let t0 = std::time::Instant::now();
        let xml_clean = scrub_entities_for_xml(body);

        let items: Vec<RawItem> = if let Ok(rss) = from_str::<Rss>(&xml_clean) {
            rss.channel
                .item
                .into_iter()
                .map(|it| RawItem {
                    title: it.title,
                    link: it.link,
                    summary: it.description,
                    published: it.pub_date,
                })
                .collect()
        } else if let Ok(atom) = from_str::<AtomFeed>(&xml_clean) {
            // Every Atom field is optional to serde, so any well-formed XML
            // "parses" as an entry-less feed. Zero entries means this was
            // not a feed at all.
            if atom.entry.is_empty() {
                bail!("no RSS or Atom structure recognized at {url}");
            }
            atom.entry
                .into_iter()
                .map(|e| RawItem {
                    title: e.title,
                    link: e.link.into_iter().find_map(|l| l.href),
                    summary: e.summary.or(e.content),
                    published: e.published.or(e.updated),
                })
                .collect()
        } else {
            bail!("no RSS or Atom structure recognized at {url}");
        };

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("harvest_parse_ms").record(ms);
        counter!("harvest_items_total").increment(items.len() as u64);
        Ok(items)
    }
}

#[async_trait]
impl FeedFetch for FeedProvider {
    async fn fetch_feed(&self, url: &str) -> Result<Vec<RawItem>> {
        match &self.mode {
            Mode::Fixture(body) => Self::parse_feed_str(body, url),
            Mode::Http(client) => {
                let resp = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("feed GET {url}"))?;
                let body = resp
                    .error_for_status()
                    .with_context(|| format!("feed status {url}"))?
                    .text()
                    .await
                    .with_context(|| format!("feed body {url}"))?;
                Self::parse_feed_str(&body, url)
            }
        }
    }
}

/// HTML entities that are legal in feeds-in-the-wild but not in XML.
fn scrub_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
