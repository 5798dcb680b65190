// src/harvest/mod.rs
pub mod config;
pub mod providers;
pub mod types;

use chrono::NaiveDate;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;

use crate::classify::{self, Verdict};
use crate::harvest::config::HarvestConfig;
use crate::harvest::types::{FeedFetch, HtmlFetch, RawItem};
use crate::record::{FundingRecord, Status};

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("harvest_items_total", "Raw items parsed from sources.");
        describe_counter!("harvest_kept_total", "Records kept after classification.");
        describe_counter!(
            "harvest_dropped_closed_total",
            "Items dropped because they classified as closed."
        );
        describe_counter!(
            "harvest_source_errors_total",
            "Sources where both feed and HTML fetch failed."
        );
        describe_histogram!("harvest_parse_ms", "Feed parse time in milliseconds.");
        describe_gauge!("harvest_last_run_ts", "Unix ts when the harvest last ran.");
    });
}

/// Collapse raw fetched text to plain classifier input: decode HTML
/// entities, strip tags, fold whitespace.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// One normalized item with its classification verdict still attached.
/// The verdict decides filtering at the orchestrator boundary; it never
/// reaches the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    pub source_url: String,
    pub title: String,
    pub link: String,
    /// `YYYY-MM-DD`, or empty when no date was found.
    pub date: String,
    pub verdict: Verdict,
}

impl ClassifiedItem {
    /// Downgrade to a persistable record; `Closed` items yield `None`.
    pub fn into_record(self) -> Option<FundingRecord> {
        let status = Status::from_verdict(self.verdict)?;
        Some(FundingRecord {
            source_url: self.source_url,
            title: self.title,
            link: self.link,
            date: self.date,
            status,
        })
    }
}

/// Map one raw fetched item into canonical shape and classify it.
///
/// Total over its inputs: a missing title falls back to the link, a missing
/// link becomes empty, and nothing here returns an error. The classifier
/// sees the normalized title and summary joined with a space; the record's
/// `date` field is the same date the classifier selected, rendered as ISO.
pub fn normalize_item(
    source_url: &str,
    item: &RawItem,
    today: NaiveDate,
    extra_signals: &[String],
) -> ClassifiedItem {
    let title = item.title.as_deref().map(normalize_text).unwrap_or_default();
    let summary = item.summary.as_deref().map(normalize_text).unwrap_or_default();
    let combined = if summary.is_empty() {
        title.clone()
    } else if title.is_empty() {
        summary.clone()
    } else {
        format!("{title} {summary}")
    };

    let published = item.published.as_deref();
    let verdict = classify::classify_with(&combined, published, today, extra_signals);
    let date = classify::deadline_in(&combined, published)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let link = item.link.clone().unwrap_or_default();
    let title = if title.is_empty() { link.clone() } else { title };

    ClassifiedItem {
        source_url: source_url.to_string(),
        title,
        link,
        date,
        verdict,
    }
}

/// Feed first; fall back to the single HTML pseudo-item when the feed fails
/// or yields nothing. An error from both fetchers surfaces to the caller.
async fn fetch_source(
    url: &str,
    feed: &dyn FeedFetch,
    html: &dyn HtmlFetch,
) -> anyhow::Result<Vec<RawItem>> {
    match feed.fetch_feed(url).await {
        Ok(items) if !items.is_empty() => Ok(items),
        Ok(_) => Ok(vec![html.fetch_html(url).await?]),
        Err(e) => {
            tracing::debug!(error = ?e, source = %url, "feed fetch failed, trying html fallback");
            Ok(vec![html.fetch_html(url).await?])
        }
    }
}

/// Walk every configured source once, in list order, and collect the records
/// that survive classification.
///
/// A failing source is logged and skipped; it never aborts the run for the
/// remaining sources. Returns `(records, failed_sources, dropped_closed)`.
pub async fn run_once(
    cfg: &HarvestConfig,
    feed: &dyn FeedFetch,
    html: &dyn HtmlFetch,
    today: NaiveDate,
) -> (Vec<FundingRecord>, usize, usize) {
    ensure_metrics_described();

    let mut records = Vec::new();
    let mut failed = 0usize;
    let mut dropped = 0usize;

    for url in &cfg.sources {
        let items = match fetch_source(url, feed, html).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = ?e, source = %url, "source fetch failed");
                counter!("harvest_source_errors_total").increment(1);
                failed += 1;
                continue;
            }
        };

        for item in items.iter().take(cfg.max_items_per_source) {
            let classified = normalize_item(url, item, today, &cfg.extra_closed_signals);
            match classified.into_record() {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    counter!("harvest_dropped_closed_total").increment(1);
                }
            }
        }
    }

    counter!("harvest_kept_total").increment(records.len() as u64);
    gauge!("harvest_last_run_ts").set(chrono::Utc::now().timestamp().max(0) as f64);

    (records, failed, dropped)
}
