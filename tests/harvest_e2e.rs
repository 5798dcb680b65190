// tests/harvest_e2e.rs
// Full pipeline over fixture documents: feed parse → normalize → classify →
// filter, with an injected `today`.

use chrono::NaiveDate;
use funding_watch::harvest::config::HarvestConfig;
use funding_watch::harvest::providers::{feed::FeedProvider, html::HtmlProvider};
use funding_watch::harvest::run_once;
use funding_watch::Status;

const RSS_XML: &str = include_str!("fixtures/funding_rss.xml");
const CLOSED_PAGE: &str = include_str!("fixtures/closed_page.html");
const OPEN_PAGE: &str = include_str!("fixtures/open_page.html");

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn cfg(url: &str) -> HarvestConfig {
    HarvestConfig {
        sources: vec![url.to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn rss_source_keeps_open_and_unknown_drops_closed() {
    let feed = FeedProvider::from_fixture(RSS_XML);
    let html = HtmlProvider::from_fixture("<html></html>");

    let (records, failed, dropped) =
        run_once(&cfg("https://funder.example/feed"), &feed, &html, today()).await;

    assert_eq!(failed, 0);
    // "Mobility grants" (closed phrase) and "Pilot programme" (past date).
    assert_eq!(dropped, 2);

    let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Research infrastructure call 2026", "General support"]);

    assert_eq!(records[0].status, Status::Open);
    assert_eq!(records[0].date, "2026-12-01");
    assert_eq!(records[0].link, "https://funder.example/calls/infra-2026");

    assert_eq!(records[1].status, Status::Unknown);
    assert_eq!(records[1].date, "");
}

#[tokio::test]
async fn html_fallback_page_with_closed_notice_yields_nothing() {
    let feed = FeedProvider::from_fixture("not xml at all");
    let html = HtmlProvider::from_fixture(CLOSED_PAGE);

    let (records, failed, dropped) =
        run_once(&cfg("https://foundation.example"), &feed, &html, today()).await;

    assert!(records.is_empty());
    assert_eq!(failed, 0);
    assert_eq!(dropped, 1);
}

#[tokio::test]
async fn html_fallback_page_with_future_date_is_kept() {
    let feed = FeedProvider::from_fixture("not xml at all");
    let html = HtmlProvider::from_fixture(OPEN_PAGE);

    let (records, _, _) =
        run_once(&cfg("https://rahasto.example"), &feed, &html, today()).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, Status::Open);
    assert_eq!(records[0].date, "2026-10-01");
    assert_eq!(records[0].link, "https://rahasto.example/haku");
    assert_eq!(records[0].title, "Kulttuurirahasto — apurahat");
}
