// tests/providers_feed.rs
use funding_watch::harvest::providers::feed::FeedProvider;
use funding_watch::harvest::types::FeedFetch;

const RSS_XML: &str = include_str!("fixtures/funding_rss.xml");
const ATOM_XML: &str = include_str!("fixtures/funding_atom.xml");

#[tokio::test]
async fn rss_fixture_parses_into_raw_items() {
    let provider = FeedProvider::from_fixture(RSS_XML);
    let items = provider.fetch_feed("https://funder.example/feed").await.expect("rss parse ok");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].title.as_deref(), Some("Research infrastructure call 2026"));
    assert_eq!(
        items[0].link.as_deref(),
        Some("https://funder.example/calls/infra-2026")
    );
    assert!(items[1].summary.as_deref().unwrap().contains("päättynyt"));
    // pubDate text comes through untouched.
    assert_eq!(
        items[0].published.as_deref(),
        Some("Mon, 05 Jan 2026 10:00:00 GMT")
    );
}

#[tokio::test]
async fn atom_fixture_parses_with_link_href_attributes() {
    let provider = FeedProvider::from_fixture(ATOM_XML);
    let items = provider.fetch_feed("https://foundation.example/atom").await.expect("atom parse ok");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title.as_deref(), Some("Young researcher grants"));
    assert_eq!(
        items[0].link.as_deref(),
        Some("https://foundation.example/grants/young")
    );
    assert!(items[0].summary.as_deref().unwrap().contains("2026-10-15"));
}

#[tokio::test]
async fn non_feed_content_is_an_error() {
    let provider = FeedProvider::from_fixture("<html><body>not a feed</body></html>");
    assert!(provider.fetch_feed("https://x.example").await.is_err());
}
