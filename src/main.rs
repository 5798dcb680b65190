//! Funding watch binary entrypoint.
//! One-shot run: load sources, fetch each once, classify, write the CSV.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use funding_watch::harvest::providers::{feed::FeedProvider, html::HtmlProvider};
use funding_watch::harvest::{config, run_once};
use funding_watch::output;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("funding_watch=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op elsewhere. Enables FUNDING_SOURCES_PATH
    // from .env so config.rs can pick it up.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_config_default().context("loading harvest config")?;
    if cfg.sources.is_empty() {
        tracing::warn!("no sources configured; output will be empty");
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .context("building http client")?;
    let feed = FeedProvider::from_client(client.clone());
    let html = HtmlProvider::from_client(client);

    let today = chrono::Local::now().date_naive();
    let (records, failed, dropped) = run_once(&cfg, &feed, &html, today).await;

    output::write_csv(&cfg.output, &records)
        .with_context(|| format!("writing {}", cfg.output.display()))?;

    tracing::info!(
        saved = records.len(),
        sources_failed = failed,
        closed_dropped = dropped,
        output = %cfg.output.display(),
        "harvest finished"
    );
    Ok(())
}
