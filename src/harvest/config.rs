// src/harvest/config.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "FUNDING_SOURCES_PATH";

/// Harvest run configuration. The minimal form is just a source list; the
/// plain-text format carries nothing else and uses the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Source URLs, checked in list order. Output preserves this order.
    pub sources: Vec<String>,
    /// Cap on feed items taken per source. Keeps output small.
    pub max_items_per_source: usize,
    /// Closed phrases checked in addition to the built-in set.
    pub extra_closed_signals: Vec<String>,
    /// Output CSV path.
    pub output: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            max_items_per_source: 5,
            extra_closed_signals: Vec::new(),
            output: PathBuf::from("funding_watch.csv"),
        }
    }
}

/// Load configuration from an explicit path. Supports TOML, JSON, or a
/// plain-text URL list (one per line, `#` comments and blanks skipped).
pub fn load_config_from(path: &Path) -> Result<HarvestConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading sources from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
}

/// Load configuration using env var + fallbacks:
/// 1) $FUNDING_SOURCES_PATH
/// 2) config/sources.toml
/// 3) config/sources.json
/// 4) sources.txt
///
/// None of them existing is not an error: the run simply has no sources and
/// produces empty output.
pub fn load_config_default() -> Result<HarvestConfig> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        }
        return Err(anyhow!("FUNDING_SOURCES_PATH points to non-existent path"));
    }
    for candidate in ["config/sources.toml", "config/sources.json", "sources.txt"] {
        let pb = PathBuf::from(candidate);
        if pb.exists() {
            return load_config_from(&pb);
        }
    }
    Ok(HarvestConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<HarvestConfig> {
    match hint_ext {
        "toml" => parse_toml(s),
        "json" => parse_json(s),
        "txt" => Ok(parse_plain(s)),
        _ => {
            // No usable extension: try the structured formats, then fall
            // back to treating the content as a plain URL list.
            if let Ok(cfg) = parse_toml(s) {
                return Ok(cfg);
            }
            if let Ok(cfg) = parse_json(s) {
                return Ok(cfg);
            }
            Ok(parse_plain(s))
        }
    }
}

fn parse_toml(s: &str) -> Result<HarvestConfig> {
    let mut cfg: HarvestConfig = toml::from_str(s).context("parsing sources toml")?;
    cfg.sources = clean_sources(cfg.sources);
    Ok(cfg)
}

/// JSON accepts either a bare array of URLs or the full config object.
fn parse_json(s: &str) -> Result<HarvestConfig> {
    if let Ok(sources) = serde_json::from_str::<Vec<String>>(s) {
        return Ok(HarvestConfig {
            sources: clean_sources(sources),
            ..Default::default()
        });
    }
    let mut cfg: HarvestConfig = serde_json::from_str(s).context("parsing sources json")?;
    cfg.sources = clean_sources(cfg.sources);
    Ok(cfg)
}

fn parse_plain(s: &str) -> HarvestConfig {
    let sources = s
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();
    HarvestConfig {
        sources: clean_sources(sources),
        ..Default::default()
    }
}

/// Trim entries, drop empties and duplicates. Keeps first occurrence order:
/// source-list order is also the output record order.
fn clean_sources(items: Vec<String>) -> Vec<String> {
    use std::collections::HashSet;
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && seen.insert(t.to_string()) {
            out.push(t.to_string());
        }
    }
    out
}
