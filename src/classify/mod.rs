// src/classify/mod.rs
//! Open/closed status classification for funding call announcements.
//!
//! Pure functions over `(text, published hint, today)`; `today` is always an
//! explicit parameter so classification stays deterministic under test.

pub mod dates;
pub mod signals;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tri-state classification of one announcement. `Closed` never reaches the
/// persisted output; the orchestrator drops those items before a record is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Open,
    Unknown,
    Closed,
}

/// Candidate closing date for an item: the first date found in the combined
/// text, falling back to the item's raw published/date string when the text
/// has none. The hint goes through the same calendar layouts only; an
/// RFC 2822 feed timestamp is not a closing date and does not parse here.
pub fn deadline_in(text: &str, published_hint: Option<&str>) -> Option<NaiveDate> {
    dates::first_date_in(text).or_else(|| published_hint.and_then(dates::parse_date_token))
}

/// Classify combined announcement text against `today`.
///
/// Precedence, earlier rules win:
/// 1. any closed phrase in the text → `Closed`, regardless of dates;
/// 2. a date strictly before `today` → `Closed`;
/// 3. a date today or later → `Open`;
/// 4. no signal at all → `Unknown`.
pub fn classify(text: &str, published_hint: Option<&str>, today: NaiveDate) -> Verdict {
    classify_with(text, published_hint, today, &[])
}

/// [`classify`] with extra closed phrases from configuration.
pub fn classify_with(
    text: &str,
    published_hint: Option<&str>,
    today: NaiveDate,
    extra_signals: &[String],
) -> Verdict {
    if signals::has_closed_signal_with(text, extra_signals) {
        return Verdict::Closed;
    }
    match deadline_in(text, published_hint) {
        Some(date) if date < today => Verdict::Closed,
        Some(_) => Verdict::Open,
        None => Verdict::Unknown,
    }
}
