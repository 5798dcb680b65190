// src/classify/dates.rs
//! Date extraction from free announcement text.
//!
//! Two layouts are recognized: day-first dotted dates as written in Finnish
//! sources (`14.2.2026`, `01.03.2026`) and ISO 8601 (`2026-02-14`). Day and
//! month accept one or two digits, the year must be four. A token that names
//! an impossible calendar date is skipped, never an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches any supported date token; used to walk a text left to right so
/// that the first date *in text order* wins, regardless of its layout.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{1,2}\.\d{1,2}\.\d{4}|\d{4}-\d{1,2}-\d{1,2})\b").unwrap()
});

#[derive(Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    YearMonthDay,
}

/// Supported layouts, one full-token pattern each, tried in order.
static LAYOUTS: Lazy<Vec<(Regex, FieldOrder)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").unwrap(),
            FieldOrder::DayMonthYear,
        ),
        (
            Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap(),
            FieldOrder::YearMonthDay,
        ),
    ]
});

fn field(caps: &regex::Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Parse one trimmed date token against the supported layouts.
/// `None` when no layout matches or the calendar date does not exist
/// (e.g. `31.02.2026`, `2026-13-01`).
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    for (re, order) in LAYOUTS.iter() {
        let Some(caps) = re.captures(token) else {
            continue;
        };
        let (year, month, day) = match order {
            FieldOrder::DayMonthYear => (field(&caps, 3), field(&caps, 2), field(&caps, 1)),
            FieldOrder::YearMonthDay => (field(&caps, 1), field(&caps, 2), field(&caps, 3)),
        };
        if let (Some(y), Some(m), Some(d)) = (year, month, day) {
            return NaiveDate::from_ymd_opt(y as i32, m, d);
        }
    }
    None
}

/// Lazily yields every valid calendar date found in `text`, in text order.
/// Date-shaped tokens that fail calendar construction are skipped and the
/// scan continues.
pub fn dates_in(text: &str) -> impl Iterator<Item = NaiveDate> + '_ {
    DATE_TOKEN
        .find_iter(text)
        .filter_map(|m| parse_date_token(m.as_str()))
}

/// First valid date in text order, if any. Later dates in the same text are
/// ignored; one candidate closing date per item is all the classifier needs.
pub fn first_date_in(text: &str) -> Option<NaiveDate> {
    dates_in(text).next()
}
