// tests/classify_dates.rs
use chrono::NaiveDate;
use funding_watch::classify::dates::{dates_in, first_date_in, parse_date_token};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn finds_dotted_date_inside_noisy_text() {
    let text = "Hakuaika: 14.2.2026 klo 16.15 mennessä";
    // "16.15" is not a date token (no four-digit year); the real date wins.
    assert_eq!(first_date_in(text), Some(d(2026, 2, 14)));
}

#[test]
fn finds_iso_date_inside_text() {
    assert_eq!(
        first_date_in("Apply now, deadline 2027-05-01"),
        Some(d(2027, 5, 1))
    );
}

#[test]
fn text_order_beats_format_order() {
    assert_eq!(
        first_date_in("from 2026-01-10 until 28.2.2026"),
        Some(d(2026, 1, 10))
    );
    assert_eq!(
        first_date_in("from 10.1.2026 until 2026-02-28"),
        Some(d(2026, 1, 10))
    );
}

#[test]
fn impossible_calendar_values_yield_nothing() {
    assert_eq!(first_date_in("deadline 31.02.2026"), None);
    assert_eq!(first_date_in("deadline 2026-13-01"), None);
}

#[test]
fn scan_continues_past_an_invalid_candidate() {
    let dates: Vec<_> = dates_in("31.02.2026 then 1.3.2026 then 2026-04-02").collect();
    assert_eq!(dates, vec![d(2026, 3, 1), d(2026, 4, 2)]);
}

#[test]
fn token_parser_requires_a_full_token() {
    assert_eq!(parse_date_token("around 1.1.2026"), None);
    assert_eq!(parse_date_token("2026-01-01"), Some(d(2026, 1, 1)));
}

#[test]
fn plain_text_has_no_dates() {
    assert_eq!(first_date_in("Great opportunity for researchers"), None);
    assert_eq!(first_date_in(""), None);
}
