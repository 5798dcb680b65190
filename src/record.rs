// src/record.rs
//! Output entity for the harvest pipeline.

use serde::{Deserialize, Serialize};

use crate::classify::Verdict;

/// Status persisted on a kept record. The wire form is the lowercase literal
/// (`open` / `unknown`); closed items are dropped before this type is ever
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Unknown,
}

impl Status {
    /// Downgrade a tri-state verdict to the persisted two-value domain.
    /// `Closed` has no persisted form.
    pub fn from_verdict(verdict: Verdict) -> Option<Status> {
        match verdict {
            Verdict::Open => Some(Status::Open),
            Verdict::Unknown => Some(Status::Unknown),
            Verdict::Closed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Unknown => "unknown",
        }
    }
}

/// One funding opportunity that survived classification. Immutable once
/// built; field order matches the persisted column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub source_url: String,
    pub title: String,
    pub link: String,
    /// `YYYY-MM-DD` when a date was detected in the item text, else empty.
    pub date: String,
    pub status: Status,
}
