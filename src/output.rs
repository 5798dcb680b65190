// src/output.rs
//! CSV persistence for harvested records.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::record::FundingRecord;

const COLUMNS: [&str; 5] = ["source_url", "title", "link", "date", "status"];

/// Write records as CSV, overwriting `path`. The header row is written even
/// when there are no records.
pub fn write_csv(path: &Path, records: &[FundingRecord]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv_to(file, records)
}

/// Same as [`write_csv`] against any writer; the testable core.
pub fn write_csv_to<W: Write>(writer: W, records: &[FundingRecord]) -> Result<()> {
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    w.write_record(COLUMNS).context("writing csv header")?;
    for r in records {
        w.write_record([
            r.source_url.as_str(),
            r.title.as_str(),
            r.link.as_str(),
            r.date.as_str(),
            r.status.as_str(),
        ])
        .context("writing csv row")?;
    }
    w.flush().context("flushing csv output")?;
    Ok(())
}
