// src/report/table.rs
// =============================================================================
// CSV output: header `page,url,status,reason`, one row per failure, in the
// report's (page, url) order. A missing status is written as N/A.
// =============================================================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::Report;

/// File name used when no --output path is given
pub const DEFAULT_REPORT_NAME: &str = "broken_links_report.csv";

pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut rows = csv::Writer::from_writer(writer);

    // Write the header explicitly so an empty report still has one
    rows.write_record(["page", "url", "status", "reason"])?;
    for failure in report.failures() {
        rows.write_record([
            failure.page.as_str(),
            failure.url.as_str(),
            failure.status_label().as_str(),
            failure.reason.as_str(),
        ])?;
    }

    rows.flush()?;
    Ok(())
}

pub fn save_csv(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;
    write_csv(report, file).with_context(|| format!("Failed to write report: {}", path.display()))
}
