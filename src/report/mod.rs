// src/report/mod.rs
// =============================================================================
// The broken-links report.
//
// A Report owns the failure rows, sorted by (page, url), plus the number of
// unique URLs that were checked. It can be written as CSV (table), printed
// as a grouped console listing (console), or serialized to JSON.
// =============================================================================

mod console;
mod table;

use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;

use crate::checker::FailureRecord;

pub use console::{render_summary, Summary};
pub use table::{save_csv, write_csv, DEFAULT_REPORT_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Unique URLs that were probed
    checked: usize,
    broken_targets: usize,
    broken_references: usize,
    failures: Vec<FailureRecord>,
}

impl Report {
    pub fn new(mut failures: Vec<FailureRecord>, checked: usize) -> Self {
        failures.sort_by(|a, b| (&a.page, &a.url).cmp(&(&b.page, &b.url)));

        let broken_targets = failures
            .iter()
            .map(|f| f.url.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            checked,
            broken_targets,
            broken_references: failures.len(),
            failures,
        }
    }

    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Distinct URLs that failed
    pub fn broken_targets(&self) -> usize {
        self.broken_targets
    }

    /// Failure rows, one per (page, url)
    pub fn broken_references(&self) -> usize {
        self.broken_references
    }

    /// The exit signal: true when nothing is broken
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
pub(crate) fn record(page: &str, url: &str, status: Option<u16>, reason: &str) -> FailureRecord {
    FailureRecord {
        page: page.to_string(),
        url: url.to_string(),
        status,
        reason: reason.to_string(),
    }
}
