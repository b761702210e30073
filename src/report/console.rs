// src/report/console.rs
// =============================================================================
// Human-readable summary, printed to stdout at the end of a run.
//
//   ============================================================
//   RESULTS: 1 broken unique URLs found
//            (2 total broken references across pages)
//   Report saved to: site/broken_links_report.csv
//   ============================================================
//
//     b.html
//       [500] Internal Server Error
//            http://bad.example
// =============================================================================

use std::fmt;
use std::path::Path;

use super::Report;

const RULE_WIDTH: usize = 60;

// The summary block as a Display value, so any sink can receive it
pub struct Summary<'a> {
    report: &'a Report,
    saved_to: Option<&'a Path>,
}

impl<'a> Summary<'a> {
    pub fn new(report: &'a Report, saved_to: Option<&'a Path>) -> Self {
        Self { report, saved_to }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "RESULTS: {} broken unique URLs found", self.report.broken_targets())?;
        writeln!(
            f,
            "         ({} total broken references across pages)",
            self.report.broken_references()
        )?;
        if let Some(path) = self.saved_to {
            writeln!(f, "Report saved to: {}", path.display())?;
        }
        writeln!(f, "{}", rule)?;

        let mut current_page: Option<&str> = None;
        for failure in self.report.failures() {
            if current_page != Some(failure.page.as_str()) {
                current_page = Some(failure.page.as_str());
                writeln!(f, "\n  {}", failure.page)?;
            }
            writeln!(f, "    [{}] {}", failure.status_label(), failure.reason)?;
            writeln!(f, "         {}", failure.url)?;
        }

        Ok(())
    }
}

pub fn render_summary(report: &Report, saved_to: Option<&Path>) -> String {
    Summary::new(report, saved_to).to_string()
}
