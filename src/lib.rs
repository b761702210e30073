//! link-sweep: find broken external links in a directory of documents.
//!
//! Pipeline:
//! - [`references`]: read documents, extract links, deduplicate into a
//!   [`references::ReferenceMap`]
//! - [`checker`]: probe every unique URL once, under a global and a
//!   per-host concurrency cap
//! - [`report`]: sort the failures and render them as CSV, JSON or text

pub mod checker;
pub mod logging;
pub mod references;
pub mod report;

use checker::{CheckerConfig, Coordinator, Transport};
use references::ReferenceMap;
use report::Report;
use tracing::info;

/// Checks every external link of `references` and builds the report
pub async fn sweep<T: Transport>(
    references: &ReferenceMap,
    transport: T,
    config: &CheckerConfig,
) -> Report {
    info!(
        "Checking {} unique URLs (concurrency={}, timeout={}s)",
        references.len(),
        config.concurrency,
        config.timeout.as_secs()
    );

    let coordinator = Coordinator::new(transport, config);
    let failures = coordinator.run(references).await;
    Report::new(failures, references.len())
}
