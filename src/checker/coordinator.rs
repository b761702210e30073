// src/checker/coordinator.rs
// =============================================================================
// Runs the Prober over every unique target of a ReferenceMap.
//
// How it works:
// 1. One future per unique URL goes into a FuturesUnordered. They all run
//    inside the calling task, so no Send/'static juggling is needed.
// 2. Each future first takes a slot from the global Semaphore, then probes.
//    The slot is released when the probe (retries included) is done.
// 3. Results are consumed in completion order. A failing outcome becomes one
//    FailureRecord per referencing page.
//
// Output order depends on completion order; the report sorts it afterwards.
// =============================================================================

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use super::config::CheckerConfig;
use super::outcome::{FailureRecord, Outcome};
use super::probe::Prober;
use super::transport::Transport;
use crate::references::ReferenceMap;

pub struct Coordinator<T> {
    prober: Prober<T>,
    limiter: Arc<Semaphore>,
    progress_interval: usize,
}

impl<T: Transport> Coordinator<T> {
    pub fn new(transport: T, config: &CheckerConfig) -> Self {
        Self {
            prober: Prober::new(transport, config),
            limiter: Arc::new(Semaphore::new(config.concurrency.max(1))),
            progress_interval: config.progress_interval,
        }
    }

    #[cfg(test)]
    pub(crate) fn prober(&self) -> &Prober<T> {
        &self.prober
    }

    /// Probes every target once and returns the failures, fanned out per page
    pub async fn run(&self, references: &ReferenceMap) -> Vec<FailureRecord> {
        let total = references.len();
        let prober = &self.prober;
        let limiter = &self.limiter;

        let mut pending: FuturesUnordered<_> = references
            .iter()
            .map(|(target, pages)| async move {
                let outcome = match Arc::clone(limiter).acquire_owned().await {
                    Ok(slot) => prober.probe(target, slot).await,
                    // Only happens if the semaphore is closed, which we never do
                    Err(_) => Outcome::indeterminate(target),
                };
                (outcome, pages)
            })
            .collect();

        let mut failures = Vec::new();
        let mut done = 0;

        while let Some((outcome, pages)) = pending.next().await {
            done += 1;
            if self.should_report(done, total) {
                info!(checked = done, total, "Checked {}/{} unique URLs", done, total);
            }

            if outcome.is_failure() {
                debug!(
                    url = %outcome.target,
                    status = ?outcome.status,
                    reason = %outcome.reason,
                    pages = pages.len(),
                    "broken link"
                );
                failures.extend(FailureRecord::fan_out(&outcome, pages));
            }
        }

        failures
    }

    fn should_report(&self, done: usize, total: usize) -> bool {
        done == total || (self.progress_interval > 0 && done % self.progress_interval == 0)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. FuturesUnordered vs buffer_unordered
//    - buffer_unordered(N) would also cap concurrency, but the slot would be
//      tied to the stream, not to the probe
//    - With a Semaphore the cap is an explicit permit that Prober::probe
//      takes by value, so it is visibly held for the whole retry sequence
//
// 2. Why `&self.prober` and not an Arc?
//    - The futures never leave this function, so they can borrow
//    - tokio::spawn would need 'static futures and Arc everywhere
// -----------------------------------------------------------------------------
