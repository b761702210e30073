// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - config: CheckerConfig, the tuning knobs
// - transport: the Transport trait and its reqwest implementation
// - limits: per-host request limiting
// - probe: HEAD-then-GET check of one URL, with retries
// - coordinator: runs probes for every unique URL under a global cap
// - outcome: Outcome and FailureRecord
// =============================================================================

mod config;
mod coordinator;
mod limits;
mod outcome;
mod probe;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{
    CheckerConfig, DEFAULT_BACKOFF_SECS, DEFAULT_CONCURRENCY, DEFAULT_PER_HOST,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use coordinator::Coordinator;
pub use limits::HostLimiter;
pub use outcome::{FailureRecord, Outcome, FAILURE_THRESHOLD};
pub use probe::Prober;
pub use transport::{HttpTransport, ProbeMethod, Reply, Transport, TransportError};
