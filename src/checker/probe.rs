// src/checker/probe.rs
// =============================================================================
// The probe engine: turns one URL into exactly one Outcome.
//
// Every attempt runs two phases:
// 1. HEAD (lightweight). A status below 400 settles it as OK. A 405 or any
//    transport failure moves on to phase 2. Any other status of 400 or more
//    settles it as a definitive failure, without retrying.
// 2. GET (fallback). Any status settles it. A transport failure starts the
//    next attempt after the backoff pause, or becomes the final outcome when
//    no attempts are left.
//
// The caller hands over a global concurrency slot; it stays held across all
// attempts and is released when probe() returns.
// =============================================================================

use std::time::Duration;

use tokio::sync::OwnedSemaphorePermit;
use tracing::debug;

use super::config::CheckerConfig;
use super::limits::HostLimiter;
use super::outcome::{Outcome, FAILURE_THRESHOLD};
use super::transport::{ProbeMethod, Reply, Transport, TransportError};

const METHOD_NOT_ALLOWED: u16 = 405;

// Result of the HEAD phase
#[derive(Debug, PartialEq, Eq)]
enum Lightweight {
    /// The answer is final
    Settled(Outcome),
    /// Go on to the GET phase within the same attempt
    Escalate,
}

pub struct Prober<T> {
    transport: T,
    hosts: HostLimiter,
    max_attempts: u32,
    backoff: Duration,
}

impl<T: Transport> Prober<T> {
    pub fn new(transport: T, config: &CheckerConfig) -> Self {
        Self {
            transport,
            hosts: HostLimiter::new(config.per_host),
            max_attempts: config.max_attempts(),
            backoff: config.backoff,
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Checks one target. Never fails: every failure mode is an Outcome.
    pub async fn probe(&self, target: &str, _slot: OwnedSemaphorePermit) -> Outcome {
        for attempt in 1..=self.max_attempts {
            let head = self.request(ProbeMethod::Head, target).await;
            if let Lightweight::Settled(outcome) = classify_lightweight(target, head) {
                return outcome;
            }

            match self.request(ProbeMethod::Get, target).await {
                Ok(reply) => return Outcome::from_reply(target, reply),
                Err(error) if attempt < self.max_attempts => {
                    debug!(url = %target, attempt, %error, "attempt failed, retrying");
                    tokio::time::sleep(self.backoff).await;
                }
                Err(error) => return Outcome::unreachable(target, &error),
            }
        }

        Outcome::indeterminate(target)
    }

    // One request, holding a slot on the target's host while it runs
    async fn request(&self, method: ProbeMethod, target: &str) -> Result<Reply, TransportError> {
        let _host_slot = self.hosts.acquire(target).await;
        self.transport.send(method, target).await
    }
}

fn classify_lightweight(target: &str, result: Result<Reply, TransportError>) -> Lightweight {
    match result {
        Ok(reply) if reply.status < FAILURE_THRESHOLD => {
            Lightweight::Settled(Outcome::reachable(target, reply.status))
        }
        // Some servers refuse HEAD; ask again with GET
        Ok(reply) if reply.status == METHOD_NOT_ALLOWED => Lightweight::Escalate,
        Ok(reply) => Lightweight::Settled(Outcome::from_reply(target, reply)),
        Err(_) => Lightweight::Escalate,
    }
}
