// src/checker/outcome.rs
// =============================================================================
// What a probe produces, and what the report is made of.
//
// - Outcome: the single final verdict for one unique URL
// - FailureRecord: one (page, url, status, reason) row, produced for every
//   page that referenced a failing URL
// =============================================================================

use serde::{Serialize, Serializer};

use super::transport::{Reply, TransportError};

/// Status codes from this value upward count as broken
pub const FAILURE_THRESHOLD: u16 = 400;

// The verdict for one target. Created once by the Prober, never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub target: String,
    /// HTTP status code, or None when no response was obtained at all
    pub status: Option<u16>,
    pub reason: String,
}

impl Outcome {
    pub fn new(target: &str, status: Option<u16>, reason: impl Into<String>) -> Self {
        Self {
            target: target.to_string(),
            status,
            reason: reason.into(),
        }
    }

    // A lightweight probe answered below the threshold
    pub(crate) fn reachable(target: &str, code: u16) -> Self {
        Self::new(target, Some(code), "OK")
    }

    // A definitive answer: use the server's reason, or a generic one by threshold
    pub(crate) fn from_reply(target: &str, reply: Reply) -> Self {
        let reason = reply.reason.unwrap_or_else(|| {
            if reply.status < FAILURE_THRESHOLD {
                "OK".to_string()
            } else {
                "Error".to_string()
            }
        });
        Self::new(target, Some(reply.status), reason)
    }

    // Every attempt ended in a transport failure; report the last one
    pub(crate) fn unreachable(target: &str, error: &TransportError) -> Self {
        Self::new(target, None, error.to_string())
    }

    // No attempt produced any signal
    pub(crate) fn indeterminate(target: &str) -> Self {
        Self::new(target, None, "Unknown error")
    }

    /// Broken means no status at all, or a status at or above 400
    pub fn is_failure(&self) -> bool {
        self.status.map_or(true, |code| code >= FAILURE_THRESHOLD)
    }
}

// One row of the report: a failing outcome seen from one referencing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub page: String,
    pub url: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: Option<u16>,
    pub reason: String,
}

impl FailureRecord {
    // Fans a failing outcome out to every page that referenced it.
    // Pages come out in sorted order; a healthy outcome yields nothing.
    pub fn fan_out<'a, I>(outcome: &Outcome, pages: I) -> Vec<FailureRecord>
    where
        I: IntoIterator<Item = &'a String>,
    {
        if !outcome.is_failure() {
            return Vec::new();
        }

        let mut pages: Vec<&String> = pages.into_iter().collect();
        pages.sort();

        pages
            .into_iter()
            .map(|page| FailureRecord {
                page: page.clone(),
                url: outcome.target.clone(),
                status: outcome.status,
                reason: outcome.reason.clone(),
            })
            .collect()
    }

    /// The status column as shown to people: the code, or "N/A"
    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "N/A".to_string(),
        }
    }
}

// Reports always show a missing status as "N/A", in CSV and JSON alike
fn serialize_status<S>(status: &Option<u16>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match status {
        Some(code) => serializer.serialize_u16(*code),
        None => serializer.serialize_str("N/A"),
    }
}
