// src/references/aggregate.rs
// =============================================================================
// Deduplicates link targets across documents.
//
// The result, ReferenceMap, maps each external URL to the set of documents
// that reference it. Every URL is probed once no matter how many documents
// point at it; the set is used afterwards to fan the outcome back out.
//
// BTreeMap/BTreeSet keep iteration order stable from run to run.
// =============================================================================

use std::collections::{BTreeMap, BTreeSet};

use super::documents::Document;

// True for http:// and https:// URLs, the only ones we check
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceMap {
    targets: BTreeMap<String, BTreeSet<String>>,
    /// External references seen, duplicates included
    total_references: usize,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from already-extracted documents
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut map = Self::new();
        for document in documents {
            for reference in &document.references {
                map.add(&document.id, reference);
            }
        }
        map
    }

    // Records that `document` references `reference`.
    // Returns false (and records nothing) for non-external references.
    pub fn add(&mut self, document: &str, reference: &str) -> bool {
        if !is_external(reference) {
            return false;
        }

        self.total_references += 1;
        self.targets
            .entry(reference.to_string())
            .or_default()
            .insert(document.to_string());
        true
    }

    /// Number of unique targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn total_references(&self) -> usize {
        self.total_references
    }

    /// Documents referencing `target`, if any
    #[cfg(test)]
    pub(crate) fn pages(&self, target: &str) -> Option<&BTreeSet<String>> {
        self.targets.get(target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.targets.iter()
    }
}
