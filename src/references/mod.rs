// src/references/mod.rs
// =============================================================================
// Everything that happens before the network: finding documents, pulling
// links out of them, and deduplicating those links into a ReferenceMap.
//
// Submodules:
// - documents: lists and reads the input directory
// - html / markdown: per-format link extraction
// - aggregate: ReferenceMap, target -> referencing documents
// =============================================================================

mod aggregate;
mod documents;
mod html;
mod markdown;

pub use aggregate::{is_external, ReferenceMap};
pub use documents::{collect_documents, Document};
pub use html::extract_html_links;
pub use markdown::extract_markdown_links;
