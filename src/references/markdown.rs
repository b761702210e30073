// src/references/markdown.rs
// =============================================================================
// Pulls link targets out of Markdown documents.
//
// We use the `pulldown-cmark` crate, a streaming CommonMark parser. Each
// link shows up as a Start(Tag::Link) event carrying its destination, so we
// only need to look at those events.
//
// Like the HTML extractor, this returns destinations verbatim. Filtering to
// external links happens in the aggregator.
// =============================================================================

use pulldown_cmark::{Event, Parser, Tag};

// Returns the destination of every link in the Markdown text
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org)!"
//
// Example output:
//   vec!["https://www.rust-lang.org"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    Parser::new(markdown)
        .filter_map(|event| match event {
            // In pulldown-cmark 0.9, Link is Tag::Link(link_type, dest_url, title)
            Event::Start(Tag::Link(_link_type, dest_url, _title)) if !dest_url.is_empty() => {
                Some(dest_url.to_string())
            }
            _ => None,
        })
        .collect()
}
