// src/references/html.rs
// =============================================================================
// Pulls link targets out of HTML documents.
//
// We use the `scraper` crate, which parses HTML into a DOM and lets us
// query it with CSS selectors.
//
// Every href of every <a> element is returned as written, in document
// order. Nothing is resolved against a base URL: relative links stay
// relative, and the aggregator later drops everything that isn't http(s).
// =============================================================================

use scraper::{Html, Selector};

// Returns the raw href values of all <a> elements
//
// Example:
//   html = "<a href='/docs'>Docs</a> <a href='https://rust-lang.org'>Rust</a>"
//   result = ["/docs", "https://rust-lang.org"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing it cannot fail at runtime
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}
