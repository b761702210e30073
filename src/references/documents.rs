// src/references/documents.rs
// =============================================================================
// Finds the documents to scan and reads their links.
//
// Strategy:
// - List the input directory with `glob` (`*` or, when recursive, `**/*`)
// - Keep HTML (.html, .htm) and Markdown (.md) files
// - Read each one and run the matching extractor
//
// A document is identified by its path relative to the input directory,
// with `/` separators. Documents come back sorted by that identifier.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use super::html::extract_html_links;
use super::markdown::extract_markdown_links;

// One scanned document and every raw link target found in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Html,
    Markdown,
}

impl DocumentKind {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "html" | "htm" => Some(DocumentKind::Html),
            "md" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    fn extract(self, content: &str) -> Vec<String> {
        match self {
            DocumentKind::Html => extract_html_links(content),
            DocumentKind::Markdown => extract_markdown_links(content),
        }
    }
}

// Reads every supported document under `dir`
//
// Errors only when the directory itself can't be used. A single unreadable
// document is logged and skipped.
pub fn collect_documents(dir: &Path, recursive: bool) -> Result<Vec<Document>> {
    let metadata = fs::metadata(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let mut documents = Vec::new();
    for path in list_candidates(dir, recursive)? {
        let Some(kind) = DocumentKind::from_path(&path) else {
            continue;
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };

        let id = document_id(dir, &path);
        let references = kind.extract(&content);
        debug!(document = %id, links = references.len(), "scanned document");

        documents.push(Document { id, references });
    }

    documents.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(documents)
}

// All regular files matching the directory pattern
fn list_candidates(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = if recursive {
        format!("{}/**/*", base)
    } else {
        format!("{}/*", base)
    };

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid pattern: {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "skipping unreadable entry"),
        }
    }
    Ok(paths)
}

fn document_id(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
