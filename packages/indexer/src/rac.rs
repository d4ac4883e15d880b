//! RAC encoding support: tolerant field extraction and the RAC tree
//! scanner.
//!
//! RAC files are treated as semi-structured text, not as a language with a
//! formal grammar. Field extraction runs two independent pattern scans
//! that each fail soft, so a malformed `label` never blocks `text`
//! extraction and vice versa. If the RAC grammar is formalized later this
//! should become a proper parser.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

use crate::citation::usc_citation;
use crate::config::{RAC_EXTENSIONS, SOURCE_USC};
use crate::error::Result;
use crate::types::{DocumentFormat, DocumentRecord, DocumentType};

/// Quoted `label:` value; single and double quotes both accepted.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"label:\s*["']([^"']+)["']"#).expect("valid regex"));

/// Triple-double-quoted `text:` block.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TEXT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"text:\s*"""([^"]*)""""#).expect("valid regex"));

/// Display fields pulled out of one RAC file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RacFields {
    /// Display label, when a well-formed `label:` entry exists.
    pub label: Option<String>,

    /// Statutory text block, trimmed; empty when absent.
    pub text: String,
}

/// Extract the display fields from raw RAC content.
///
/// The two scans are order-independent and either field may be missing or
/// malformed without affecting the other.
#[must_use]
pub fn extract_fields(content: &str) -> RacFields {
    let label = LABEL_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let text = TEXT_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    RacFields { label, text }
}

/// Scan a RAC repository checkout for statute encodings.
///
/// Walks `<root>/statute` recursively. A missing root yields no records;
/// unreadable files are logged and skipped so one bad file never hides its
/// siblings. Enumeration failures inside an existing tree are fatal.
pub fn scan_rac_tree(rac_root: &Path) -> Result<Vec<DocumentRecord>> {
    let statute_dir = rac_root.join("statute");
    let mut documents = Vec::new();

    if !statute_dir.exists() {
        return Ok(documents);
    }

    for entry in WalkDir::new(&statute_dir) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_rac_extension(path) {
            continue;
        }

        let segments = path_segments(path, &statute_dir);
        let citation = usc_citation(&segments);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable RAC file");
                continue;
            }
        };

        let fields = extract_fields(&content);
        let title = fields
            .label
            .unwrap_or_else(|| format!("Section {citation}"));

        documents.push(DocumentRecord {
            id: format!("us/{}", segments.join("/")),
            jurisdiction: "us".to_string(),
            source: SOURCE_USC.to_string(),
            doc_type: DocumentType::Statute,
            format: DocumentFormat::Rac,
            title,
            arch_path: None,
            has_rac: true,
            rac_path: Some(path.display().to_string()),
            citation: Some(citation),
            text: Some(fields.text),
            code: Some(content),
        });
    }

    Ok(documents)
}

/// Extension-stripped path segments relative to the statute root.
fn path_segments(path: &Path, root: &Path) -> Vec<String> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

fn has_rac_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| RAC_EXTENSIONS.contains(&ext))
}
