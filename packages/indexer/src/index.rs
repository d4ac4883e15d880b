//! Index assembly: ordering, content stripping, and aggregate statistics.

use chrono::{SecondsFormat, Utc};

use crate::config::SOURCE_STATE;
use crate::types::{DocumentFormat, DocumentIndex, DocumentRecord, IndexStats};

/// Assemble the final index from the concatenated scanner outputs.
///
/// Records are sorted ascending by (jurisdiction, id); the sort is stable,
/// so duplicate identifiers keep their scanner order. Unless
/// `include_content` is set, `text` and `code` are cleared on every
/// non-RAC record. RAC records always keep their extracted content; it is
/// integral to the record rather than optional bulk payload.
#[must_use]
pub fn assemble(mut documents: Vec<DocumentRecord>, include_content: bool) -> DocumentIndex {
    documents.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    if !include_content {
        for document in &mut documents {
            if document.format != DocumentFormat::Rac {
                document.text = None;
                document.code = None;
            }
        }
    }

    let stats = compute_stats(&documents);

    DocumentIndex {
        generated: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        count: documents.len(),
        stats,
        documents,
    }
}

/// Aggregate counts per jurisdiction category plus RAC coverage.
fn compute_stats(documents: &[DocumentRecord]) -> IndexStats {
    IndexStats {
        canada: documents
            .iter()
            .filter(|d| d.jurisdiction == "canada")
            .count(),
        uk: documents.iter().filter(|d| d.jurisdiction == "uk").count(),
        us_federal: documents
            .iter()
            .filter(|d| d.jurisdiction == "us" && d.source != SOURCE_STATE)
            .count(),
        us_state: documents
            .iter()
            .filter(|d| d.jurisdiction.starts_with("us-"))
            .count(),
        rac_encoded: documents.iter().filter(|d| d.has_rac).count(),
    }
}
