//! Core data types for the document index.
//!
//! Every scanner produces [`DocumentRecord`] values; the assembler folds
//! them into a [`DocumentIndex`]. Fields that do not apply to a record's
//! format stay `None` and serialize as explicit `null` so consumers can
//! rely on key presence.

use serde::Serialize;

/// Document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Enacted statutory text.
    Statute,

    /// Agency or state guidance.
    Guidance,
}

impl DocumentType {
    /// Get the string value used in the JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statute => "statute",
            Self::Guidance => "guidance",
        }
    }
}

/// On-disk representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Legislation XML (Canada, UK).
    Xml,

    /// Guidance PDF; no content extraction is performed.
    Pdf,

    /// RAC statutory encoding.
    Rac,
}

impl DocumentFormat {
    /// Get the string value used in the JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Pdf => "pdf",
            Self::Rac => "rac",
        }
    }
}

/// Normalized per-document record, one per scanned file.
///
/// Exactly one of `arch_path` / `rac_path` is set, determined by the
/// format. `text` and `code` are only ever populated for RAC records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Unique identifier within a source category, built from the
    /// source-specific path pattern (e.g. `uk/ukpga/2002/21`).
    pub id: String,

    /// Jurisdiction tag: `canada`, `uk`, `us`, or `us-XX` for states.
    pub jurisdiction: String,

    /// Originating archive or agency.
    pub source: String,

    /// Document category.
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// On-disk format.
    pub format: DocumentFormat,

    /// Human-readable title; never empty. Falls back to a synthesized
    /// placeholder when no title is extractable.
    pub title: String,

    /// Absolute path into the arch tree (XML and PDF records).
    #[serde(rename = "archPath")]
    pub arch_path: Option<String>,

    /// Whether this record is a RAC encoding.
    #[serde(rename = "hasRac")]
    pub has_rac: bool,

    /// Absolute path to the RAC file (RAC records).
    #[serde(rename = "racPath")]
    pub rac_path: Option<String>,

    /// Human-readable legal citation (statute records).
    pub citation: Option<String>,

    /// Extracted statutory text block (RAC records).
    pub text: Option<String>,

    /// Full encoding source (RAC records).
    pub code: Option<String>,
}

impl DocumentRecord {
    /// Sort key used by the assembler: (jurisdiction, id), both compared
    /// as case-sensitive strings.
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.jurisdiction, &self.id)
    }
}

/// Aggregate counts over the final record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Records with jurisdiction `canada`.
    pub canada: usize,

    /// Records with jurisdiction `uk`.
    pub uk: usize,

    /// Records with jurisdiction `us`, excluding the state guidance source.
    pub us_federal: usize,

    /// Records with a `us-` prefixed state jurisdiction.
    pub us_state: usize,

    /// Records carrying a RAC encoding.
    pub rac_encoded: usize,
}

/// Root output structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentIndex {
    /// Generation timestamp (UTC, ISO-8601).
    pub generated: String,

    /// Total record count.
    pub count: usize,

    /// Aggregate statistics.
    pub stats: IndexStats,

    /// Records sorted ascending by (jurisdiction, id).
    pub documents: Vec<DocumentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DocumentRecord {
        DocumentRecord {
            id: "canada/I-3.3".to_string(),
            jurisdiction: "canada".to_string(),
            source: "laws-lois".to_string(),
            doc_type: DocumentType::Statute,
            format: DocumentFormat::Xml,
            title: "Income Tax Act".to_string(),
            arch_path: Some("/home/user/.arch/canada/I-3.3.xml".to_string()),
            has_rac: false,
            rac_path: None,
            citation: Some("RSC I-3.3".to_string()),
            text: None,
            code: None,
        }
    }

    #[test]
    fn test_document_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentType::Statute).unwrap(),
            "\"statute\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::Guidance).unwrap(),
            "\"guidance\""
        );
    }

    #[test]
    fn test_document_format_serialization() {
        assert_eq!(serde_json::to_string(&DocumentFormat::Xml).unwrap(), "\"xml\"");
        assert_eq!(serde_json::to_string(&DocumentFormat::Pdf).unwrap(), "\"pdf\"");
        assert_eq!(serde_json::to_string(&DocumentFormat::Rac).unwrap(), "\"rac\"");
    }

    #[test]
    fn test_as_str_matches_serialization() {
        assert_eq!(DocumentType::Statute.as_str(), "statute");
        assert_eq!(DocumentFormat::Rac.as_str(), "rac");
    }

    #[test]
    fn test_record_serializes_all_keys() {
        let json = serde_json::to_value(sample_record()).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "id",
            "jurisdiction",
            "source",
            "type",
            "format",
            "title",
            "archPath",
            "hasRac",
            "racPath",
            "citation",
            "text",
            "code",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 12);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert!(json["racPath"].is_null());
        assert!(json["text"].is_null());
        assert!(json["code"].is_null());
        assert_eq!(json["archPath"], "/home/user/.arch/canada/I-3.3.xml");
    }

    #[test]
    fn test_sort_key() {
        let record = sample_record();
        assert_eq!(record.sort_key(), ("canada", "canada/I-3.3"));
    }
}
