//! Scanners for the arch document tree: XML statute archives and PDF
//! guidance collections.
//!
//! Each sub-scanner is a no-op when its directory is missing; partial
//! archives are expected. Per-file extraction failures are absorbed at
//! the file level and never abort a scan.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::citation::{canada_citation, uk_citation};
use crate::config::{SOURCE_CANADA, SOURCE_STATE, SOURCE_UK};
use crate::error::Result;
use crate::titles::{extract_canada_title, extract_uk_title};
use crate::types::{DocumentFormat, DocumentRecord, DocumentType};

/// Scan the arch root for all documents.
pub fn scan_arch_tree(arch_root: &Path) -> Result<Vec<DocumentRecord>> {
    let mut documents = Vec::new();

    scan_canada(&arch_root.join("canada"), &mut documents)?;
    scan_uk(&arch_root.join("uk").join("ukpga"), &mut documents)?;
    scan_federal(&arch_root.join("federal"), &mut documents)?;
    scan_state(&arch_root.join(SOURCE_STATE), &mut documents)?;

    Ok(documents)
}

/// Canadian acts: a flat directory of XML files, one per act.
fn scan_canada(dir: &Path, documents: &mut Vec<DocumentRecord>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !has_extension(&path, "xml") {
            continue;
        }
        let Some(code) = file_stem(&path) else {
            continue;
        };

        let title = read_xml(&path).and_then(|xml| extract_canada_title(&xml));

        documents.push(DocumentRecord {
            id: format!("canada/{code}"),
            jurisdiction: "canada".to_string(),
            source: SOURCE_CANADA.to_string(),
            doc_type: DocumentType::Statute,
            format: DocumentFormat::Xml,
            title: title.unwrap_or_else(|| format!("Canada Act {code}")),
            arch_path: Some(path.display().to_string()),
            has_rac: false,
            rac_path: None,
            citation: Some(canada_citation(&code)),
            text: None,
            code: None,
        });
    }

    Ok(())
}

/// UK public general acts: year-numbered directories of XML files, one
/// per chapter.
fn scan_uk(dir: &Path, documents: &mut Vec<DocumentRecord>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for year_entry in fs::read_dir(dir)? {
        let year_dir = year_entry?.path();
        let Some(year) = dir_name(&year_dir) else {
            continue;
        };
        if !year_dir.is_dir() || !is_all_digits(&year) {
            continue;
        }

        for entry in fs::read_dir(&year_dir)? {
            let path = entry?.path();
            if !path.is_file() || !has_extension(&path, "xml") {
                continue;
            }
            let Some(chapter) = file_stem(&path) else {
                continue;
            };

            let title = read_xml(&path).and_then(|xml| extract_uk_title(&xml));

            documents.push(DocumentRecord {
                id: format!("uk/ukpga/{year}/{chapter}"),
                jurisdiction: "uk".to_string(),
                source: SOURCE_UK.to_string(),
                doc_type: DocumentType::Statute,
                format: DocumentFormat::Xml,
                title: title.unwrap_or_else(|| format!("UK Act {year} c.{chapter}")),
                arch_path: Some(path.display().to_string()),
                has_rac: false,
                rac_path: None,
                citation: Some(uk_citation(&year, &chapter)),
                text: None,
                code: None,
            });
        }
    }

    Ok(())
}

/// Federal guidance: agency directories holding PDFs at any depth.
fn scan_federal(dir: &Path, documents: &mut Vec<DocumentRecord>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for agency_entry in fs::read_dir(dir)? {
        let agency_dir = agency_entry?.path();
        if !agency_dir.is_dir() {
            continue;
        }
        let Some(agency) = dir_name(&agency_dir) else {
            continue;
        };

        for entry in WalkDir::new(&agency_dir) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, "pdf") {
                continue;
            }
            let Some(stem) = file_stem(path) else {
                continue;
            };

            documents.push(DocumentRecord {
                id: format!("federal/{}", relative_id(path, dir)),
                jurisdiction: "us".to_string(),
                source: agency.clone(),
                doc_type: DocumentType::Guidance,
                format: DocumentFormat::Pdf,
                title: title_from_stem(&stem),
                arch_path: Some(path.display().to_string()),
                has_rac: false,
                rac_path: None,
                citation: None,
                text: None,
                code: None,
            });
        }
    }

    Ok(())
}

/// State guidance: two-letter state directories of PDFs, flat.
fn scan_state(dir: &Path, documents: &mut Vec<DocumentRecord>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for state_entry in fs::read_dir(dir)? {
        let state_dir = state_entry?.path();
        if !state_dir.is_dir() {
            continue;
        }
        let Some(state) = dir_name(&state_dir) else {
            continue;
        };
        if state.chars().count() != 2 {
            continue;
        }

        for entry in fs::read_dir(&state_dir)? {
            let path = entry?.path();
            if !path.is_file() || !has_extension(&path, "pdf") {
                continue;
            }
            let Some(stem) = file_stem(&path) else {
                continue;
            };

            documents.push(DocumentRecord {
                id: format!("state/{state}/{stem}"),
                jurisdiction: format!("us-{state}"),
                source: SOURCE_STATE.to_string(),
                doc_type: DocumentType::Guidance,
                format: DocumentFormat::Pdf,
                title: title_from_stem(&stem),
                arch_path: Some(path.display().to_string()),
                has_rac: false,
                rac_path: None,
                citation: None,
                text: None,
                code: None,
            });
        }
    }

    Ok(())
}

/// Read an XML file, absorbing failures so one bad file never aborts the
/// scan of its siblings.
fn read_xml(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(xml) => Some(xml),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read XML file");
            None
        }
    }
}

/// Derive a display title from a file stem: separator characters become
/// spaces and each alphabetic run is capitalized.
fn title_from_stem(stem: &str) -> String {
    let spaced = stem.replace(['_', '-'], " ");
    let mut title = String::with_capacity(spaced.len());
    let mut prev_alphabetic = false;

    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                title.extend(ch.to_lowercase());
            } else {
                title.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            title.push(ch);
            prev_alphabetic = false;
        }
    }

    title
}

/// Relative path with the extension stripped, rendered with `/`
/// separators regardless of platform.
fn relative_id(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|s| s.to_string_lossy().into_owned())
}

fn is_all_digits(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_digit())
}
