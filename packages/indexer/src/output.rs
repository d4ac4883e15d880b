//! JSON index writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IndexerError, Result};
use crate::types::DocumentIndex;

/// Write the index as pretty-printed JSON.
///
/// Parent directories are created if absent. Uses the atomic write
/// pattern: writes to a temp file, syncs to disk, then renames over the
/// target, so a crash never leaves a truncated index behind.
///
/// # Arguments
/// * `index` - The assembled index
/// * `output_path` - Destination file path
///
/// # Returns
/// The path the index was written to
pub fn save_index(index: &DocumentIndex, output_path: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(index)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_error(output_path, e))?;
        }
    }

    let temp_path = temp_path_for(output_path);
    {
        let mut file = File::create(&temp_path).map_err(|e| write_error(output_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| write_error(output_path, e))?;
        file.write_all(b"\n")
            .map_err(|e| write_error(output_path, e))?;
        file.sync_all().map_err(|e| write_error(output_path, e))?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path).map_err(|e| write_error(output_path, e))?;
    }

    fs::rename(&temp_path, output_path).map_err(|e| write_error(output_path, e))?;

    Ok(output_path.to_path_buf())
}

/// Dot-prefixed temp file next to the destination.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    path.with_file_name(format!(".{file_name}.tmp"))
}

fn write_error(path: &Path, source: std::io::Error) -> IndexerError {
    IndexerError::IndexWrite {
        path: path.to_path_buf(),
        source,
    }
}
