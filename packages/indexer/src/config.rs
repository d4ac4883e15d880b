//! Configuration constants and default path resolution.

use std::path::PathBuf;

use crate::error::{IndexerError, Result};

/// Arch document tree, relative to the home directory.
pub const DEFAULT_ARCH_DIR: &str = ".arch";

/// RAC repository checkout, relative to the home directory.
pub const DEFAULT_RAC_REPO_DIR: &str = "CosilicoAI/cosilico-us";

/// Default output location for the JSON index.
pub const DEFAULT_OUTPUT_PATH: &str = "data/documents.json";

/// Maximum length (in characters) of a title taken from a long-title
/// fallback field. Long titles in legislation XML can run to whole
/// paragraphs.
pub const LONG_TITLE_MAX_CHARS: usize = 100;

/// Namespace of UK legislation markup.
pub const UK_LEGISLATION_NS: &str = "http://www.legislation.gov.uk/namespaces/legislation";

/// Dublin Core metadata namespace, used for the UK title fallback.
pub const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Source tag for Canadian consolidated acts.
pub const SOURCE_CANADA: &str = "laws-lois";

/// Source tag for UK public general acts.
pub const SOURCE_UK: &str = "ukpga";

/// Source tag for state guidance PDFs.
pub const SOURCE_STATE: &str = "policyengine-us";

/// Source tag for RAC statute encodings.
pub const SOURCE_USC: &str = "usc";

/// File extensions recognized as RAC encodings.
pub const RAC_EXTENSIONS: [&str; 2] = ["rac", "cosilico"];

/// Default arch root: `~/.arch`.
pub fn default_arch_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_ARCH_DIR))
        .ok_or(IndexerError::NoHomeDir { flag: "arch-root" })
}

/// Default RAC repository root: `~/CosilicoAI/cosilico-us`.
pub fn default_rac_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_RAC_REPO_DIR))
        .ok_or(IndexerError::NoHomeDir { flag: "rac-root" })
}
