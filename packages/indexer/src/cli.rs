//! Command-line interface for the indexer.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::arch::scan_arch_tree;
use crate::config::{default_arch_root, default_rac_root, DEFAULT_OUTPUT_PATH};
use crate::error::Result;
use crate::index::assemble;
use crate::output::save_index;
use crate::rac::scan_rac_tree;

/// Archview indexer - Build a unified index of arch documents and RAC encodings.
#[derive(Parser)]
#[command(name = "archview-indexer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the source trees and write the JSON index.
    Build {
        /// Arch root directory (default: ~/.arch)
        #[arg(long)]
        arch_root: Option<PathBuf>,

        /// RAC repository root (default: ~/CosilicoAI/cosilico-us)
        #[arg(long)]
        rac_root: Option<PathBuf>,

        /// Output JSON file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Include full text/code content for non-RAC formats (increases file size)
        #[arg(long)]
        include_content: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            arch_root,
            rac_root,
            output,
            include_content,
        } => build_command(arch_root, rac_root, &output, include_content),
    }
}

/// Execute the build command.
fn build_command(
    arch_root: Option<PathBuf>,
    rac_root: Option<PathBuf>,
    output: &Path,
    include_content: bool,
) -> Result<()> {
    let arch_root = match arch_root {
        Some(path) => path,
        None => default_arch_root()?,
    };
    let rac_root = match rac_root {
        Some(path) => path,
        None => default_rac_root()?,
    };

    println!(
        "{} {}",
        style("Scanning arch directory:").bold(),
        style(arch_root.display()).cyan()
    );
    let arch_documents = scan_arch_tree(&arch_root)?;
    println!(
        "  Found {} arch documents",
        style(arch_documents.len()).green()
    );

    println!(
        "{} {}",
        style("Scanning RAC files:").bold(),
        style(rac_root.display()).cyan()
    );
    let rac_documents = scan_rac_tree(&rac_root)?;
    println!(
        "  Found {} RAC encodings",
        style(rac_documents.len()).green()
    );

    let mut documents = arch_documents;
    documents.extend(rac_documents);

    let index = assemble(documents, include_content);
    let output_path = save_index(&index, output)?;

    println!();
    println!(
        "{} {}",
        style("Wrote index to:").green().bold(),
        output_path.display()
    );
    println!("  Total documents: {}", index.count);
    println!(
        "  Stats: canada={} uk={} us_federal={} us_state={} rac_encoded={}",
        index.stats.canada,
        index.stats.uk,
        index.stats.us_federal,
        index.stats.us_state,
        index.stats.rac_encoded
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build_defaults() {
        let cli = Cli::parse_from(["archview-indexer", "build"]);

        let Commands::Build {
            arch_root,
            rac_root,
            output,
            include_content,
        } = cli.command;
        assert!(arch_root.is_none());
        assert!(rac_root.is_none());
        assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!include_content);
    }

    #[test]
    fn test_cli_parse_build_with_flags() {
        let cli = Cli::parse_from([
            "archview-indexer",
            "build",
            "--arch-root",
            "/data/arch",
            "--rac-root",
            "/data/cosilico-us",
            "--output",
            "/tmp/index.json",
            "--include-content",
        ]);

        let Commands::Build {
            arch_root,
            rac_root,
            output,
            include_content,
        } = cli.command;
        assert_eq!(arch_root, Some(PathBuf::from("/data/arch")));
        assert_eq!(rac_root, Some(PathBuf::from("/data/cosilico-us")));
        assert_eq!(output, PathBuf::from("/tmp/index.json"));
        assert!(include_content);
    }
}
