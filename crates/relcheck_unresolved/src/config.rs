use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `file:line: Failed to resolve '...'` line per import
    Text,
    /// JSON array of records
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "unresolved")]
#[command(about = "Check that relative imports in JavaScript/TypeScript sources resolve to files")]
pub struct Config {
    /// Directory to scan
    #[arg(env = "RELCHECK_ROOT")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Skip paths listed in .gitignore and .ignore files
    #[arg(long)]
    pub git_ignore: bool,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long)]
    pub jobs: Option<usize>,
}

impl Config {
    /// Check that the scan root is an existing directory
    pub fn initialize(&self) -> Result<()> {
        debug!("Validating root directory: {:?}", self.root);
        if !self.root.exists() {
            bail!("Root directory does not exist: {}", self.root.display());
        }
        if !self.root.is_dir() {
            bail!("Root is not a directory: {}", self.root.display());
        }
        info!("Using root directory: {}", self.root.display());
        Ok(())
    }
}
