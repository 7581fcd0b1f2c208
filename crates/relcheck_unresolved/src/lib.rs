//! Unresolved relative import detection for JavaScript/TypeScript projects.
//!
//! This crate walks a source tree, extracts import-like statements with a
//! line-based pattern, and reports every relative import (one starting with
//! `.`) that does not name an existing file, either directly or with one of
//! the probe extensions appended.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use relcheck_unresolved::{Config, OutputFormat, run_unresolved_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/project/src"),
//!     format: OutputFormat::Text,
//!     git_ignore: false,
//!     jobs: None,
//! };
//!
//! let result = run_unresolved_check(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! relcheck_unresolved::print_report(&mut stdout, &result.errors)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::{run_unresolved_check, scan, scan_file};
pub use config::{Config, OutputFormat};
pub use reporter::{print_json_report, print_report};
pub use types::{CheckResult, UnresolvedImport};
