//! Core utilities for relcheck tools.
//!
//! This crate provides shared functionality for checking JavaScript/TypeScript
//! source trees, including:
//! - Collecting source files from a directory tree
//! - Extracting import-like statements from source lines
//! - Probing relative imports against the filesystem

mod collector;
mod constants;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_source_files};
pub use constants::{PROBE_EXTENSIONS, SOURCE_EXTENSIONS, is_source_file};
pub use parser::{imports_for, imports_in_line, imports_in_source};
pub use resolver::{ProbeCache, candidate_path, is_relative, resolve_relative};
pub use types::{ImportKind, ImportStatement};
