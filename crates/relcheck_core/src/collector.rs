use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::constants::is_source_file;

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Honor `.gitignore` and `.ignore` files while walking
    pub git_ignore: bool,
}

/// Walks `cfg.root` and returns every source file in walk order.
///
/// Entries are sorted by file name within each directory so repeated runs
/// over an unchanged tree visit files in the same order. Hidden entries are
/// visited, and nothing is pruned unless `git_ignore` is set.
pub fn collect_source_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .git_ignore(cfg.git_ignore)
        .ignore(cfg.git_ignore)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res.with_context(|| format!("Failed to walk {}", root.display()))?;
        let p = dent.path();
        // Anything that is not a directory is a candidate, including
        // dangling links, which then fail when read.
        if p.is_dir() {
            continue;
        }

        if is_source_file(p) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} source files", files.len());
    Ok(files)
}
