use anyhow::{Context, Result};
use log::{debug, info, trace};
use rayon::prelude::*;
use std::{path::Path, thread};

use relcheck_core::{
    CollectorConfig, ProbeCache, collect_source_files, imports_for, is_relative,
    resolve_relative,
};

use crate::{
    config::Config,
    types::{CheckResult, UnresolvedImport},
};

pub fn run_unresolved_check(cfg: Config) -> Result<CheckResult> {
    info!("Starting unresolved import check");

    cfg.initialize()?;

    let collector_cfg = CollectorConfig { root: cfg.root.clone(), git_ignore: cfg.git_ignore };
    let result = scan(&collector_cfg)?;

    info!("Unresolved import check complete. Found {} errors", result.errors.len());
    Ok(result)
}

/// Scans every source file under `cfg.root`.
///
/// Files are scanned in parallel but the indexed collect keeps walk order,
/// so the records come out in file order and then line order. The first file
/// that cannot be read aborts the scan.
pub fn scan(cfg: &CollectorConfig) -> Result<CheckResult> {
    let files = collect_source_files(cfg)?;
    info!("Found {} source files", files.len());

    let probe_cache = ProbeCache::new();

    let per_file: Vec<Vec<UnresolvedImport>> = files
        .par_iter()
        .map(|file| {
            debug!("Thread {:?} processing: {}", thread::current().id(), file.display());
            scan_file(file, &probe_cache)
        })
        .collect::<Result<_>>()?;

    debug!("Probe cache holds {} candidates", probe_cache.len());

    Ok(CheckResult { errors: per_file.into_iter().flatten().collect(), files_scanned: files.len() })
}

/// Returns one record per relative import in `file` that does not resolve.
pub fn scan_file(file: &Path, cache: &ProbeCache) -> Result<Vec<UnresolvedImport>> {
    let specs = imports_for(file).with_context(|| format!("Failed to scan {}", file.display()))?;

    let mut errors = Vec::new();
    for spec in specs {
        if !is_relative(&spec.request) {
            trace!("Skipping non-relative import '{}'", spec.request);
            continue;
        }

        if resolve_relative(file, &spec.request, cache).is_none() {
            debug!(
                "Unresolved {:?} '{}' at {}:{}",
                spec.kind,
                spec.request,
                file.display(),
                spec.line
            );
            errors.push(UnresolvedImport {
                file_path: file.to_path_buf(),
                line_num: spec.line,
                import_target: spec.request,
            });
        }
    }
    Ok(errors)
}
