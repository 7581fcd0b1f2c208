use anyhow::{Context, Result};
use log::trace;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::types::{ImportKind, ImportStatement};

// Line-based and deliberately loose: matches inside comments and string
// literals as well, and does not see `require('./x')` call syntax.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(import|from|require)\s+['"]([^'"]+)['"]"#).expect("import pattern is valid")
});

// `\r\n`, a lone `\r` and `\n` all end a line.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Extracts every import-like reference on one line, left to right.
pub fn imports_in_line(line: &str, line_num: usize) -> Vec<ImportStatement> {
    IMPORT_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let kind = ImportKind::from_keyword(caps.get(1)?.as_str())?;
            let request = caps.get(2)?.as_str().to_string();
            Some(ImportStatement { request, line: line_num, kind })
        })
        .collect()
}

pub fn imports_in_source(src: &str) -> Vec<ImportStatement> {
    LINE_BREAK
        .split(src)
        .enumerate()
        .flat_map(|(idx, line)| imports_in_line(line, idx + 1))
        .collect()
}

/// Reads `file` as UTF-8 and extracts its import-like references.
pub fn imports_for(file: &Path) -> Result<Vec<ImportStatement>> {
    trace!("Scanning file for imports: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let specs = imports_in_source(&src);
    trace!("Found {} import statements in {}", specs.len(), file.display());
    Ok(specs)
}
