use serde::Serialize;
use std::{fmt, path::PathBuf};

/// A relative import that names no file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedImport {
    pub file_path: PathBuf,
    pub line_num: usize,
    pub import_target: String,
}

impl fmt::Display for UnresolvedImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: Failed to resolve '{}'",
            self.file_path.display(),
            self.line_num,
            self.import_target
        )
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// In walk order, then line order within a file
    pub errors: Vec<UnresolvedImport>,
    pub files_scanned: usize,
}
