//! Constants for file extensions and resolution probing.
//!
//! ## Source Extensions
//!
//! Only files ending in `.jsx`, `.js`, `.ts` or `.tsx` are scanned. The test
//! is a plain suffix match on the file name, so `types.d.ts` is scanned too.
//!
//! ## Probe Extensions
//!
//! When a relative import does not name an existing file, each probe
//! extension is appended to the normalized path in order. Extensions are
//! appended, never substituted: `./logo.min` probes `logo.min.svg`.

use std::path::Path;

/// Extensions (without the dot) of files that are scanned for imports
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "jsx", // JavaScript with JSX
    "js",  // JavaScript
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
];

/// Suffixes appended to an unresolved candidate path (in priority order)
pub const PROBE_EXTENSIONS: &[&str] =
    &[".jsx", ".js", ".ts", ".tsx", ".json", ".webp", ".png", ".jpg", ".svg"];

/// Returns true if the file name ends with one of [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(&format!(".{ext}")))
}
