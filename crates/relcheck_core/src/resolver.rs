use dashmap::DashMap;
use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::PROBE_EXTENSIONS;

/// Probe outcomes keyed by normalized candidate path. Lives for one run.
pub type ProbeCache = DashMap<PathBuf, Option<PathBuf>>;

/// Relative references start with `.` (`./x`, `../x`, and also `.x`).
pub fn is_relative(request: &str) -> bool {
    request.starts_with('.')
}

/// Joins `request` onto the directory containing `from_file` and collapses
/// `.`/`..` segments lexically.
pub fn candidate_path(from_file: &Path, request: &str) -> PathBuf {
    let base = from_file.parent().unwrap_or_else(|| Path::new("."));
    clean(base.join(request))
}

/// Resolves a relative import to an existing regular file.
///
/// Tries the candidate path itself, then the candidate with each of
/// [`PROBE_EXTENSIONS`] appended. Directories never resolve, there is no
/// `index.*` lookup.
pub fn resolve_relative(from_file: &Path, request: &str, cache: &ProbeCache) -> Option<PathBuf> {
    let candidate = candidate_path(from_file, request);
    if let Some(v) = cache.get(&candidate) {
        trace!("Cache hit for probe: {}", candidate.display());
        return v.clone();
    }
    trace!("Resolving: '{}' from {}", request, from_file.display());

    let resolved = probe(&candidate);
    match &resolved {
        Some(p) => trace!("Resolved '{}' to {}", request, p.display()),
        None => trace!("Failed to resolve '{}'", request),
    }
    cache.insert(candidate, resolved.clone());
    resolved
}

fn probe(candidate: &Path) -> Option<PathBuf> {
    // Try exact path first
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }

    PROBE_EXTENSIONS.iter().map(|ext| with_suffix(candidate, ext)).find(|p| p.is_file())
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_is_relative() {
        assert!(is_relative("./foo"));
        assert!(is_relative("../bar"));
        assert!(is_relative(".hidden"));
        assert!(!is_relative("react"));
        assert!(!is_relative("@scope/pkg"));
        assert!(!is_relative("/abs/path"));
    }

    #[test]
    fn test_candidate_path_normalizes() {
        let from = Path::new("src/pages/Home.jsx");
        assert_eq!(candidate_path(from, "./Hero"), PathBuf::from("src/pages/Hero"));
        assert_eq!(candidate_path(from, "../lib/./api"), PathBuf::from("src/lib/api"));
        assert_eq!(candidate_path(from, "../../x"), PathBuf::from("x"));
    }

    #[test]
    fn test_resolves_exact_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        let target = create_test_file(root, "src/logo.svg", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./logo.svg", &cache), Some(target));
    }

    #[test]
    fn test_resolves_with_probe_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        let target = create_test_file(root, "src/b.json", "{}");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./b", &cache), Some(target));
    }

    #[test]
    fn test_probe_order_prefers_earlier_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        create_test_file(root, "src/b.ts", "");
        let jsx = create_test_file(root, "src/b.jsx", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./b", &cache), Some(jsx));
    }

    #[test]
    fn test_resolves_parent_directory_reference() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/pages/Home.tsx", "");
        let target = create_test_file(root, "src/assets/banner.webp", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "../assets/banner", &cache), Some(target));
    }

    #[test]
    fn test_extension_is_appended_not_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        create_test_file(root, "src/icon.png", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./icon.jpg", &cache), None);
    }

    #[test]
    fn test_directory_does_not_resolve() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        create_test_file(root, "src/components/index.js", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./components", &cache), None);
    }

    #[test]
    fn test_unlisted_extension_does_not_resolve() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        create_test_file(root, "src/styles.css", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./styles", &cache), None);
    }

    #[test]
    fn test_cache_behavior() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let from = create_test_file(root, "src/a.js", "");
        let other = create_test_file(root, "src/nested/c.js", "");
        let cache = ProbeCache::new();

        assert_eq!(resolve_relative(&from, "./missing", &cache), None);
        assert_eq!(resolve_relative(&other, "../missing", &cache), None);
        // Same candidate from two importers is probed once
        assert_eq!(cache.len(), 1);
    }
}
