//! Discovery of model containers under an input root.
//! Uses `walkdir` for recursive traversal.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::MODEL_EXTENSION;

/// Paths containing this marker belong to the IDE's managed cache and
/// are skipped during discovery.
pub const CACHE_DIR_MARKER: &str = ".mendix-cache";

/// Recursively collect every model container under `input_root`, in
/// walk order. Unreadable entries are logged and skipped.
pub fn find_model_files(input_root: &Path) -> Vec<PathBuf> {
    let mut models = Vec::new();

    for entry in WalkDir::new(input_root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.to_string_lossy().contains(CACHE_DIR_MARKER) {
            log::debug!("Skipping system managed file {}", path.display());
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if extension == MODEL_EXTENSION {
            models.push(path.to_path_buf());
        }
    }

    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_model_files_recursively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("App.mpr"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("Other.mpr"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let models = find_model_files(dir.path());

        assert_eq!(models.len(), 2);
        assert!(models.iter().any(|p| p.ends_with("App.mpr")));
        assert!(models.iter().any(|p| p.ends_with("Other.mpr")));
    }

    #[test]
    fn test_skips_cache_directories() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join(".mendix-cache");
        fs::create_dir(&cache).unwrap();
        fs::write(cache.join("App.mpr"), "x").unwrap();
        fs::write(dir.path().join("Real.mpr"), "x").unwrap();

        let models = find_model_files(dir.path());

        assert_eq!(models.len(), 1);
        assert!(models[0].ends_with("Real.mpr"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Upper.MPR"), "x").unwrap();

        let models = find_model_files(dir.path());
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn test_empty_for_missing_root() {
        let models = find_model_files(Path::new("/nonexistent/input/root"));
        assert!(models.is_empty());
    }
}
