//! Matching file watcher events against the scenario being viewed

use std::path::{Path, PathBuf};

/// Absolute, symlink-free form of `path` for comparing against watcher
/// events. A file that no longer exists is resolved through its parent
/// directory; if that fails too the path is returned unchanged.
pub fn canonical_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (std::fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Whether a path reported by the watcher refers to `watched`, which must
/// already be canonical
pub fn is_watched(event_path: &Path, watched: &Path) -> bool {
    canonical_path(event_path) == watched
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gravsim-watch-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("sub")).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_dot_prefixed_path_matches_absolute_event() {
        let dir = scratch_dir("dot");
        let file = dir.join("sun_earth.json");
        fs::write(&file, "{}").expect("write scenario");

        let watched = canonical_path(&dir.join(".").join("sun_earth.json"));
        assert!(is_watched(&file, &watched));
        assert!(is_watched(&dir.join("sub").join("..").join("sun_earth.json"), &watched));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_relative_path_matches_absolute_event() {
        // cargo runs tests from the package root
        let watched = canonical_path(Path::new("./Cargo.toml"));
        let event = std::env::current_dir().expect("cwd").join("Cargo.toml");
        assert!(is_watched(&event, &watched));
    }

    #[test]
    fn test_other_file_does_not_match() {
        let dir = scratch_dir("other");
        let file = dir.join("a.json");
        let other = dir.join("b.json");
        fs::write(&file, "{}").expect("write scenario");
        fs::write(&other, "{}").expect("write scenario");

        let watched = canonical_path(&file);
        assert!(!is_watched(&other, &watched));
        assert!(!is_watched(&dir.join("sub").join("a.json"), &watched));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_removed_file_resolves_through_parent() {
        let dir = scratch_dir("removed");
        let watched = canonical_path(&dir.join(".").join("gone.json"));
        assert!(is_watched(&dir.join("gone.json"), &watched));
        assert_eq!(watched.file_name(), Some(std::ffi::OsStr::new("gone.json")));

        fs::remove_dir_all(&dir).ok();
    }
}
