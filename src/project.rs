//! Project file discovery.

use std::path::{Component, Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::ScoutError;

/// Directory names that are never part of a project's own source.
pub const EXCLUDED_DIRS: &[&str] = &[".venv", "__pycache__", ".git", "node_modules"];

/// Collect every `.py` file under `root`, sorted by path.
///
/// Exclusions match exact directory names anywhere in the path, the part of
/// the path above `root` included: a root that itself sits inside `.venv`
/// yields nothing. A missing root is an error; a root that is not a
/// directory yields an empty list. Unreadable subtrees are skipped with a
/// warning rather than aborting the walk.
pub fn python_files(root: &Path) -> Result<Vec<PathBuf>, ScoutError> {
    if !root.exists() {
        return Err(ScoutError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && is_excluded_name(e.file_name().to_string_lossy().as_ref()))
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Only a walk that cannot even start is fatal.
                if err.depth() == 0 {
                    return Err(ScoutError::Walk(err));
                }
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }
        if has_excluded_component(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_excluded_name(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

fn has_excluded_component(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => EXCLUDED_DIRS.iter().any(|dir| name == *dir),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x = 1\n").unwrap();
    }

    #[test]
    fn test_finds_python_files_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.py"));
        touch(&dir.path().join("a.py"));
        touch(&dir.path().join("sub").join("c.py"));
        touch(&dir.path().join("notes.txt"));

        let files = python_files(dir.path()).unwrap();
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.py"),
                PathBuf::from("b.py"),
                PathBuf::from("sub/c.py"),
            ]
        );
    }

    #[test]
    fn test_skips_excluded_directories_at_any_depth() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("app.py"));
        touch(&dir.path().join(".venv").join("lib").join("site.py"));
        touch(&dir.path().join("__pycache__").join("app.py"));
        touch(&dir.path().join(".git").join("hooks").join("sample.py"));
        touch(&dir.path().join("node_modules").join("pkg").join("setup.py"));
        touch(&dir.path().join("src").join("__pycache__").join("deep.py"));

        let files = python_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.py"));
    }

    #[test]
    fn test_exclusion_matches_exact_names_only() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("venv").join("a.py"));
        touch(&dir.path().join("my__pycache__").join("b.py"));

        assert_eq!(python_files(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_root_inside_excluded_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".venv").join("project");
        touch(&root.join("app.py"));

        assert!(python_files(&root).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = python_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ScoutError::RootNotFound(_)));
    }

    #[test]
    fn test_non_directory_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.py");
        touch(&file);

        assert!(python_files(&file).unwrap().is_empty());
    }
}
