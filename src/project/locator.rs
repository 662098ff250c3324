//! Workspace/project discovery
//!
//! Scans a single directory level for `.xcworkspace` and `.xcodeproj`
//! bundles. Both are directories on disk, so discovery matches on the
//! entry extension without checking the entry type.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension of a workspace bundle
pub const WORKSPACE_EXTENSION: &str = "xcworkspace";

/// Extension of a project bundle
pub const PROJECT_EXTENSION: &str = "xcodeproj";

/// Result of a directory scan: at most one entry of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub workspace: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

impl Discovered {
    pub fn is_empty(&self) -> bool {
        self.workspace.is_none() && self.project.is_none()
    }
}

/// Scans `directory` (non-recursive) for workspace and project bundles.
///
/// Returns the first entry of each kind in enumeration order; when
/// several candidates exist the filesystem decides which one wins, so
/// callers must not depend on the choice.
pub fn locate(directory: &Path) -> io::Result<Discovered> {
    debug!(
        directory = %directory.display(),
        "Looking for .xcworkspace or .xcodeproj"
    );

    let mut discovered = Discovered::default();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(WORKSPACE_EXTENSION) if discovered.workspace.is_none() => {
                discovered.workspace = Some(path);
            }
            Some(PROJECT_EXTENSION) if discovered.project.is_none() => {
                discovered.project = Some(path);
            }
            _ => {}
        }
    }

    if discovered.is_empty() {
        info!(directory = %directory.display(), "No workspace or project file found");
    } else {
        let shown = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        info!(
            workspace = %shown(&discovered.workspace),
            project = %shown(&discovered.project),
            "Found project files"
        );
    }

    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_workspace_and_project() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("MyApp.xcworkspace")).unwrap();
        fs::create_dir(dir.path().join("MyApp.xcodeproj")).unwrap();

        let discovered = locate(dir.path()).unwrap();
        assert_eq!(
            discovered.workspace,
            Some(dir.path().join("MyApp.xcworkspace"))
        );
        assert_eq!(discovered.project, Some(dir.path().join("MyApp.xcodeproj")));
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let discovered = locate(dir.path()).unwrap();
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_project_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Tool.xcodeproj")).unwrap();

        let discovered = locate(dir.path()).unwrap();
        assert!(discovered.workspace.is_none());
        assert_eq!(discovered.project, Some(dir.path().join("Tool.xcodeproj")));
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::create_dir(nested.join("Inner.xcodeproj")).unwrap();

        let discovered = locate(dir.path()).unwrap();
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_unrelated_entries_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "readme").unwrap();
        fs::create_dir(dir.path().join("Sources")).unwrap();

        let discovered = locate(dir.path()).unwrap();
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        assert!(locate(&missing).is_err());
    }
}
