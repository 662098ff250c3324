//! Workspace/project reference selection

use std::path::{Path, PathBuf};

/// The descriptor a build invocation is pointed at.
///
/// `xcodebuild` treats `-workspace` and `-project` as mutually exclusive,
/// so the choice between the two is made once and carried as a single
/// tagged value instead of a pair of optional paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectReference {
    Workspace(PathBuf),
    Project(PathBuf),
}

impl ProjectReference {
    /// Picks a reference from an optional workspace and project path.
    /// The workspace wins when both are present.
    pub fn select(workspace: Option<PathBuf>, project: Option<PathBuf>) -> Option<Self> {
        match (workspace, project) {
            (Some(path), _) => Some(ProjectReference::Workspace(path)),
            (None, Some(path)) => Some(ProjectReference::Project(path)),
            (None, None) => None,
        }
    }

    /// The `xcodebuild` flag this reference kind is passed with.
    pub fn flag(&self) -> &'static str {
        match self {
            ProjectReference::Workspace(_) => "-workspace",
            ProjectReference::Project(_) => "-project",
        }
    }

    /// Human-readable kind, for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ProjectReference::Workspace(_) => "workspace",
            ProjectReference::Project(_) => "project",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ProjectReference::Workspace(path) | ProjectReference::Project(path) => path,
        }
    }

    /// Base file name without extension. Used to derive a scheme when
    /// none is supplied.
    pub fn base_name(&self) -> Option<String> {
        self.path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }
}
