//! xcodebuild invocation and product location
//!
//! Turns a resolved [`BuildPlan`] into a single synchronous `xcodebuild`
//! run: ensure the `Archive` output tree exists, invoke the tool, and
//! compute the path the built `.app` bundle is expected at.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::{info, warn};

use crate::plan::BuildPlan;

/// External build tool invoked for compilation
pub const BUILD_TOOL: &str = "xcodebuild";

/// Name of the output directory created under the root
pub const OUTPUT_DIR_NAME: &str = "Archive";

/// Fixed products subpath inside the derived-data tree
const PRODUCTS_SUBPATH: &str = "Build/Products";

/// Errors produced by the build stage
#[derive(Debug, Error)]
pub enum BuildError {
    /// The output directory could not be created
    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build tool could not be started at all
    #[error("failed to run xcodebuild: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// The build tool ran and reported failure
    #[error("xcodebuild exited with {status}")]
    CommandFailed { status: ExitStatus },
}

impl BuildError {
    /// Process exit code for this failure. A failing build propagates
    /// the tool's own exit code when one is available.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::CommandFailed { status } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}

/// Runs build invocations rooted at a working directory.
pub struct Builder {
    root: PathBuf,
}

impl Builder {
    /// `root` is the directory the `Archive` output tree is created
    /// under, normally the current working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The derived-data output directory for this builder.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR_NAME)
    }

    /// Creates the output directory tree. Idempotent.
    pub fn ensure_output_dir(&self) -> Result<PathBuf, BuildError> {
        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir).map_err(|source| BuildError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(output_dir)
    }

    /// Runs a clean build for `plan` and returns the expected product
    /// path.
    ///
    /// The product path is computed from the plan, not read back from
    /// the tool; a missing bundle after a zero exit is logged as a
    /// warning but does not fail the build.
    pub fn build(&self, plan: &BuildPlan) -> Result<PathBuf, BuildError> {
        let output_dir = self.ensure_output_dir()?;

        let args = invocation_args(plan, &output_dir);
        info!(command = %format!("{} {}", BUILD_TOOL, args.join(" ")), "Running build command");

        let status = Command::new(BUILD_TOOL)
            .args(&args)
            .status()
            .map_err(|source| BuildError::Spawn { source })?;

        if !status.success() {
            return Err(BuildError::CommandFailed { status });
        }

        let product = self.product_path(plan);
        if product.exists() {
            info!(app = %product.display(), "Build succeeded");
        } else {
            warn!(
                app = %product.display(),
                "Build reported success but the expected app bundle is missing"
            );
        }
        Ok(product)
    }

    /// Expected `.app` location under the derived-data tree for `plan`.
    pub fn product_path(&self, plan: &BuildPlan) -> PathBuf {
        self.output_dir()
            .join(PRODUCTS_SUBPATH)
            .join(plan.sdk.product_dir(&plan.configuration))
            .join(format!("{}.app", plan.scheme))
    }
}

/// Argument vector for the build invocation.
///
/// The order is fixed by xcodebuild's argument grammar: settings first,
/// then the `clean` and `build` actions, with the derived-data path
/// appended last.
pub fn invocation_args(plan: &BuildPlan, derived_data: &Path) -> Vec<String> {
    vec![
        plan.reference.flag().to_string(),
        plan.reference.path().display().to_string(),
        "-scheme".to_string(),
        plan.scheme.clone(),
        "-configuration".to_string(),
        plan.configuration.clone(),
        "-sdk".to_string(),
        plan.sdk.as_str().to_string(),
        "-arch".to_string(),
        plan.arch.clone(),
        "clean".to_string(),
        "build".to_string(),
        "-derivedDataPath".to_string(),
        derived_data.display().to_string(),
    ]
}
