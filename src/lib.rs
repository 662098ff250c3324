//! xcprof - build-and-trace helper for Xcode projects
//!
//! This library drives `xcodebuild` and `xcrun xctrace` to compile an
//! application and capture a performance trace. It resolves ambiguous or
//! missing inputs along the way: workspace vs. project, explicit vs.
//! derived scheme, simulator vs. device SDK, and explicit vs. freshly
//! built app path.
//!
//! # Core Concepts
//!
//! - **Project discovery**: a non-recursive directory scan that finds
//!   `.xcworkspace`/`.xcodeproj` bundles when none is supplied
//! - **Plan resolution**: collapsing explicit options and discovery
//!   results into one fully resolved build plan
//! - **Pipeline**: sequencing the build and trace stages according to a
//!   mode selector, aborting at the first failure
//!
//! # Example Usage
//!
//! ```no_run
//! use xcprof::config::{Mode, RunConfig};
//! use xcprof::pipeline::Pipeline;
//!
//! fn build_and_trace() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig {
//!         mode: Mode::All,
//!         ..Default::default()
//!     };
//!
//!     let outcome = Pipeline::new(std::env::current_dir()?, config).run()?;
//!
//!     if let Some(product) = outcome.product {
//!         println!("Built: {}", product.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`project`]: workspace/project discovery and reference selection
//! - [`plan`]: build parameter resolution
//! - [`build`]: xcodebuild invocation and product location
//! - [`trace`]: trace recording and export
//! - [`pipeline`]: stage sequencing

// Public modules
pub mod build;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod plan;
pub mod progress;
pub mod project;
pub mod trace;
pub mod util;

// Re-export key types for convenient access
pub use build::{BuildError, Builder};
pub use config::{Mode, RunConfig};
pub use pipeline::{Pipeline, PipelineError, RunOutcome};
pub use plan::{BuildOptions, BuildPlan, ConfigError, Sdk, TargetDevice};
pub use project::{Discovered, ProjectReference};
pub use trace::{TraceController, TraceError, TraceOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_xcprof() {
        assert_eq!(NAME, "xcprof");
    }
}
