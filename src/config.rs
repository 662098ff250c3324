//! Unified run configuration
//!
//! The command line is parsed once into a single [`RunConfig`] with named
//! sub-structs for the build and trace options. Downstream code never
//! sees raw arguments; validation happens during plan resolution.

use crate::plan::BuildOptions;
use crate::trace::TraceOptions;

/// Which pipeline stages to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Build only
    Build,
    /// Trace only
    Trace,
    /// Build, then trace
    #[default]
    All,
}

impl Mode {
    pub fn includes_build(self) -> bool {
        matches!(self, Mode::Build | Mode::All)
    }

    pub fn includes_trace(self) -> bool {
        matches!(self, Mode::Trace | Mode::All)
    }
}

/// Everything one process invocation needs, constructed once from the
/// command line and consumed by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub mode: Mode,
    pub build: BuildOptions,
    pub trace: TraceOptions,
}
