//! Build-then-trace sequencing
//!
//! The pipeline drives the selected stages in order: resolve a build
//! plan and compile, then record and export a trace. The first failure
//! aborts the run; there is no retry and no partial-stage recovery.

use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

use crate::build::{BuildError, Builder};
use crate::config::RunConfig;
use crate::plan::{self, ConfigError};
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use crate::trace::{TraceController, TraceError};

/// Errors surfaced by a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

impl PipelineError {
    /// Process exit code for this failure. Build failures propagate the
    /// tool's own exit code when one is available.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) => 2,
            PipelineError::Build(err) => err.exit_code(),
            PipelineError::Trace(_) => 1,
        }
    }

    /// Returns a user-facing error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            PipelineError::Config(err) => err.help_message(),
            PipelineError::Build(err) => format!(
                "Error: {err}\n\n\
                Help: Re-run with --log-level debug to see the full build\n\
                command, and check that the scheme and configuration exist\n\
                in the workspace or project."
            ),
            PipelineError::Trace(err) => err.help_message(),
        }
    }
}

/// Paths produced by the stages that ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Built app bundle (build stage)
    pub product: Option<PathBuf>,
    /// Recorded trace artifact (trace stage)
    pub trace: Option<PathBuf>,
    /// Exported XML file (trace stage)
    pub export: Option<PathBuf>,
}

/// Top-level orchestrator for one process invocation.
pub struct Pipeline<H: ProgressHandler = NoOpHandler> {
    root: PathBuf,
    config: RunConfig,
    progress: H,
}

impl Pipeline<NoOpHandler> {
    pub fn new(root: impl Into<PathBuf>, config: RunConfig) -> Self {
        Pipeline {
            root: root.into(),
            config,
            progress: NoOpHandler,
        }
    }
}

impl<H: ProgressHandler> Pipeline<H> {
    pub fn with_progress(root: impl Into<PathBuf>, config: RunConfig, progress: H) -> Self {
        Pipeline {
            root: root.into(),
            config,
            progress,
        }
    }

    /// Runs the selected stages in order. The first failure propagates.
    pub fn run(&self) -> Result<RunOutcome, PipelineError> {
        let start = Instant::now();
        self.progress.on_progress(&ProgressEvent::Started {
            root: self.root.display().to_string(),
        });

        let result = self.run_stages();

        match &result {
            Ok(_) => self.progress.on_progress(&ProgressEvent::Completed {
                total_time: start.elapsed(),
            }),
            Err(err) => self.progress.on_progress(&ProgressEvent::Failed {
                error: err.to_string(),
            }),
        }

        result
    }

    fn run_stages(&self) -> Result<RunOutcome, PipelineError> {
        let mut outcome = RunOutcome::default();

        if self.config.mode.includes_build() {
            if let Some(app) = &self.config.trace.app {
                self.progress.on_progress(&ProgressEvent::BuildSkipped {
                    app: app.display().to_string(),
                });
            } else {
                outcome.product = Some(self.run_build()?);
            }
        }

        if self.config.mode.includes_trace() {
            let app_path = self.app_path(outcome.product.clone())?;
            let (trace_path, exported) = self.run_trace(app_path)?;
            outcome.trace = Some(trace_path);
            outcome.export = Some(exported);
        }

        Ok(outcome)
    }

    fn run_build(&self) -> Result<PathBuf, PipelineError> {
        let plan = plan::resolve(&self.config.build, &self.root)?;

        self.progress.on_progress(&ProgressEvent::BuildStarted {
            scheme: plan.scheme.clone(),
            configuration: plan.configuration.clone(),
            sdk: plan.sdk.as_str().to_string(),
            arch: plan.arch.clone(),
        });

        let build_start = Instant::now();
        let builder = Builder::new(&self.root);
        let product = builder.build(&plan)?;

        self.progress.on_progress(&ProgressEvent::BuildComplete {
            product: product.display().to_string(),
            duration: build_start.elapsed(),
        });

        Ok(product)
    }

    fn run_trace(&self, app_path: PathBuf) -> Result<(PathBuf, PathBuf), PipelineError> {
        let controller = TraceController::new(self.config.trace.clone());

        self.progress.on_progress(&ProgressEvent::RecordStarted {
            app: app_path.display().to_string(),
            template: self.config.trace.template.clone(),
        });

        let record_start = Instant::now();
        let trace_path = controller.record(&app_path)?;

        self.progress.on_progress(&ProgressEvent::RecordComplete {
            trace: trace_path.display().to_string(),
            duration: record_start.elapsed(),
        });

        let exported = controller.export(&trace_path)?;
        self.progress.on_progress(&ProgressEvent::ExportComplete {
            output: exported.display().to_string(),
        });

        Ok((trace_path, exported))
    }

    /// Application path for the trace stage: the explicit `--app` path
    /// wins, then the bundle the build stage just produced, then
    /// `<scheme>.app` under the root (resolving the plan when no scheme
    /// was supplied).
    fn app_path(&self, built: Option<PathBuf>) -> Result<PathBuf, PipelineError> {
        if let Some(app) = &self.config.trace.app {
            return Ok(app.clone());
        }
        if let Some(product) = built {
            return Ok(product);
        }

        let scheme = match &self.config.build.scheme {
            Some(scheme) => scheme.clone(),
            None => plan::resolve(&self.config.build, &self.root)?.scheme,
        };
        let app = self.root.join(format!("{scheme}.app"));
        info!(app = %app.display(), "No app bundle supplied, using scheme-derived path");
        Ok(app)
    }
}
