//! Trace recording and export
//!
//! Wraps `xcrun xctrace` for the two trace stages: record a trace of the
//! target app with an Instruments template, then export the recorded
//! artifact's table of contents to XML.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::info;

/// Launcher the trace tool is invoked through
pub const XCRUN: &str = "xcrun";

/// Default Instruments template
pub const DEFAULT_TEMPLATE: &str = "Leaks";

/// Default trace artifact path
pub const DEFAULT_OUTPUT: &str = "output.trace";

/// Errors produced by the trace stages
#[derive(Debug, Error)]
pub enum TraceError {
    /// The target app bundle does not exist
    #[error("app bundle not found: {}", path.display())]
    AppNotFound { path: PathBuf },

    /// The trace tool could not be started at all
    #[error("failed to run xcrun xctrace: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// Recording ran and reported failure
    #[error("xctrace record exited with {status}")]
    RecordFailed { status: ExitStatus },

    /// Export ran and reported failure
    #[error("xctrace export exited with {status}")]
    ExportFailed { status: ExitStatus },
}

impl TraceError {
    /// Returns a user-facing error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            TraceError::AppNotFound { path } => {
                format!(
                    "Error: App bundle not found\nPath: {}\n\n\
                    Help: Pass --app with the path to a built .app bundle,\n\
                    or run with --mode all so the build stage produces one.",
                    path.display()
                )
            }
            other => format!("Error: {other}"),
        }
    }
}

/// Trace options as supplied on the command line
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Pre-built app bundle. When set, the build stage is skipped.
    pub app: Option<PathBuf>,
    /// Instruments template name, e.g. "Leaks" or "Time Profiler"
    pub template: String,
    /// Path the trace artifact is written to
    pub output: PathBuf,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            app: None,
            template: DEFAULT_TEMPLATE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Runs the record and export stages for one trace request.
pub struct TraceController {
    options: TraceOptions,
}

impl TraceController {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Records a trace of `app_path` and returns the artifact path.
    ///
    /// Fails without spawning anything when the app bundle is missing.
    pub fn record(&self, app_path: &Path) -> Result<PathBuf, TraceError> {
        if !app_path.exists() {
            return Err(TraceError::AppNotFound {
                path: app_path.to_path_buf(),
            });
        }

        let args = record_args(&self.options.template, &self.options.output, app_path);
        info!(command = %format!("{} {}", XCRUN, args.join(" ")), "Running trace command");

        let status = run_xcrun(&args)?;
        if !status.success() {
            return Err(TraceError::RecordFailed { status });
        }

        Ok(self.options.output.clone())
    }

    /// Exports `trace_path` to XML next to the artifact and returns the
    /// exported file path.
    pub fn export(&self, trace_path: &Path) -> Result<PathBuf, TraceError> {
        let exported = trace_path.with_extension("xml");
        let args = export_args(trace_path, &exported);
        info!(command = %format!("{} {}", XCRUN, args.join(" ")), "Running export command");

        let status = run_xcrun(&args)?;
        if !status.success() {
            return Err(TraceError::ExportFailed { status });
        }

        Ok(exported)
    }
}

fn run_xcrun(args: &[String]) -> Result<ExitStatus, TraceError> {
    Command::new(XCRUN)
        .args(args)
        .status()
        .map_err(|source| TraceError::Spawn { source })
}

/// Argument vector for the record invocation.
pub fn record_args(template: &str, output: &Path, app: &Path) -> Vec<String> {
    vec![
        "xctrace".to_string(),
        "record".to_string(),
        "--template".to_string(),
        template.to_string(),
        "--output".to_string(),
        output.display().to_string(),
        "--launch".to_string(),
        "--".to_string(),
        app.display().to_string(),
    ]
}

/// Argument vector for the export invocation.
pub fn export_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "xctrace".to_string(),
        "export".to_string(),
        "--input".to_string(),
        input.display().to_string(),
        "--toc".to_string(),
        "--output".to_string(),
        output.display().to_string(),
    ]
}
