//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while the pipeline runs its stages
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Pipeline started
    Started { root: String },

    /// Build stage skipped because an app bundle was supplied
    BuildSkipped { app: String },

    /// Build invocation started
    BuildStarted {
        scheme: String,
        configuration: String,
        sdk: String,
        arch: String,
    },

    /// Build invocation finished
    BuildComplete {
        product: String,
        duration: Duration,
    },

    /// Trace recording started
    RecordStarted { app: String, template: String },

    /// Trace recording finished
    RecordComplete {
        trace: String,
        duration: Duration,
    },

    /// Trace export finished
    ExportComplete { output: String },

    /// All selected stages completed
    Completed { total_time: Duration },

    /// A stage failed
    Failed { error: String },
}

/// Trait for handling progress events during a pipeline run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {
        // Intentionally empty
    }
}
