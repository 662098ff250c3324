//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { root } => {
                info!(root = %root, "Starting pipeline");
            }
            ProgressEvent::BuildSkipped { app } => {
                info!(app = %app, "App bundle supplied, skipping build");
            }
            ProgressEvent::BuildStarted {
                scheme,
                configuration,
                sdk,
                arch,
            } => {
                info!(
                    scheme = %scheme,
                    configuration = %configuration,
                    sdk = %sdk,
                    arch = %arch,
                    "Starting build"
                );
            }
            ProgressEvent::BuildComplete { product, duration } => {
                info!(
                    product = %product,
                    duration_ms = duration.as_millis(),
                    "Build complete"
                );
            }
            ProgressEvent::RecordStarted { app, template } => {
                info!(app = %app, template = %template, "Recording trace");
            }
            ProgressEvent::RecordComplete { trace, duration } => {
                info!(
                    trace = %trace,
                    duration_ms = duration.as_millis(),
                    "Recording complete"
                );
            }
            ProgressEvent::ExportComplete { output } => {
                info!(output = %output, "Trace exported");
            }
            ProgressEvent::Completed { total_time } => {
                info!(total_time_ms = total_time.as_millis(), "Pipeline complete");
            }
            ProgressEvent::Failed { error } => {
                warn!(error = %error, "Pipeline failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_handler_creation() {
        let handler = LoggingHandler;
        // Should not panic
        handler.on_progress(&ProgressEvent::Started {
            root: "/test".to_string(),
        });
    }

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        // Test all event types to ensure they don't panic
        let events = vec![
            ProgressEvent::Started {
                root: "/test".to_string(),
            },
            ProgressEvent::BuildSkipped {
                app: "/tmp/Foo.app".to_string(),
            },
            ProgressEvent::BuildStarted {
                scheme: "MyApp".to_string(),
                configuration: "Debug".to_string(),
                sdk: "iphonesimulator".to_string(),
                arch: "x86_64".to_string(),
            },
            ProgressEvent::BuildComplete {
                product: "/tmp/MyApp.app".to_string(),
                duration: Duration::from_secs(30),
            },
            ProgressEvent::RecordStarted {
                app: "/tmp/MyApp.app".to_string(),
                template: "Leaks".to_string(),
            },
            ProgressEvent::RecordComplete {
                trace: "output.trace".to_string(),
                duration: Duration::from_secs(10),
            },
            ProgressEvent::ExportComplete {
                output: "output.xml".to_string(),
            },
            ProgressEvent::Completed {
                total_time: Duration::from_secs(45),
            },
            ProgressEvent::Failed {
                error: "Test error".to_string(),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
