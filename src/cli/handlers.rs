//! Command handlers
//!
//! Maps a parsed command line onto a pipeline run and the run's result
//! onto a process exit code. Errors are printed once, with
//! troubleshooting hints, at the point they surface.

use anyhow::Context;
use std::env;

use crate::cli::commands::CliArgs;
use crate::pipeline::{Pipeline, RunOutcome};
use crate::progress::LoggingHandler;

/// Runs the pipeline for the parsed arguments and returns the process
/// exit code.
pub fn handle_run(args: &CliArgs) -> i32 {
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<i32> {
    let root = env::current_dir().context("failed to determine the working directory")?;
    let config = args.to_run_config();

    let pipeline = Pipeline::with_progress(root, config, LoggingHandler);
    match pipeline.run() {
        Ok(outcome) => {
            print_summary(&outcome);
            Ok(0)
        }
        Err(err) => {
            eprintln!("{}", err.help_message());
            Ok(err.exit_code())
        }
    }
}

fn print_summary(outcome: &RunOutcome) {
    if let Some(product) = &outcome.product {
        println!("App: {}", product.display());
    }
    if let Some(trace) = &outcome.trace {
        println!("Trace: {}", trace.display());
    }
    if let Some(export) = &outcome.export {
        println!("Export: {}", export.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_print_summary_with_empty_outcome() {
        // Nothing ran; nothing to print, nothing to panic on.
        print_summary(&RunOutcome::default());
    }

    #[test]
    fn test_print_summary_with_paths() {
        let outcome = RunOutcome {
            product: Some(PathBuf::from("/tmp/MyApp.app")),
            trace: Some(PathBuf::from("output.trace")),
            export: Some(PathBuf::from("output.xml")),
        };
        print_summary(&outcome);
    }
}
