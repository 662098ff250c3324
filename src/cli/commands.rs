use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Mode, RunConfig};
use crate::plan::{BuildOptions, TargetDevice, DEFAULT_ARCH, DEFAULT_CONFIGURATION};
use crate::trace::{TraceOptions, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};

/// Build-and-trace helper for Xcode projects
#[derive(Parser, Debug)]
#[command(
    name = "xcprof",
    about = "Build an Xcode app and capture an Instruments trace",
    version,
    author,
    long_about = "xcprof shells out to xcodebuild and xctrace to compile an application \
                  and record a performance trace. The workspace or project, the scheme, \
                  and the app path are resolved from explicit flags with directory-scan \
                  fallbacks."
)]
pub struct CliArgs {
    #[arg(
        long,
        value_enum,
        default_value = "all",
        help = "Stages to run: build, trace, or all"
    )]
    pub mode: ModeArg,

    #[command(flatten)]
    pub build: BuildGroup,

    #[command(flatten)]
    pub trace: TraceGroup,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output (debug-level logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

/// Build-related options
#[derive(Args, Debug, Clone)]
pub struct BuildGroup {
    #[arg(long, value_name = "PATH", help = "Path to the .xcworkspace file")]
    pub xcworkspace: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Path to the .xcodeproj file")]
    pub xcodeproj: Option<PathBuf>,

    #[arg(
        long,
        value_name = "NAME",
        help = "The build scheme (derived from the workspace or project name when omitted)"
    )]
    pub scheme: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_CONFIGURATION,
        help = "Build configuration"
    )]
    pub configuration: String,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_ARCH,
        help = "Architecture to build for"
    )]
    pub arch: String,

    #[arg(
        long,
        value_enum,
        default_value = "simulator",
        help = "Target device: simulator (default) or real device"
    )]
    pub device: DeviceArg,
}

/// Trace-related options
#[derive(Args, Debug, Clone)]
pub struct TraceGroup {
    #[arg(
        short = 'a',
        long,
        value_name = "PATH",
        help = "Path to the .app file. If provided, compilation is skipped"
    )]
    pub app: Option<PathBuf>,

    #[arg(
        short = 't',
        long,
        value_name = "NAME",
        default_value = DEFAULT_TEMPLATE,
        help = "Instruments template to record with (e.g., Leaks, Time Profiler)"
    )]
    pub template: String,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Output path for the .trace file"
    )]
    pub output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Build,
    Trace,
    All,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Build => Mode::Build,
            ModeArg::Trace => Mode::Trace,
            ModeArg::All => Mode::All,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceArg {
    Simulator,
    Real,
}

impl From<DeviceArg> for TargetDevice {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Simulator => TargetDevice::Simulator,
            DeviceArg::Real => TargetDevice::Real,
        }
    }
}

impl CliArgs {
    /// Collapses the parsed arguments into the unified run configuration.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            mode: self.mode.into(),
            build: BuildOptions {
                workspace: self.build.xcworkspace.clone(),
                project: self.build.xcodeproj.clone(),
                scheme: self.build.scheme.clone(),
                configuration: self.build.configuration.clone(),
                arch: self.build.arch.clone(),
                device: self.build.device.into(),
            },
            trace: TraceOptions {
                app: self.trace.app.clone(),
                template: self.trace.template.clone(),
                output: self.trace.output.clone(),
            },
        }
    }
}
