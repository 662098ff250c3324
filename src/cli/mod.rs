pub mod commands;
pub mod handlers;

pub use commands::{BuildGroup, CliArgs, DeviceArg, ModeArg, TraceGroup};
pub use handlers::handle_run;
