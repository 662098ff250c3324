use xcprof::cli::commands::CliArgs;
use xcprof::cli::handlers::handle_run;
use xcprof::util::logging;
use xcprof::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    logging::init_from_args(args.log_level.as_deref(), args.verbose, args.quiet);

    debug!("xcprof v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_run(&args);
    std::process::exit(exit_code);
}
