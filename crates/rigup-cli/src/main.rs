//! rigup CLI - build-descriptor compiler for the bundling engine.
//!
//! Entry point: parses arguments, initializes logging, and dispatches the
//! selected command.

use clap::Parser;
use miette::Result;
use rigup_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Emit(emit_args) => commands::emit_execute(emit_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for readable error reporting
    result.map_err(error::cli_error_to_miette)
}
