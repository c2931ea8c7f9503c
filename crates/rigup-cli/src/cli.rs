//! Command-line interface definition.
//!
//! Clap v4 derive structs for the `rigup` binary:
//!
//! - `rigup emit` - compose a descriptor and write it as JSON
//! - `rigup check` - validate a descriptor without emitting it

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rigup_config::BuildMode;

/// rigup - build-descriptor compiler for the bundling engine
#[derive(Parser, Debug)]
#[command(
    name = "rigup",
    version,
    about = "Compile a typed build descriptor for the bundling engine",
    long_about = "rigup composes a complete build descriptor (loader rules, output naming,\n\
                  chunk-splitting policy, plugin pipeline, dev-server spec) for exactly one\n\
                  of the two build modes and serializes it for the engine to consume."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available rigup subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the build descriptor and emit it as JSON
    ///
    /// The mode comes from --mode, falling back to RIGUP_MODE / NODE_ENV,
    /// then to development. Project overrides are read from rigup.toml and
    /// RIGUP_* variables.
    Emit(EmitArgs),

    /// Validate the descriptor without emitting it
    ///
    /// Checks internal consistency; with --fs also checks that the project
    /// layout (template file, alias roots) matches the descriptor.
    Check(CheckArgs),
}

/// Arguments for the emit command
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Build mode (overrides RIGUP_MODE / NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build mode (overrides RIGUP_MODE / NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root directory
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Also validate the project layout on disk
    #[arg(long)]
    pub fs: bool,
}

/// Build mode as a command-line value
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Fast rebuilds, hot reload, live style injection
    #[value(name = "development", alias = "dev")]
    Development,

    /// Content-hashed output, extraction, minification
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for BuildMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => BuildMode::Development,
            ModeArg::Production => BuildMode::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_aliases_parse() {
        let cli = Cli::parse_from(["rigup", "emit", "--mode", "prod"]);
        match cli.command {
            Command::Emit(args) => assert_eq!(args.mode, Some(ModeArg::Production)),
            _ => panic!("expected emit"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["rigup", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }
}
