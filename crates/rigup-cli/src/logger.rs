//! Logging infrastructure for the rigup CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity resolves in
//! this order: `--verbose` (debug for rigup crates), `--quiet` (errors
//! only), the `RUST_LOG` environment variable, then info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once at startup, before any
/// logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rigup=debug,rigup_config=debug,rigup_cli=debug")
    } else if quiet {
        EnvFilter::new("rigup=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rigup=info,rigup_config=info,rigup_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
