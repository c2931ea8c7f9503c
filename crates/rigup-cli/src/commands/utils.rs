//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use rigup_config::{BuildMode, Environment};

use crate::cli::ModeArg;
use crate::error::{CliError, Result};

/// Canonicalize the project root, failing with a clear error when it does
/// not exist.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .map_err(|_| CliError::FileNotFound(root.to_path_buf()))
}

/// Mode from the flag, else from the environment (RIGUP_MODE / NODE_ENV,
/// defaulting to development).
pub fn resolve_mode(flag: Option<ModeArg>, env: &dyn Environment) -> Result<BuildMode> {
    match flag {
        Some(mode) => Ok(mode.into()),
        None => Ok(BuildMode::from_environment(env)?),
    }
}
