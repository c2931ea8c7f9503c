//! Project-level settings overlay.
//!
//! Layered the usual way: built-in defaults, then `rigup.toml` at the
//! project root, then `RIGUP_*` environment variables. Settings adjust knobs
//! on the descriptor (port, output directory, template path, analyzer
//! report); they never change which mode-gated plugin set is active.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Settings file searched for at the project root.
pub const SETTINGS_FILE: &str = "rigup.toml";

/// Environment variable prefix for overrides (e.g. `RIGUP_PORT=3000`).
pub const ENV_PREFIX: &str = "RIGUP_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Dev-server port override.
    #[serde(default)]
    pub port: Option<u16>,

    /// Override opening a browser tab on dev-server start.
    #[serde(default)]
    pub open: Option<bool>,

    /// Output directory override, relative to the project root.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// HTML template override, relative to the project root.
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// Emit the production bundle-composition report.
    #[serde(default = "default_analyzer")]
    pub analyzer: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            port: None,
            open: None,
            output_dir: None,
            template: None,
            analyzer: true,
        }
    }
}

fn default_analyzer() -> bool {
    true
}

impl ProjectSettings {
    /// Load the settings overlay for a project root.
    ///
    /// A missing `rigup.toml` is fine (defaults apply); a malformed one is
    /// an error. Unknown keys are ignored, matching the env prefix picking
    /// up unrelated `RIGUP_*` variables.
    pub fn load(root: &Path) -> Result<Self> {
        Figment::from(Serialized::defaults(ProjectSettings::default()))
            .merge(Toml::file(root.join(SETTINGS_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}
