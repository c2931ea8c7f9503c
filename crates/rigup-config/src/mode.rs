//! Build mode selection.
//!
//! Exactly one mode is active per descriptor. Everything mode-dependent in
//! the rest of the crate branches on [`BuildMode`] rather than on raw
//! environment strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Primary environment variable consulted for the build mode.
pub const MODE_VAR: &str = "RIGUP_MODE";

/// Legacy variable honored when [`MODE_VAR`] is unset.
pub const LEGACY_MODE_VAR: &str = "NODE_ENV";

/// The two mutually exclusive build modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Fast rebuilds, live style injection, hot reload.
    #[default]
    Development,
    /// Content-hashed output, extraction, minification.
    Production,
}

impl BuildMode {
    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    /// Resolve the build mode from the environment provider.
    ///
    /// `RIGUP_MODE` wins over `NODE_ENV`. An unset variable selects
    /// development; a present but unrecognized value is rejected with
    /// [`ConfigError::UnknownMode`].
    ///
    /// # Example
    ///
    /// ```
    /// use rigup_config::{BuildMode, StaticEnvironment};
    ///
    /// let env = StaticEnvironment::default().with_var("RIGUP_MODE", "production");
    /// let mode = BuildMode::from_environment(&env).unwrap();
    /// assert!(mode.is_production());
    /// ```
    pub fn from_environment(env: &dyn Environment) -> Result<Self> {
        match env.var(MODE_VAR).or_else(|| env.var(LEGACY_MODE_VAR)) {
            Some(value) => value.parse(),
            None => Ok(BuildMode::Development),
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(BuildMode::Development),
            "production" => Ok(BuildMode::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => write!(f, "development"),
            BuildMode::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnvironment;

    #[test]
    fn parses_known_modes() {
        assert_eq!(
            "development".parse::<BuildMode>().unwrap(),
            BuildMode::Development
        );
        assert_eq!(
            "production".parse::<BuildMode>().unwrap(),
            BuildMode::Production
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = "staging".parse::<BuildMode>();
        assert!(matches!(result, Err(ConfigError::UnknownMode(m)) if m == "staging"));
    }

    #[test]
    fn unset_variable_defaults_to_development() {
        let env = StaticEnvironment::default();
        assert_eq!(
            BuildMode::from_environment(&env).unwrap(),
            BuildMode::Development
        );
    }

    #[test]
    fn rigup_mode_wins_over_node_env() {
        let env = StaticEnvironment::default()
            .with_var(MODE_VAR, "production")
            .with_var(LEGACY_MODE_VAR, "development");
        assert_eq!(
            BuildMode::from_environment(&env).unwrap(),
            BuildMode::Production
        );
    }

    #[test]
    fn node_env_is_honored_when_primary_unset() {
        let env = StaticEnvironment::default().with_var(LEGACY_MODE_VAR, "production");
        assert_eq!(
            BuildMode::from_environment(&env).unwrap(),
            BuildMode::Production
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(BuildMode::Production).unwrap(),
            serde_json::json!("production")
        );
    }
}
