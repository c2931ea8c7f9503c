//! Pluggable descriptor validation strategies.
//!
//! Schema validation checks internal consistency without touching the
//! filesystem; filesystem validation additionally checks the project layout
//! (for CLI use). Alias target directories are deliberately not required to
//! exist — a missing one surfaces as an engine-level resolution error later.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::warn;

use crate::descriptor::BuildDescriptor;
use crate::error::{ConfigError, Result};
use crate::plugins::Plugin;

/// Trait for pluggable descriptor validation strategies.
pub trait ConfigValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()>;
}

/// Consistency checks with no filesystem access.
///
/// # Example
///
/// ```
/// use rigup_config::{
///     BuildDescriptor, BuildMode, ConfigValidator, SchemaValidator, StaticEnvironment,
/// };
///
/// let env = StaticEnvironment::default();
/// let descriptor = BuildDescriptor::compose(BuildMode::Production, &env, "/proj");
/// SchemaValidator.validate(&descriptor).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        if descriptor.dev_server.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Pick a fixed port (default 8888)".to_string()),
            });
        }

        for (alias, _) in &descriptor.resolve.aliases {
            if alias.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "alias names cannot be empty".to_string(),
                    hint: Some("Remove the empty alias key".to_string()),
                });
            }
        }

        for rule in &descriptor.rules {
            compiles(&rule.test)?;
            if let Some(exclude) = &rule.exclude {
                compiles(exclude)?;
            }
            if rule.steps.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule {:?} has an empty loader chain", rule.test),
                    hint: None,
                });
            }
        }

        let split = &descriptor.optimization.split_chunks;
        if split.min_size == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "split-chunks min_size cannot be 0".to_string(),
                hint: Some("Use the standard 30000-byte threshold".to_string()),
            });
        }
        for group in &split.cache_groups {
            if let Some(test) = &group.test {
                compiles(test)?;
            }
        }
        let priorities: Vec<i32> = split.cache_groups.iter().map(|g| g.priority).collect();
        if priorities.windows(2).any(|w| w[0] <= w[1]) {
            return Err(ConfigError::SchemaValidation {
                message: "cache groups must be listed in strictly descending priority".to_string(),
                hint: Some("vendor (-10) is evaluated before default (-20)".to_string()),
            });
        }

        validate_pipeline(descriptor)?;

        Ok(())
    }
}

// The pipeline is constructed from disjoint mode sets; this re-checks the
// invariant for descriptors deserialized from untrusted JSON.
fn validate_pipeline(descriptor: &BuildDescriptor) -> Result<()> {
    let mode = descriptor.mode;
    let clean = descriptor
        .plugins
        .iter()
        .position(|p| matches!(p, Plugin::CleanOutputDir));
    let html = descriptor
        .plugins
        .iter()
        .position(|p| matches!(p, Plugin::HtmlTemplate { .. }));
    match (clean, html) {
        (Some(c), Some(h)) if c < h => {}
        _ => {
            return Err(ConfigError::SchemaValidation {
                message: "output cleaning must precede HTML template injection".to_string(),
                hint: None,
            })
        }
    }

    for plugin in &descriptor.plugins {
        let misplaced = match plugin {
            Plugin::HotReload => mode.is_production(),
            Plugin::CssExtract { .. } | Plugin::BundleAnalyzer { .. } | Plugin::CssMinify => {
                mode.is_development()
            }
            _ => false,
        };
        if misplaced {
            return Err(ConfigError::SchemaValidation {
                message: format!("plugin {:?} is not valid in {mode} mode", plugin.name()),
                hint: None,
            });
        }
    }
    Ok(())
}

fn compiles(pattern: &str) -> Result<()> {
    Regex::new(pattern)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Filesystem validator (for CLI use).
///
/// Checks the project root exists, the HTML template is on disk, and every
/// alias target sits under the root. Missing alias directories only warn.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        SchemaValidator.validate(descriptor)?;

        if !self.root.exists() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }

        if let Some(template) = descriptor.template() {
            if !template.exists() {
                return Err(ConfigError::TemplateNotFound(template.to_path_buf()));
            }
        }

        for (alias, path) in &descriptor.resolve.aliases {
            if !path.starts_with(&self.root) {
                return Err(ConfigError::AliasOutsideRoot {
                    alias: alias.clone(),
                    path: path.clone(),
                });
            }
            if !path.exists() {
                warn!(alias = %alias, path = %path.display(), "alias target does not exist yet");
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation.
pub fn validate_schema(descriptor: &BuildDescriptor) -> Result<()> {
    SchemaValidator.validate(descriptor)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(descriptor: &BuildDescriptor, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnvironment;
    use crate::mode::BuildMode;

    fn descriptor(mode: BuildMode) -> BuildDescriptor {
        BuildDescriptor::compose(mode, &StaticEnvironment::default(), "/proj")
    }

    #[test]
    fn composed_descriptors_pass_schema_validation() {
        SchemaValidator
            .validate(&descriptor(BuildMode::Development))
            .unwrap();
        SchemaValidator
            .validate(&descriptor(BuildMode::Production))
            .unwrap();
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut d = descriptor(BuildMode::Development);
        d.dev_server.port = 0;
        let result = SchemaValidator.validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn bad_rule_pattern_is_rejected() {
        let mut d = descriptor(BuildMode::Development);
        d.rules[0].test = r"\.(js$".to_string();
        let result = SchemaValidator.validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn inverted_cache_group_priority_is_rejected() {
        let mut d = descriptor(BuildMode::Production);
        d.optimization.split_chunks.cache_groups.swap(0, 1);
        let result = SchemaValidator.validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn hot_reload_in_production_is_rejected() {
        let mut d = descriptor(BuildMode::Production);
        d.plugins.push(Plugin::HotReload);
        let result = SchemaValidator.validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn extraction_in_development_is_rejected() {
        let mut d = descriptor(BuildMode::Development);
        d.plugins.push(Plugin::CssMinify);
        let result = SchemaValidator.validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn fs_validator_requires_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let d = BuildDescriptor::compose(
            BuildMode::Development,
            &StaticEnvironment::default(),
            dir.path(),
        );
        let result = FsValidator::new(dir.path()).validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::TemplateNotFound(_)
        ));

        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::write(dir.path().join("public/index.html"), "<html></html>").unwrap();
        FsValidator::new(dir.path()).validate(&d).unwrap();
    }

    #[test]
    fn fs_validator_rejects_alias_outside_root() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::write(dir.path().join("public/index.html"), "<html></html>").unwrap();

        let mut d = BuildDescriptor::compose(
            BuildMode::Development,
            &StaticEnvironment::default(),
            dir.path(),
        );
        d.resolve = d.resolve.clone().with_alias("@escape", "/somewhere/else");
        let result = FsValidator::new(dir.path()).validate(&d);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::AliasOutsideRoot { .. }
        ));
    }
}
