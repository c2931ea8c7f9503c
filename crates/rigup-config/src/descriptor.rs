//! Descriptor assembly.
//!
//! [`BuildDescriptor`] is the complete contract handed to the bundling
//! engine, constructed fresh per invocation and serialized as JSON. For a
//! given (mode, environment, root, settings) tuple the result is
//! deterministic; host discovery is the only ambient input and it arrives
//! through the [`Environment`] provider.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dev::DevServerSpec;
use crate::environment::{discover_host, Environment};
use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::optimize::{optimization_for, OptimizationProfile};
use crate::output::{OutputSpec, SourceMapStyle};
use crate::plugins::{plugin_pipeline, Plugin};
use crate::resolve::ResolveSpec;
use crate::rules::{rules_for, LoaderRule};
use crate::settings::ProjectSettings;

/// HTML template consumed as the injection target, relative to the root.
pub const DEFAULT_TEMPLATE: &str = "public/index.html";

/// Complete build descriptor for one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub mode: BuildMode,
    pub output: OutputSpec,
    pub resolve: ResolveSpec,
    pub source_maps: SourceMapStyle,
    pub dev_server: DevServerSpec,
    pub optimization: OptimizationProfile,
    pub rules: Vec<LoaderRule>,
    /// Engine asset-size warnings; disabled.
    pub performance_hints: bool,
    pub plugins: Vec<Plugin>,
}

impl BuildDescriptor {
    /// Compose a descriptor with default project settings.
    pub fn compose(mode: BuildMode, env: &dyn Environment, root: impl AsRef<Path>) -> Self {
        Self::compose_with_settings(mode, env, root, &ProjectSettings::default())
    }

    /// Compose a descriptor with an explicit settings overlay.
    pub fn compose_with_settings(
        mode: BuildMode,
        env: &dyn Environment,
        root: impl AsRef<Path>,
        settings: &ProjectSettings,
    ) -> Self {
        let root = root.as_ref();
        debug!(%mode, root = %root.display(), "composing build descriptor");

        let template = root.join(
            settings
                .template
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE)),
        );

        let mut output = OutputSpec::for_mode(mode, root);
        if let Some(dir) = &settings.output_dir {
            output.dir = root.join(dir);
        }

        let mut dev_server = DevServerSpec::with_host(discover_host(env));
        if let Some(port) = settings.port {
            dev_server.port = port;
        }
        if let Some(open) = settings.open {
            dev_server.open = open;
        }

        Self {
            mode,
            output,
            resolve: ResolveSpec::for_root(root),
            source_maps: SourceMapStyle::for_mode(mode),
            dev_server,
            optimization: optimization_for(mode),
            rules: rules_for(mode, root),
            performance_hints: false,
            plugins: plugin_pipeline(mode, &template, settings.analyzer),
        }
    }

    /// Compose from the live environment: mode from `RIGUP_MODE`/`NODE_ENV`,
    /// settings from `rigup.toml` and `RIGUP_*` variables.
    ///
    /// # Errors
    ///
    /// Fails on an unrecognized mode value or a malformed settings file.
    /// Host discovery never fails.
    pub fn from_environment(env: &dyn Environment, root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mode = BuildMode::from_environment(env)?;
        let settings = ProjectSettings::load(root)?;
        Ok(Self::compose_with_settings(mode, env, root, &settings))
    }

    /// Convert to `serde_json::Value` — the engine contract.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Parse a descriptor back from `serde_json::Value`.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// The HTML template path declared in the pipeline, if any.
    pub fn template(&self) -> Option<&Path> {
        self.plugins.iter().find_map(|p| match p {
            Plugin::HtmlTemplate { template, .. } => Some(template.as_path()),
            _ => None,
        })
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }
}
