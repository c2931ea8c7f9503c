//! The build plugin pipeline.
//!
//! Plugins are an explicit tagged enum with two fully-enumerated,
//! mode-specific lists; nothing is filtered by truthiness at runtime, so an
//! invalid mode can never silently produce a half-empty pipeline. Order is
//! execution order: the output directory is cleaned before the HTML template
//! is injected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// A build-time plugin declaration forwarded to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// Inject the build mode into the compiled bundles.
    DefineEnvironment {
        mode: BuildMode,
        is_development: bool,
    },

    /// Empty the output directory before emission.
    CleanOutputDir,

    /// Inject emitted bundle references into an HTML template.
    HtmlTemplate {
        template: PathBuf,
        inject: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minify: Option<HtmlMinifyOptions>,
    },

    /// Push code updates into the running page (development only).
    HotReload,

    /// Extract CSS into standalone files (production only).
    CssExtract {
        filename: String,
        chunk_filename: String,
    },

    /// Emit a bundle-composition report (production only).
    BundleAnalyzer { report: AnalyzerReport },

    /// Minify extracted CSS (production only).
    CssMinify,
}

impl Plugin {
    /// Stable identifier, matching the serialized `plugin` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::DefineEnvironment { .. } => "define-environment",
            Plugin::CleanOutputDir => "clean-output-dir",
            Plugin::HtmlTemplate { .. } => "html-template",
            Plugin::HotReload => "hot-reload",
            Plugin::CssExtract { .. } => "css-extract",
            Plugin::BundleAnalyzer { .. } => "bundle-analyzer",
            Plugin::CssMinify => "css-minify",
        }
    }
}

/// How the bundle-composition report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerReport {
    /// Write a standalone HTML report file.
    #[default]
    Static,
    /// Serve the report from a local server.
    Server,
    /// Emit raw JSON stats.
    Json,
}

/// HTML minification switches applied to the injected template in
/// production. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlMinifyOptions {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_redundant_attributes: bool,
    pub use_short_doctype: bool,
    pub remove_empty_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    pub keep_closing_slash: bool,
    pub minify_js: bool,
    pub minify_css: bool,
    pub minify_urls: bool,
}

impl Default for HtmlMinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_redundant_attributes: true,
            use_short_doctype: true,
            remove_empty_attributes: true,
            remove_style_link_type_attributes: true,
            keep_closing_slash: true,
            minify_js: true,
            minify_css: true,
            minify_urls: true,
        }
    }
}

/// Plugins present in every build, in execution order.
pub fn base_plugins(mode: BuildMode, template: &Path) -> Vec<Plugin> {
    vec![
        Plugin::DefineEnvironment {
            mode,
            is_development: mode.is_development(),
        },
        Plugin::CleanOutputDir,
        Plugin::HtmlTemplate {
            template: template.to_path_buf(),
            inject: true,
            minify: mode
                .is_production()
                .then(HtmlMinifyOptions::default),
        },
    ]
}

/// Plugins exclusive to development builds.
pub fn development_plugins() -> Vec<Plugin> {
    vec![Plugin::HotReload]
}

/// Plugins exclusive to production builds, in execution order.
pub fn production_plugins(analyzer: bool) -> Vec<Plugin> {
    let mut plugins = vec![Plugin::CssExtract {
        filename: "css/style.[contenthash].css".to_string(),
        chunk_filename: "css/style.[contenthash].[id].css".to_string(),
    }];
    if analyzer {
        plugins.push(Plugin::BundleAnalyzer {
            report: AnalyzerReport::Static,
        });
    }
    plugins.push(Plugin::CssMinify);
    plugins
}

/// The complete ordered pipeline for a mode: the base set followed by
/// exactly one of the mode-specific sets.
pub fn plugin_pipeline(mode: BuildMode, template: &Path, analyzer: bool) -> Vec<Plugin> {
    let mut plugins = base_plugins(mode, template);
    match mode {
        BuildMode::Development => plugins.extend(development_plugins()),
        BuildMode::Production => plugins.extend(production_plugins(analyzer)),
    }
    plugins
}
