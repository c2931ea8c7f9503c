//! File-type loader rules.
//!
//! Rules are an ordered list; for a given file the first matching rule wins,
//! pre-rules before normal rules. Loader steps inside a rule are listed in
//! engine order: the last listed loader runs first.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;
use crate::output::static_asset_name;

/// Assets at or below this size (bytes) are inlined as data URLs; larger ones
/// are emitted as files.
pub const INLINE_LIMIT: u64 = 8192;

/// One loader invocation with its pass-through options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// A (test, exclude, include, loader-chain) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderRule {
    /// Regex matched against the file path.
    pub test: String,

    /// Paths matching this regex never hit the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// When non-empty, the file must live under one of these directories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    /// Pre-rules run before all normal rules.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pre: bool,

    /// Loader chain, listed in engine order (last listed runs first).
    pub steps: Vec<LoaderStep>,
}

impl LoaderRule {
    pub fn new(test: impl Into<String>, steps: Vec<LoaderStep>) -> Self {
        Self {
            test: test.into(),
            exclude: None,
            include: Vec::new(),
            pre: false,
            steps,
        }
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include.push(dir.into());
        self
    }

    pub fn pre(mut self) -> Self {
        self.pre = true;
        self
    }

    /// Whether this rule applies to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the test or exclude
    /// pattern does not compile.
    pub fn matches(&self, path: &str) -> Result<bool> {
        if !compile(&self.test)?.is_match(path) {
            return Ok(false);
        }
        if let Some(exclude) = &self.exclude {
            if compile(exclude)?.is_match(path) {
                return Ok(false);
            }
        }
        if !self.include.is_empty() {
            let candidate = Path::new(path);
            if !self.include.iter().any(|dir| candidate.starts_with(dir)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Select the first rule applying to `path`: pre-rules in registration
/// order, then normal rules in registration order.
pub fn first_match<'a>(rules: &'a [LoaderRule], path: &str) -> Result<Option<&'a LoaderRule>> {
    for rule in rules.iter().filter(|r| r.pre) {
        if rule.matches(path)? {
            return Ok(Some(rule));
        }
    }
    for rule in rules.iter().filter(|r| !r.pre) {
        if rule.matches(path)? {
            return Ok(Some(rule));
        }
    }
    Ok(None)
}

/// The style loader chain for a mode.
///
/// Development prepends the live-inject loader; production prepends the
/// extraction loader. Both parse CSS with import resolution and post-process
/// with source maps.
pub fn style_loader_chain(mode: BuildMode) -> Vec<LoaderStep> {
    let head = match mode {
        BuildMode::Development => LoaderStep::new("style-loader"),
        BuildMode::Production => LoaderStep::new("css-extract-loader"),
    };
    vec![
        head,
        LoaderStep::with_options("css-loader", json!({ "import_loaders": 1 })),
        LoaderStep::with_options("postcss-loader", json!({ "source_map": true })),
    ]
}

/// The full ordered rule list for a mode and project root.
pub fn rules_for(mode: BuildMode, root: &Path) -> Vec<LoaderRule> {
    let image_name = static_asset_name(mode, "images");
    let font_name = static_asset_name(mode, "fonts");

    vec![
        // Lint pre-rule: fails the build on lint errors before anything
        // else touches the file.
        LoaderRule::new(
            r"\.(js|jsx)$",
            vec![LoaderStep::with_options(
                "eslint-loader",
                json!({ "cache": true, "fail_on_error": true }),
            )],
        )
        .exclude("node_modules")
        .pre(),
        LoaderRule::new(
            r"\.jsx?$",
            vec![
                LoaderStep::new("babel-loader"),
                LoaderStep::new("eslint-loader"),
            ],
        )
        .exclude("node_modules")
        .include(root.join("src")),
        LoaderRule::new(r"(?i)\.css$", style_loader_chain(mode)),
        LoaderRule::new(
            r"\.(png|jpe?g|gif|svg)(\?.*)?$",
            vec![LoaderStep::with_options(
                "url-loader",
                json!({
                    "limit": INLINE_LIMIT,
                    "name": image_name,
                    "fallback": {
                        "loader": "file-loader",
                        "options": { "name": image_name },
                    },
                }),
            )],
        )
        .exclude("node_modules")
        .include(root.join("src/images")),
        LoaderRule::new(
            r"\.(woff|eot|ttf|svg|gif)$",
            vec![LoaderStep::with_options(
                "url-loader",
                json!({ "limit": INLINE_LIMIT, "name": font_name }),
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_rule_skips_node_modules() {
        let rules = rules_for(BuildMode::Development, Path::new("/proj"));
        let script = &rules[1];
        assert!(script.matches("/proj/src/app.jsx").unwrap());
        assert!(!script.matches("/proj/node_modules/react/index.js").unwrap());
        assert!(!script.matches("/proj/tools/gen.js").unwrap(), "outside include");
    }

    #[test]
    fn pre_rule_wins_for_scripts() {
        let rules = rules_for(BuildMode::Development, Path::new("/proj"));
        let hit = first_match(&rules, "/proj/src/app.jsx").unwrap().unwrap();
        assert!(hit.pre);
        assert_eq!(hit.steps[0].loader, "eslint-loader");
    }

    #[test]
    fn css_match_is_case_insensitive() {
        let rules = rules_for(BuildMode::Development, Path::new("/proj"));
        let css = &rules[2];
        assert!(css.matches("/proj/src/styles/App.CSS").unwrap());
    }

    #[test]
    fn style_chain_heads_differ_by_mode() {
        let dev = style_loader_chain(BuildMode::Development);
        let prod = style_loader_chain(BuildMode::Production);
        assert_eq!(dev[0].loader, "style-loader");
        assert_eq!(prod[0].loader, "css-extract-loader");
        // shared tail: parse, then post-process with source maps
        for chain in [&dev, &prod] {
            assert_eq!(chain[1].loader, "css-loader");
            assert_eq!(chain[2].loader, "postcss-loader");
            assert_eq!(chain[2].options["source_map"], json!(true));
        }
    }

    #[test]
    fn image_rule_inlines_below_limit_with_file_fallback() {
        let rules = rules_for(BuildMode::Production, Path::new("/proj"));
        let images = &rules[3];
        assert!(images.matches("/proj/src/images/logo.png").unwrap());
        assert!(images.matches("/proj/src/images/logo.svg?v=2").unwrap());
        let options = &images.steps[0].options;
        assert_eq!(options["limit"], json!(INLINE_LIMIT));
        assert_eq!(options["fallback"]["loader"], json!("file-loader"));
        assert_eq!(
            options["name"],
            json!("static/images/[name].[hash:8].[ext]")
        );
    }

    #[test]
    fn font_rule_matches_anywhere() {
        let rules = rules_for(BuildMode::Development, Path::new("/proj"));
        let fonts = &rules[4];
        assert!(fonts.matches("/proj/src/fonts/inter.woff").unwrap());
        assert!(fonts
            .matches("/proj/node_modules/lib/icons.ttf")
            .unwrap());
    }

    #[test]
    fn svg_prefers_image_rule_over_font_rule() {
        let rules = rules_for(BuildMode::Development, Path::new("/proj"));
        let hit = first_match(&rules, "/proj/src/images/icon.svg")
            .unwrap()
            .unwrap();
        assert_eq!(
            hit.steps[0].options["name"],
            json!("static/images/[name].[ext]")
        );
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let rule = LoaderRule::new(r"\.(js$", vec![LoaderStep::new("babel-loader")]);
        let err = rule.matches("src/app.js").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
