//! Output naming and source-map selection.
//!
//! Filename patterns are pass-through strings in the engine's placeholder
//! syntax (`[name]`, `[hash]`, `[contenthash]`, `[ext]`). Development builds
//! use build-hash patterns for speed; production builds use content hashes
//! for long-term caching.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Where and under which names the engine emits bundles and chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output directory (absolute once the project root is absolute).
    pub dir: PathBuf,

    /// Entry bundle filename pattern.
    pub filename: String,

    /// Split-chunk filename pattern.
    pub chunk_filename: String,
}

impl OutputSpec {
    pub fn for_mode(mode: BuildMode, root: &Path) -> Self {
        let dir = root.join("dist");
        match mode {
            BuildMode::Development => Self {
                dir,
                filename: "js/[name].[hash].js".to_string(),
                chunk_filename: "chunks/[name].[hash:4].js".to_string(),
            },
            BuildMode::Production => Self {
                dir,
                filename: "js/[name].[contenthash].js".to_string(),
                chunk_filename: "chunks/[name].[contenthash].js".to_string(),
            },
        }
    }
}

/// Emitted name pattern for static assets under `static/<folder>/`.
///
/// Production names carry a short hash for cache busting; development names
/// stay stable for readable URLs.
pub fn static_asset_name(mode: BuildMode, folder: &str) -> String {
    match mode {
        BuildMode::Production => format!("static/{folder}/[name].[hash:8].[ext]"),
        BuildMode::Development => format!("static/{folder}/[name].[ext]"),
    }
}

/// Source-map flavor forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMapStyle {
    /// Full source maps for debugging.
    #[serde(rename = "source-map")]
    Full,
    /// Cheaper per-module maps for production builds.
    #[serde(rename = "cheap-module-source-map")]
    CheapModule,
}

impl SourceMapStyle {
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => SourceMapStyle::Full,
            BuildMode::Production => SourceMapStyle::CheapModule,
        }
    }
}
