//! Chunk-splitting and minification policy.
//!
//! Thresholds are fixed; the engine does the actual splitting and
//! minification. Parallelism is a numeric hint forwarded to the minifier,
//! not something scheduled here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Minimum chunk size in bytes before a split is worthwhile.
pub const MIN_CHUNK_SIZE: u64 = 30_000;

/// Complete optimization policy forwarded to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationProfile {
    /// Mark unused exports for elimination.
    pub used_exports: bool,

    /// Name of the extracted runtime chunk.
    pub runtime_chunk: String,

    pub split_chunks: SplitChunksPolicy,

    pub minify: MinifyPolicy,
}

impl OptimizationProfile {
    /// The standard profile used in both modes.
    pub fn standard() -> Self {
        Self {
            used_exports: true,
            runtime_chunk: "runtime".to_string(),
            split_chunks: SplitChunksPolicy::standard(),
            minify: MinifyPolicy::default(),
        }
    }

    /// Convenience accessor used by validation and tests.
    pub fn cache_group(&self, name: &str) -> Option<&CacheGroup> {
        self.split_chunks
            .cache_groups
            .iter()
            .find(|g| g.name == name)
    }
}

impl Default for OptimizationProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which chunks the splitter considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    /// Initial and async chunks alike.
    #[default]
    All,
    Initial,
    Async,
}

/// Code-splitting thresholds and cache-group partitioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitChunksPolicy {
    pub chunks: ChunkScope,

    /// Minimum size (bytes) for a chunk to be created.
    pub min_size: u64,

    /// Minimum number of chunks sharing a module before it splits.
    pub min_chunks: u32,

    /// Separator in generated chunk names.
    pub name_delimiter: char,

    /// Evaluated in order; higher priority wins when groups overlap.
    pub cache_groups: Vec<CacheGroup>,
}

impl SplitChunksPolicy {
    pub fn standard() -> Self {
        Self {
            chunks: ChunkScope::All,
            min_size: MIN_CHUNK_SIZE,
            min_chunks: 1,
            name_delimiter: '~',
            cache_groups: vec![CacheGroup::vendor(), CacheGroup::default_group()],
        }
    }
}

/// A policy bucket deciding which modules land in which split chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheGroup {
    pub name: String,

    /// Module-path regex restricting the group; `None` catches everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    pub min_chunks: u32,

    /// Higher wins when a module qualifies for several groups.
    pub priority: i32,

    /// Reuse an existing chunk instead of creating a duplicate.
    pub reuse_existing: bool,

    /// Split even when thresholds are not met.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enforce: bool,
}

impl CacheGroup {
    /// Third-party dependencies, split out unconditionally.
    pub fn vendor() -> Self {
        Self {
            name: "vendor".to_string(),
            test: Some(r"[\\/]node_modules[\\/]".to_string()),
            min_chunks: 1,
            priority: -10,
            reuse_existing: true,
            enforce: true,
        }
    }

    /// Catch-all for application modules reused at least twice.
    pub fn default_group() -> Self {
        Self {
            name: "default".to_string(),
            test: None,
            min_chunks: 2,
            priority: -20,
            reuse_existing: true,
            enforce: false,
        }
    }
}

/// Minifier configuration, pass-through to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyPolicy {
    /// Worker parallelism hint.
    pub parallelism: u32,

    /// Strip console output from bundles.
    pub drop_console: bool,

    /// Minifier cache directory.
    pub cache_dir: PathBuf,
}

impl Default for MinifyPolicy {
    fn default() -> Self {
        Self {
            parallelism: 4,
            drop_console: true,
            cache_dir: PathBuf::from(".cache"),
        }
    }
}

/// The optimization profile for a mode.
///
/// Both modes currently share the standard profile; the signature keeps mode
/// in the contract so callers never construct a profile without one.
pub fn optimization_for(_mode: BuildMode) -> OptimizationProfile {
    OptimizationProfile::standard()
}
