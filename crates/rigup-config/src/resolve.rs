//! Module resolution settings: extensions, search directories, path aliases.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolution settings handed to the engine's resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSpec {
    /// Recognized extensions, in probe order.
    pub extensions: Vec<String>,

    /// Module search directories.
    pub modules: Vec<PathBuf>,

    /// Symbolic alias → directory. Insertion order preserved, keys unique.
    pub aliases: IndexMap<String, PathBuf>,
}

impl ResolveSpec {
    /// Resolution settings for a project root: `.js`/`.jsx`/`.json`
    /// extensions, `node_modules` search path, and the default alias set.
    pub fn for_root(root: &Path) -> Self {
        Self {
            extensions: vec![".js".to_string(), ".jsx".to_string(), ".json".to_string()],
            modules: vec![root.join("node_modules")],
            aliases: default_aliases(root),
        }
    }

    /// Add or replace a single alias.
    ///
    /// # Example
    /// ```
    /// use rigup_config::ResolveSpec;
    /// use std::path::Path;
    ///
    /// let resolve = ResolveSpec::for_root(Path::new("/proj"))
    ///     .with_alias("@api", "/proj/src/api");
    /// assert_eq!(resolve.aliases["@api"], Path::new("/proj/src/api"));
    /// ```
    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.aliases.insert(alias.into(), path.into());
        self
    }
}

/// The fixed alias set, rooted at the project root.
///
/// No existence checks happen here; a missing target directory surfaces as an
/// engine-level resolution error later.
pub fn default_aliases(root: &Path) -> IndexMap<String, PathBuf> {
    let mut aliases = IndexMap::new();
    aliases.insert("@src".to_string(), root.join("src"));
    aliases.insert("@actions".to_string(), root.join("src/redux/actions"));
    aliases.insert("@reducers".to_string(), root.join("src/app/redux/reducers"));
    aliases.insert("@components".to_string(), root.join("src/components"));
    aliases.insert("@pages".to_string(), root.join("src/pages"));
    aliases.insert("@styles".to_string(), root.join("src/styles"));
    aliases.insert("@services".to_string(), root.join("src/services"));
    aliases.insert("@hoc".to_string(), root.join("src/components/hoc"));
    aliases
}
