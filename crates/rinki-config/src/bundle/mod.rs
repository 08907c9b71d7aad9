//! The resolved bundler configuration and its parts.
//!
//! Field names serialize to the bundler's own schema (`devServer`,
//! `splitChunks`, `module.rules`, ...), so [`BuildConfiguration::to_value`]
//! can be handed to it unchanged.

mod loader;
mod plugin;
mod rule;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use loader::{Loader, LoaderOptions, Preset, UseEntry};
pub use plugin::{
    CopyPattern, CopyPluginOptions, HtmlMinifyOptions, HtmlPluginOptions, MiniCssExtractOptions,
    Minimizer, Plugin,
};
pub use rule::{FilePattern, ModuleRule};

use crate::dev::{DevServer, Devtool};
use crate::error::Result;
use crate::mode::Mode;

/// Complete configuration for one bundler invocation.
///
/// Built once by [`crate::ConfigResolver::resolve`] and not mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Base directory entry points are resolved against
    pub context: PathBuf,

    pub mode: Mode,

    /// Bundle name to its modules, in load order
    pub entry: IndexMap<String, Vec<String>>,

    pub output: OutputOptions,

    pub resolve: ResolveOptions,

    pub optimization: OptimizationPolicy,

    pub dev_server: DevServer,

    pub devtool: Devtool,

    pub plugins: Vec<Plugin>,

    pub module: ModuleOptions,
}

impl BuildConfiguration {
    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    /// The first rule that handles `path`, mirroring the bundler's top-down
    /// rule evaluation.
    ///
    /// # Example
    ///
    /// ```
    /// use rinki_config::{ConfigResolver, Loader, Mode, ProjectLayout, ProjectSettings};
    /// use std::path::Path;
    ///
    /// let config = ConfigResolver::new(
    ///     Mode::Production,
    ///     ProjectLayout::new("/app"),
    ///     ProjectSettings::default(),
    /// )
    /// .resolve();
    ///
    /// let rule = config.rule_for(Path::new("src/theme.scss")).unwrap();
    /// assert_eq!(rule.use_entries.last().unwrap().loader(), Loader::Sass);
    /// ```
    pub fn rule_for(&self, path: &Path) -> Option<&ModuleRule> {
        self.module.rules.iter().find(|rule| rule.matches(path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Filename template, e.g. `[name].js` or `[name].[hash].js`
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for extensionless imports
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Alias prefix to absolute directory. Targets are not checked for
    /// existence.
    #[serde(default)]
    pub alias: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    pub split_chunks: SplitChunks,

    /// Empty while developing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<Minimizer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

/// Which chunks are eligible for shared-dependency splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Evaluated top to bottom
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}
