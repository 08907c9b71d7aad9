//! Project settings and the fixed filesystem layout derived from the root.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tunables that are not derived from the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Port the dev server listens on
    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,

    /// HTML template handed to the html plugin, relative to the context dir
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            dev_server_port: default_dev_server_port(),
            html_template: default_html_template(),
        }
    }
}

impl ProjectSettings {
    pub const FILE_NAME: &'static str = "rinki.toml";
    pub const ENV_PREFIX: &'static str = "RINKI_";

    /// Load settings for a project root.
    /// Priority: environment variables > rinki.toml > defaults
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(Self::FILE_NAME);
        tracing::debug!("loading project settings from {}", path.display());

        let settings: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(Self::ENV_PREFIX))
            .extract()?;

        if settings.dev_server_port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dev_server_port".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }

        Ok(settings)
    }
}

fn default_dev_server_port() -> u16 {
    4500
}

fn default_html_template() -> PathBuf {
    PathBuf::from("../public/index.html")
}

/// Absolute paths derived from the project root.
///
/// Nothing here touches the filesystem; paths are joined, not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source directory, also the bundler's `context`
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    pub fn favicon(&self) -> PathBuf {
        self.src_dir().join("favicon.ico")
    }

    /// Import aliases, in the order the resolver tries them.
    pub fn aliases(&self) -> IndexMap<String, PathBuf> {
        let src = self.src_dir();
        IndexMap::from([
            ("@components".to_string(), src.join("components")),
            ("@contexts".to_string(), src.join("contexts")),
            ("@styles".to_string(), src.join("styles")),
            ("@assets".to_string(), self.assets_dir()),
            ("@".to_string(), src),
            // Trailing separator: `!/foo` resolves to `<root>/foo`.
            ("!".to_string(), self.root.join("")),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_joins_fixed_paths() {
        let layout = ProjectLayout::new("/work/app");
        assert_eq!(layout.src_dir(), PathBuf::from("/work/app/src"));
        assert_eq!(layout.output_dir(), PathBuf::from("/work/app/build"));
        assert_eq!(layout.favicon(), PathBuf::from("/work/app/src/favicon.ico"));
    }

    #[test]
    fn aliases_keep_declaration_order() {
        let aliases = ProjectLayout::new("/work/app").aliases();
        let keys: Vec<_> = aliases.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["@components", "@contexts", "@styles", "@assets", "@", "!"]
        );
        assert_eq!(aliases["@assets"], PathBuf::from("/work/app/assets"));
        assert_eq!(aliases["!"], PathBuf::from("/work/app/"));
    }

    #[test]
    fn settings_defaults() {
        let settings = ProjectSettings::default();
        assert_eq!(settings.dev_server_port, 4500);
        assert_eq!(settings.html_template, PathBuf::from("../public/index.html"));
    }
}
