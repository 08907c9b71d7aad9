use std::fmt;

use serde::{Deserialize, Serialize};

/// A handler stage in a rule's `use` chain.
///
/// The bundler applies a chain last-to-first: in `[extract, css, sass]`
/// the sass stage runs first and extraction runs last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Loader {
    /// Extracts compiled CSS into standalone files
    #[serde(rename = "mini-css-extract-plugin/loader")]
    ExtractCss,
    #[serde(rename = "css-loader")]
    Css,
    #[serde(rename = "sass-loader")]
    Sass,
    /// Emits the file unchanged and exports its public URL
    #[serde(rename = "file-loader")]
    File,
    #[serde(rename = "babel-loader")]
    Babel,
}

impl Loader {
    pub fn as_str(self) -> &'static str {
        match self {
            Loader::ExtractCss => "mini-css-extract-plugin/loader",
            Loader::Css => "css-loader",
            Loader::Sass => "sass-loader",
            Loader::File => "file-loader",
            Loader::Babel => "babel-loader",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Babel preset names passed through `babel-loader` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Baseline environment targeting, always present
    #[serde(rename = "@babel/preset-env")]
    Env,
    #[serde(rename = "@babel/preset-typescript")]
    TypeScript,
    #[serde(rename = "@babel/preset-react")]
    React,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Env => "@babel/preset-env",
            Preset::TypeScript => "@babel/preset-typescript",
            Preset::React => "@babel/preset-react",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoaderOptions {
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// One entry of a `use` chain: either a bare loader name or a loader with
/// options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UseEntry {
    Loader(Loader),
    WithOptions { loader: Loader, options: LoaderOptions },
}

impl UseEntry {
    pub fn loader(&self) -> Loader {
        match self {
            UseEntry::Loader(loader) | UseEntry::WithOptions { loader, .. } => *loader,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        match self {
            UseEntry::Loader(_) => &[],
            UseEntry::WithOptions { options, .. } => &options.presets,
        }
    }
}

impl From<Loader> for UseEntry {
    fn from(loader: Loader) -> Self {
        UseEntry::Loader(loader)
    }
}

impl fmt::Display for UseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseEntry::Loader(loader) => write!(f, "{loader}"),
            UseEntry::WithOptions { loader, options } => {
                write!(f, "{loader}")?;
                if !options.presets.is_empty() {
                    let presets: Vec<_> = options.presets.iter().map(|p| p.as_str()).collect();
                    write!(f, " [{}]", presets.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_loader_serializes_as_string() {
        let entry = UseEntry::from(Loader::Css);
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!("css-loader"));
    }

    #[test]
    fn loader_with_options_serializes_as_object() {
        let entry = UseEntry::WithOptions {
            loader: Loader::Babel,
            options: LoaderOptions {
                presets: vec![Preset::Env, Preset::React],
            },
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "loader": "babel-loader",
                "options": { "presets": ["@babel/preset-env", "@babel/preset-react"] }
            })
        );
        assert_eq!(
            entry.to_string(),
            "babel-loader [@babel/preset-env, @babel/preset-react]"
        );
    }

    #[test]
    fn as_str_matches_serde_names() {
        for loader in [
            Loader::ExtractCss,
            Loader::Css,
            Loader::Sass,
            Loader::File,
            Loader::Babel,
        ] {
            assert_eq!(serde_json::to_value(loader).unwrap(), json!(loader.as_str()));
        }
        for preset in [Preset::Env, Preset::TypeScript, Preset::React] {
            assert_eq!(serde_json::to_value(preset).unwrap(), json!(preset.as_str()));
        }
    }
}
