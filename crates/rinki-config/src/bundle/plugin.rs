use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundler plugin descriptor: the package name plus its constructor options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
    /// Injects the emitted bundles into an HTML template
    #[serde(rename = "html-webpack-plugin")]
    Html(HtmlPluginOptions),

    /// Empties the output directory before each build
    #[serde(rename = "clean-webpack-plugin")]
    Clean,

    /// Copies static files into the output directory
    #[serde(rename = "copy-webpack-plugin")]
    CopyFiles(CopyPluginOptions),

    /// Writes extracted CSS to its own files
    #[serde(rename = "mini-css-extract-plugin")]
    MiniCssExtract(MiniCssExtractOptions),
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::Html(_) => "html-webpack-plugin",
            Plugin::Clean => "clean-webpack-plugin",
            Plugin::CopyFiles(_) => "copy-webpack-plugin",
            Plugin::MiniCssExtract(_) => "mini-css-extract-plugin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlPluginOptions {
    pub template: PathBuf,

    #[serde(default)]
    pub minify: HtmlMinifyOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    #[serde(default)]
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CopyPluginOptions {
    #[serde(default)]
    pub patterns: Vec<CopyPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniCssExtractOptions {
    pub filename: String,
}

/// Minimizer plugins run by the optimization stage, in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin")]
pub enum Minimizer {
    #[serde(rename = "css-minimizer-webpack-plugin")]
    CssMinimizer,
    #[serde(rename = "terser-webpack-plugin")]
    Terser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plugin_serializes_with_name_and_options() {
        let plugin = Plugin::MiniCssExtract(MiniCssExtractOptions {
            filename: "[name].css".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&plugin).unwrap(),
            json!({ "plugin": "mini-css-extract-plugin", "options": { "filename": "[name].css" } })
        );
        assert_eq!(
            serde_json::to_value(&Plugin::Clean).unwrap(),
            json!({ "plugin": "clean-webpack-plugin" })
        );
    }

    #[test]
    fn html_minify_uses_camel_case() {
        let options = HtmlPluginOptions {
            template: PathBuf::from("index.html"),
            minify: HtmlMinifyOptions {
                collapse_whitespace: true,
            },
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["minify"]["collapseWhitespace"], json!(true));
    }

    #[test]
    fn minimizer_tags() {
        assert_eq!(
            serde_json::to_value(Minimizer::Terser).unwrap(),
            json!({ "plugin": "terser-webpack-plugin" })
        );
    }
}
