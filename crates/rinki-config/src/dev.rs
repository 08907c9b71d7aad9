//! Development server and devtool descriptors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServer {
    pub port: u16,

    /// Hot module replacement, on only while developing
    #[serde(default)]
    pub hot: bool,
}

/// Source map style emitted by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Devtool {
    #[serde(rename = "source-map")]
    SourceMap,
    /// Serialized as the empty string, which the bundler reads as "off"
    #[serde(rename = "")]
    Disabled,
}
