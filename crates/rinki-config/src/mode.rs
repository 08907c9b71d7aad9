//! Build mode and its detection from the process environment.

use std::fmt;

use figment::providers::Env;
use serde::{Deserialize, Serialize};

/// The bundler mode. Exactly one of the two is active for a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Anything that is not explicitly development ships as production.
    #[default]
    Production,
}

impl Mode {
    /// Map a raw `NODE_ENV` value to a mode.
    ///
    /// Only the exact string `development` selects development; an absent,
    /// empty or unknown value (`staging`, `test`, ...) selects production.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn is_production(self) -> bool {
        !self.is_development()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the environment variables that drive resolution.
///
/// Read once at startup and passed around by value; nothing else in the crate
/// looks at the process environment for the mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub node_env: Option<String>,
}

impl BuildEnv {
    pub const NODE_ENV: &'static str = "NODE_ENV";

    /// Read `NODE_ENV` from the process environment.
    ///
    /// The value is taken verbatim: no trimming or unquoting, so only an
    /// exact `development` selects development. Never fails.
    pub fn detect() -> Self {
        let node_env = Env::raw()
            .only(&[Self::NODE_ENV])
            .iter()
            .next()
            .map(|(_, value)| value);

        tracing::debug!(node_env = ?node_env, "detected build environment");
        Self { node_env }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_node_env(self.node_env.as_deref())
    }
}
