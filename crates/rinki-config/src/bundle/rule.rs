use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bundle::loader::UseEntry;
use crate::error::{ConfigError, Result};

/// A regular expression tested against module paths.
///
/// Serialized as its source text; two patterns are equal when their sources
/// are.
#[derive(Debug, Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self)
            .map_err(|source_err| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// Compile one of the built-in rule patterns.
    pub(crate) fn builtin(source: &'static str) -> Self {
        Self(Regex::new(source).expect("built-in file pattern must compile"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.0.is_match(&path.to_string_lossy())
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for FilePattern {}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        FilePattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// One entry of `module.rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: FilePattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    /// Handler chain, applied last-to-first
    #[serde(rename = "use")]
    pub use_entries: Vec<UseEntry>,
}

impl ModuleRule {
    pub fn new(test: FilePattern, use_entries: Vec<UseEntry>) -> Self {
        Self {
            test,
            exclude: None,
            use_entries,
        }
    }

    pub fn excluding(mut self, pattern: FilePattern) -> Self {
        self.exclude = Some(pattern);
        self
    }

    /// Whether this rule handles `path`: `test` matches and `exclude` does not.
    pub fn matches(&self, path: &Path) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::loader::Loader;

    #[test]
    fn invalid_pattern_is_reported() {
        let err = FilePattern::new(r"\.(css$").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == r"\.(css$"));
    }

    #[test]
    fn exclude_wins_over_test() {
        let rule = ModuleRule::new(
            FilePattern::builtin(r"\.js$"),
            vec![UseEntry::from(Loader::Babel)],
        )
        .excluding(FilePattern::builtin("node_modules"));

        assert!(rule.matches(Path::new("src/index.js")));
        assert!(!rule.matches(Path::new("node_modules/react/index.js")));
        assert!(!rule.matches(Path::new("src/index.jsx")));
    }

    #[test]
    fn pattern_round_trips_through_serde() {
        let pattern = FilePattern::builtin(r"\.s[ac]ss$");
        let value = serde_json::to_value(&pattern).unwrap();
        assert_eq!(value, serde_json::json!(r"\.s[ac]ss$"));
        let back: FilePattern = serde_json::from_value(value).unwrap();
        assert_eq!(back, pattern);
        assert_eq!(pattern.to_string(), r"/\.s[ac]ss$/");
    }
}
