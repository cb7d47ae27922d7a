//! Configuration types for case-lint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::case_rule::CaseRule;
use crate::message::Locale;
use crate::types::{Severity, ViolationKind};

/// Rule keys for a single check run.
///
/// There is deliberately no `Default`; defaults live in [`NamingConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Rule key for `const` bindings holding primitive literals.
    pub constant_case: String,
    /// Rule key for function declarations and function-valued `const`s.
    pub function_case: String,
}

impl CheckOptions {
    /// Creates options from two rule keys.
    #[must_use]
    pub fn new(constant_case: impl Into<String>, function_case: impl Into<String>) -> Self {
        Self {
            constant_case: constant_case.into(),
            function_case: function_case.into(),
        }
    }

    /// The rule key that applies to bindings of `kind`.
    #[must_use]
    pub fn rule_for(&self, kind: ViolationKind) -> &str {
        match kind {
            ViolationKind::Constant => &self.constant_case,
            ViolationKind::Function => &self.function_case,
        }
    }
}

/// Top-level configuration for case-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Naming rules and reporting.
    #[serde(default)]
    pub naming: NamingConfig,

    /// File discovery.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Naming rule selection and diagnostic presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Rule key for constants (default: `UPPER_SNAKE_CASE`).
    #[serde(default = "default_constant_case")]
    pub constant_case: String,

    /// Rule key for functions (default: `camelCase`).
    #[serde(default = "default_function_case")]
    pub function_case: String,

    /// Severity of published diagnostics (default: `Warning`).
    #[serde(default)]
    pub severity: Severity,

    /// Message language (default: `en`).
    #[serde(default)]
    pub locale: Locale,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            constant_case: default_constant_case(),
            function_case: default_function_case(),
            severity: Severity::default(),
            locale: Locale::default(),
        }
    }
}

impl NamingConfig {
    /// The rule keys to hand to a checker.
    #[must_use]
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions::new(&self.constant_case, &self.function_case)
    }

    /// Configured rule keys that name no built-in rule.
    ///
    /// Such keys disable checking for their category rather than erroring.
    #[must_use]
    pub fn unknown_rule_keys(&self) -> Vec<&str> {
        [self.constant_case.as_str(), self.function_case.as_str()]
            .into_iter()
            .filter(|key| CaseRule::from_key(key).is_none())
            .collect()
    }
}

fn default_constant_case() -> String {
    CaseRule::UpperSnakeCase.key().to_owned()
}

fn default_function_case() -> String {
    CaseRule::CamelCase.key().to_owned()
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.naming.constant_case, "UPPER_SNAKE_CASE");
        assert_eq!(config.naming.function_case, "camelCase");
        assert_eq!(config.naming.severity, Severity::Warning);
        assert_eq!(config.naming.locale, Locale::En);
        assert!(config.analyzer.respect_gitignore);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse");
        assert_eq!(config.naming, NamingConfig::default());
        assert_eq!(config.analyzer.exclude, default_exclude());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[naming]
constant_case = "PascalCase"
function_case = "camelCase"
severity = "Error"
locale = "ja"

[analyzer]
root = "./src"
exclude = ["**/generated/**"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.naming.constant_case, "PascalCase");
        assert_eq!(config.naming.severity, Severity::Error);
        assert_eq!(config.naming.locale, Locale::Ja);
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**".to_string()]);
    }

    #[test]
    fn test_unknown_severity_falls_back_to_warning() {
        let config = Config::parse("[naming]\nseverity = \"Loud\"\n").expect("Failed to parse");
        assert_eq!(config.naming.severity, Severity::Warning);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::parse("[naming\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_check_options_follow_naming_config() {
        let naming = NamingConfig {
            constant_case: "PascalCase".into(),
            ..NamingConfig::default()
        };
        let options = naming.check_options();
        assert_eq!(options.rule_for(ViolationKind::Constant), "PascalCase");
        assert_eq!(options.rule_for(ViolationKind::Function), "camelCase");
    }

    #[test]
    fn test_unknown_rule_keys_reported() {
        let naming = NamingConfig {
            function_case: "snake_case".into(),
            ..NamingConfig::default()
        };
        assert_eq!(naming.unknown_rule_keys(), vec!["snake_case"]);
        assert!(NamingConfig::default().unknown_rule_keys().is_empty());
    }
}
