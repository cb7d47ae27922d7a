//! Built-in naming rules.
//!
//! The table is fixed: each [`CaseRule`] pairs a rule key with an anchored
//! pattern and one canonical example. Lookups by key return `None` for
//! unknown keys, and the free functions [`check_naming_convention`] and
//! [`example_for`] turn that into the fail-open policy: an unknown key
//! never reports a violation, and its "example" is the key itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A naming convention a binding can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseRule {
    /// `MAX_RETRY`
    #[serde(rename = "UPPER_SNAKE_CASE")]
    UpperSnakeCase,
    /// `fetchData`
    #[serde(rename = "camelCase")]
    CamelCase,
    /// `FetchData`
    #[serde(rename = "PascalCase")]
    PascalCase,
}

fn compile(key: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("{key} pattern: {e}"))
}

static UPPER_SNAKE_CASE_RE: Lazy<Regex> =
    Lazy::new(|| compile("UPPER_SNAKE_CASE", CaseRule::UpperSnakeCase.pattern()));
static CAMEL_CASE_RE: Lazy<Regex> =
    Lazy::new(|| compile("camelCase", CaseRule::CamelCase.pattern()));
static PASCAL_CASE_RE: Lazy<Regex> =
    Lazy::new(|| compile("PascalCase", CaseRule::PascalCase.pattern()));

impl CaseRule {
    /// Every built-in rule, in listing order.
    pub const ALL: [Self; 3] = [Self::UpperSnakeCase, Self::CamelCase, Self::PascalCase];

    /// Looks up a rule by its key. Keys are case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.key() == key)
    }

    /// The key used in configuration and messages.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::UpperSnakeCase => "UPPER_SNAKE_CASE",
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
        }
    }

    /// The anchored regular expression a name must match.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::UpperSnakeCase => r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)*$",
            Self::CamelCase => r"^[a-z][a-zA-Z0-9]*$",
            Self::PascalCase => r"^[A-Z][a-zA-Z0-9]*$",
        }
    }

    /// A name that follows this rule, shown in violation messages.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::UpperSnakeCase => "MAX_RETRY",
            Self::CamelCase => "fetchData",
            Self::PascalCase => "FetchData",
        }
    }

    /// Returns `true` if `name` follows this rule.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        let re: &Regex = match self {
            Self::UpperSnakeCase => &UPPER_SNAKE_CASE_RE,
            Self::CamelCase => &CAMEL_CASE_RE,
            Self::PascalCase => &PASCAL_CASE_RE,
        };
        re.is_match(name)
    }
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Checks `name` against the rule registered under `rule_key`.
///
/// Unknown keys always pass.
#[must_use]
pub fn check_naming_convention(name: &str, rule_key: &str) -> bool {
    CaseRule::from_key(rule_key).map_or(true, |rule| rule.matches(name))
}

/// Returns the canonical example for `rule_key`, or the key itself when no
/// such rule exists.
#[must_use]
pub fn example_for(rule_key: &str) -> &str {
    CaseRule::from_key(rule_key).map_or(rule_key, |rule| rule.example())
}
