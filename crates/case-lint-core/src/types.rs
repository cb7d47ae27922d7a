//! Core types for naming violations and lint results.

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::case_rule::example_for;
use crate::session::Diagnostic;

/// Severity attached to reported diagnostics.
///
/// Configuration accepts `Error`, `Warning`, `Information` and `Hint` (or
/// their lowercase forms, plus `info`). Anything else falls back to
/// [`Severity::Warning`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    /// Faint hint, usually rendered without emphasis.
    Hint,
    /// Informational message.
    Information,
    /// Warning that should be addressed.
    #[default]
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses a configured severity name, falling back to `Warning`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "Error" | "error" => Self::Error,
            "Warning" | "warning" => Self::Warning,
            "Information" | "information" | "info" => Self::Information,
            "Hint" | "hint" => Self::Hint,
            other => {
                tracing::warn!("Unknown severity {other:?}, using warning");
                Self::Warning
            }
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Information => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Which rule category a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// A `const` bound to a primitive literal.
    Constant,
    /// A function declaration or a `const` bound to a function value.
    Function,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant => write!(f, "constant"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// A position in a document.
///
/// Both fields are 0-based; `character` counts UTF-16 code units, the
/// unit editors use for diagnostic ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in UTF-16 code units (0-indexed).
    pub character: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A half-open range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Creates a new range.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A binding whose name does not follow the applicable rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending identifier.
    pub name: String,
    /// Line of the identifier (0-indexed).
    pub line: usize,
    /// Start column in UTF-16 code units (0-indexed).
    pub character: usize,
    /// End column, `character` plus the identifier's UTF-16 length.
    pub end_character: usize,
    /// Constant or function.
    pub kind: ViolationKind,
    /// Rule key the name was checked against.
    pub rule: String,
    /// Byte offset of the identifier in the source text.
    pub offset: usize,
}

impl Violation {
    /// The highlighted range of the identifier.
    #[must_use]
    pub fn range(&self) -> Range {
        Range::new(
            Position::new(self.line, self.character),
            Position::new(self.line, self.end_character),
        )
    }

    /// Canonical example for this violation's rule.
    #[must_use]
    pub fn example(&self) -> &str {
        example_for(&self.rule)
    }
}

/// Converts a violation to a miette diagnostic for rich terminal display.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
#[diagnostic(code(case_lint::naming))]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ViolationDiagnostic {
    /// Wraps a violation together with its rendered message.
    #[must_use]
    pub fn new(violation: &Violation, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: Some(format!(
                "rename to follow {}, e.g. {}",
                violation.rule,
                violation.example()
            )),
            span: SourceSpan::from((violation.offset, violation.name.len())),
            label_message: format!("{} name", violation.kind),
        }
    }
}

/// Per-severity diagnostic totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    /// `Error` diagnostics.
    pub errors: usize,
    /// `Warning` diagnostics.
    pub warnings: usize,
    /// `Information` diagnostics.
    pub infos: usize,
    /// `Hint` diagnostics.
    pub hints: usize,
}

/// Diagnostics published for a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// File path relative to the analysis root.
    pub file: PathBuf,
    /// Diagnostics in document order.
    pub diagnostics: Vec<Diagnostic>,
}

/// A file that could not be parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseFailure {
    /// File path relative to the analysis root.
    pub file: PathBuf,
    /// Rendered parse error.
    pub message: String,
}

/// Result of running a naming check over a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Files with at least one diagnostic, sorted by path.
    pub reports: Vec<FileReport>,
    /// Files that failed to parse.
    pub parse_errors: Vec<ParseFailure>,
    /// Number of files checked, including those that failed to parse.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over every diagnostic, file by file.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reports.iter().flat_map(|r| r.diagnostics.iter())
    }

    /// Returns true if any diagnostic has `Error` severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(|d| d.severity == Severity::Error)
    }

    /// Returns true if any file failed to parse.
    #[must_use]
    pub fn has_parse_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }

    /// Total number of diagnostics.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    /// Counts diagnostics by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for d in self.diagnostics() {
            match d.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Information => counts.infos += 1,
                Severity::Hint => counts.hints += 1,
            }
        }
        counts
    }
}
