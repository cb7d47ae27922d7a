//! The seam between the integration layer and language checkers.

use miette::Diagnostic as MietteDiagnostic;

use crate::config::CheckOptions;
use crate::types::Violation;

/// Source text that could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, MietteDiagnostic)]
pub enum ParseError {
    /// The text contains a syntax error.
    #[error("{file}:{line}:{column}: syntax error")]
    #[diagnostic(
        code(case_lint::parse),
        help("naming conventions are only checked in files that parse cleanly")
    )]
    Syntax {
        /// File identifier handed to the checker.
        file: String,
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error in bytes (1-indexed).
        column: usize,
    },

    /// The parser gave up without producing a tree.
    #[error("{file}: parser produced no syntax tree")]
    #[diagnostic(code(case_lint::parse))]
    Unparsable {
        /// File identifier handed to the checker.
        file: String,
    },

    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    #[diagnostic(code(case_lint::grammar))]
    Grammar {
        /// Grammar name.
        language: &'static str,
        /// Loader error.
        message: String,
    },
}

/// A language-specific naming checker.
///
/// Implementations must be pure: the same text, file identifier and options
/// always produce the same violations, in document order.
pub trait FileChecker: Send + Sync {
    /// Editor language identifiers this checker handles
    /// (e.g., `"typescript"`).
    fn language_ids(&self) -> &'static [&'static str];

    /// Checks one file.
    ///
    /// `file_name` may select a dialect (for example by extension); the
    /// checker never reads it from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `source` is not valid source text.
    fn check_file(
        &self,
        source: &str,
        file_name: &str,
        options: &CheckOptions,
    ) -> Result<Vec<Violation>, ParseError>;
}

/// Type alias for boxed checker trait objects.
pub type CheckerBox = Box<dyn FileChecker>;
