//! # case-lint-ts
//!
//! Tree-sitter based naming-convention checker for TypeScript and TSX.
//!
//! The walker visits the syntax tree once, in document order, and reports a
//! [`Binding`] for every named function declaration and every `const`
//! declarator with a plain identifier and an initializer. Classes, enums and
//! interfaces are skipped with everything inside them; `const` statements
//! are not descended into. [`check_file`] then judges each binding against
//! the rule keys in [`CheckOptions`].
//!
//! - [`check_file`] / [`collect_bindings`] for direct use
//! - [`TypeScriptChecker`], the [`FileChecker`] used by sessions and the
//!   analyzer
//! - [`Dialect`] for grammar selection

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dialect;
mod node;
mod walker;

use case_lint_core::{Binding, CheckOptions, FileChecker, ParseError, Violation};
use case_lint_core::{TYPESCRIPT, TYPESCRIPT_REACT};

pub use dialect::Dialect;

/// Parses `source` and returns every checkable binding in document order.
///
/// # Errors
///
/// Returns [`ParseError`] if `source` does not parse cleanly.
pub fn collect_bindings(source: &str, file_name: &str) -> Result<Vec<Binding>, ParseError> {
    let tree = Dialect::from_file_name(file_name).parse(source, file_name)?;
    Ok(walker::collect_bindings(&tree, source))
}

/// Checks one TypeScript file against `options`.
///
/// `file_name` only selects the dialect (`.tsx` enables JSX).
///
/// # Errors
///
/// Returns [`ParseError`] if `source` does not parse cleanly; no partial
/// result is produced.
pub fn check_file(
    source: &str,
    file_name: &str,
    options: &CheckOptions,
) -> Result<Vec<Violation>, ParseError> {
    let violations: Vec<Violation> = collect_bindings(source, file_name)?
        .iter()
        .filter_map(|binding| binding.check(options))
        .collect();
    tracing::debug!("{file_name}: {} naming violation(s)", violations.len());
    Ok(violations)
}

/// [`FileChecker`] for `typescript` and `typescriptreact` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptChecker;

impl TypeScriptChecker {
    /// Creates a new checker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileChecker for TypeScriptChecker {
    fn language_ids(&self) -> &'static [&'static str] {
        &[TYPESCRIPT, TYPESCRIPT_REACT]
    }

    fn check_file(
        &self,
        source: &str,
        file_name: &str,
        options: &CheckOptions,
    ) -> Result<Vec<Violation>, ParseError> {
        check_file(source, file_name, options)
    }
}
