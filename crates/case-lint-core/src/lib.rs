//! # case-lint-core
//!
//! Language-independent core of the case-lint naming-convention linter.
//!
//! This crate provides:
//!
//! - [`CaseRule`] and the fail-open lookups [`check_naming_convention`] /
//!   [`example_for`]
//! - [`Binding`], the unit a language walker reports, and [`Violation`]
//! - [`format_message`] for localized messages
//! - [`FileChecker`], the trait a language checker implements
//! - [`Session`] and [`DiagnosticSink`] for editor-style diagnostics
//! - [`Analyzer`] for checking every file under a directory
//!
//! ## Example
//!
//! ```ignore
//! use case_lint_core::{Analyzer, Config};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .checker(Box::new(TypeScriptChecker::new()))
//!     .config(Config::default())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod binding;
mod case_rule;
mod checker;
mod config;
mod message;
mod session;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use binding::{Binding, BindingOrigin, InitializerShape};
pub use case_rule::{check_naming_convention, example_for, CaseRule};
pub use checker::{CheckerBox, FileChecker, ParseError};
pub use config::{AnalyzerConfig, CheckOptions, Config, ConfigError, NamingConfig};
pub use message::{format_message, format_message_in, Locale};
pub use session::{
    language_id_for_path, Diagnostic, DiagnosticCollection, DiagnosticSink, Document,
    DocumentStatus, Session, Trigger, DIAGNOSTIC_SOURCE, TYPESCRIPT, TYPESCRIPT_REACT,
};
pub use types::{
    FileReport, LintResult, ParseFailure, Position, Range, Severity, SeverityCounts, Violation,
    ViolationDiagnostic, ViolationKind,
};
