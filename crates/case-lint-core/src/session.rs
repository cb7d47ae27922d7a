//! Editor-style integration: documents, triggers and diagnostic sinks.
//!
//! A [`Session`] sits between a trigger source (file opened, saved,
//! focused, or present at startup) and a [`DiagnosticSink`]. Each handled
//! document has its diagnostics replaced wholesale, so nothing accumulates
//! across runs for the same file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::checker::{FileChecker, ParseError};
use crate::config::NamingConfig;
use crate::message::{format_message_in, Locale};
use crate::types::{Range, Severity, Violation};

/// Source label attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "case-lint";

/// Language id of plain TypeScript documents.
pub const TYPESCRIPT: &str = "typescript";

/// Language id of TSX documents.
pub const TYPESCRIPT_REACT: &str = "typescriptreact";

/// Maps a file extension to an editor language id.
#[must_use]
pub fn language_id_for_path(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str())? {
        "ts" | "mts" | "cts" => Some(TYPESCRIPT),
        "tsx" => Some(TYPESCRIPT_REACT),
        _ => None,
    }
}

/// An open document as the editor sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identity of the document.
    pub path: PathBuf,
    /// Editor language id (e.g., `"typescript"`).
    pub language_id: String,
    /// Full text.
    pub text: String,
}

impl Document {
    /// Creates a document with an explicit language id.
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        language_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    /// Creates a document whose language id is derived from its extension.
    ///
    /// Unrecognized extensions get `"plaintext"`.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let language_id = language_id_for_path(&path).unwrap_or("plaintext");
        Self::new(path, language_id, text)
    }

    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns the IO error if the file cannot be read as UTF-8.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(path, text))
    }
}

/// Why a document is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The document was opened.
    Open,
    /// The document was saved.
    Save,
    /// The document became the active editor.
    FocusChange,
    /// The document was already open when checking started.
    Startup,
}

/// A diagnostic ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Highlighted range.
    pub range: Range,
    /// Localized message.
    pub message: String,
    /// Configured severity.
    pub severity: Severity,
    /// Source label, always [`DIAGNOSTIC_SOURCE`].
    pub source: String,
    /// The violation this diagnostic reports.
    pub violation: Violation,
}

impl Diagnostic {
    /// Builds a diagnostic for `violation`.
    #[must_use]
    pub fn from_violation(violation: Violation, severity: Severity, locale: Locale) -> Self {
        Self {
            range: violation.range(),
            message: format_message_in(&violation, locale),
            severity,
            source: DIAGNOSTIC_SOURCE.to_owned(),
            violation,
        }
    }
}

/// Receives diagnostics keyed by file.
pub trait DiagnosticSink {
    /// Replaces every diagnostic for `file`.
    fn set(&mut self, file: &Path, diagnostics: Vec<Diagnostic>);

    /// Removes every diagnostic for `file`.
    fn clear(&mut self, file: &Path);

    /// Removes every diagnostic.
    fn clear_all(&mut self);
}

/// In-memory [`DiagnosticSink`], ordered by file path.
#[derive(Debug, Default)]
pub struct DiagnosticCollection {
    entries: BTreeMap<PathBuf, Vec<Diagnostic>>,
}

impl DiagnosticCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics currently published for `file`.
    #[must_use]
    pub fn get(&self, file: &Path) -> &[Diagnostic] {
        self.entries
            .get(file)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Files with at least one diagnostic, with their diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Diagnostic])> {
        self.entries
            .iter()
            .map(|(path, diags)| (path.as_path(), diags.as_slice()))
    }

    /// Number of files with diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no file has diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn set(&mut self, file: &Path, diagnostics: Vec<Diagnostic>) {
        if diagnostics.is_empty() {
            self.entries.remove(file);
        } else {
            self.entries.insert(file.to_path_buf(), diagnostics);
        }
    }

    fn clear(&mut self, file: &Path) {
        self.entries.remove(file);
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }
}

/// Outcome of handling one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// The document's language is not handled by the checker.
    Ignored,
    /// The document was checked and its diagnostics replaced.
    Checked {
        /// Number of violations published.
        violations: usize,
    },
}

/// Connects a checker, the naming configuration and a diagnostic sink.
pub struct Session<'c, S> {
    checker: &'c dyn FileChecker,
    config: NamingConfig,
    sink: S,
}

impl<'c, S: DiagnosticSink> Session<'c, S> {
    /// Creates a session.
    pub fn new(checker: &'c dyn FileChecker, config: NamingConfig, sink: S) -> Self {
        Self {
            checker,
            config,
            sink,
        }
    }

    /// The configuration used for the next check.
    #[must_use]
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Replaces the configuration. Published diagnostics are kept until
    /// their documents are handled again.
    pub fn reload(&mut self, config: NamingConfig) {
        self.config = config;
    }

    /// The sink diagnostics are published to.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Checks `document` and replaces its diagnostics.
    ///
    /// Documents in other languages are ignored and their diagnostics are
    /// left untouched. When the text fails to parse, the document's
    /// diagnostics are cleared and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the checker's [`ParseError`].
    pub fn handle(
        &mut self,
        trigger: Trigger,
        document: &Document,
    ) -> Result<DocumentStatus, ParseError> {
        if !self
            .checker
            .language_ids()
            .contains(&document.language_id.as_str())
        {
            debug!(
                "Ignoring {} ({}) on {trigger:?}",
                document.path.display(),
                document.language_id
            );
            return Ok(DocumentStatus::Ignored);
        }

        debug!("Checking {} on {trigger:?}", document.path.display());

        let options = self.config.check_options();
        let file_name = document.path.to_string_lossy();
        match self.checker.check_file(&document.text, &file_name, &options) {
            Ok(violations) => {
                let count = violations.len();
                let diagnostics = violations
                    .into_iter()
                    .map(|v| Diagnostic::from_violation(v, self.config.severity, self.config.locale))
                    .collect();
                self.sink.set(&document.path, diagnostics);
                Ok(DocumentStatus::Checked { violations: count })
            }
            Err(e) => {
                warn!("Failed to parse {}: {e}", document.path.display());
                self.sink.clear(&document.path);
                Err(e)
            }
        }
    }

    /// Drops every published diagnostic.
    pub fn dispose(&mut self) {
        self.sink.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckOptions;
    use crate::types::ViolationKind;

    /// Flags every line starting with `const bad` as a constant violation,
    /// and fails on lines containing `@@`.
    struct LineChecker;

    impl FileChecker for LineChecker {
        fn language_ids(&self) -> &'static [&'static str] {
            &[TYPESCRIPT, TYPESCRIPT_REACT]
        }

        fn check_file(
            &self,
            source: &str,
            file_name: &str,
            options: &CheckOptions,
        ) -> Result<Vec<Violation>, ParseError> {
            let mut violations = Vec::new();
            for (line, text) in source.lines().enumerate() {
                if text.contains("@@") {
                    return Err(ParseError::Syntax {
                        file: file_name.to_owned(),
                        line: line + 1,
                        column: 1,
                    });
                }
                if text.starts_with("const bad") {
                    violations.push(Violation {
                        name: "bad".into(),
                        line,
                        character: 6,
                        end_character: 9,
                        kind: ViolationKind::Constant,
                        rule: options.constant_case.clone(),
                        offset: 0,
                    });
                }
            }
            Ok(violations)
        }
    }

    fn session(config: NamingConfig) -> Session<'static, DiagnosticCollection> {
        Session::new(&LineChecker, config, DiagnosticCollection::new())
    }

    #[test]
    fn language_ids_follow_extensions() {
        assert_eq!(language_id_for_path(Path::new("a.ts")), Some(TYPESCRIPT));
        assert_eq!(language_id_for_path(Path::new("a.mts")), Some(TYPESCRIPT));
        assert_eq!(language_id_for_path(Path::new("a.tsx")), Some(TYPESCRIPT_REACT));
        assert_eq!(language_id_for_path(Path::new("a.js")), None);
        assert_eq!(language_id_for_path(Path::new("Makefile")), None);
    }

    #[test]
    fn publishes_diagnostics_with_configured_severity() {
        let config = NamingConfig {
            severity: Severity::Error,
            ..NamingConfig::default()
        };
        let mut s = session(config);
        let doc = Document::from_text("src/a.ts", "const bad = 1;\n");

        let status = s.handle(Trigger::Open, &doc).unwrap();
        assert_eq!(status, DocumentStatus::Checked { violations: 1 });

        let diags = s.sink().get(Path::new("src/a.ts"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].source, DIAGNOSTIC_SOURCE);
        assert_eq!(diags[0].violation.rule, "UPPER_SNAKE_CASE");
        assert!(diags[0].message.contains("\"bad\""));
    }

    #[test]
    fn replaces_instead_of_accumulating() {
        let mut s = session(NamingConfig::default());
        let doc = Document::from_text("a.ts", "const bad = 1;\nconst bad = 2;\n");
        s.handle(Trigger::Open, &doc).unwrap();
        s.handle(Trigger::Save, &doc).unwrap();
        assert_eq!(s.sink().get(Path::new("a.ts")).len(), 2);

        let fixed = Document::from_text("a.ts", "const GOOD = 1;\n");
        s.handle(Trigger::Save, &fixed).unwrap();
        assert!(s.sink().get(Path::new("a.ts")).is_empty());
        assert!(s.sink().is_empty());
    }

    #[test]
    fn ignores_other_languages() {
        let mut s = session(NamingConfig::default());
        let doc = Document::from_text("a.js", "const bad = 1;\n");
        assert_eq!(s.handle(Trigger::FocusChange, &doc).unwrap(), DocumentStatus::Ignored);
        assert!(s.sink().is_empty());
    }

    #[test]
    fn parse_error_clears_previous_diagnostics() {
        let mut s = session(NamingConfig::default());
        s.handle(Trigger::Open, &Document::from_text("a.ts", "const bad = 1;\n"))
            .unwrap();
        assert_eq!(s.sink().len(), 1);

        let broken = Document::from_text("a.ts", "const bad = @@;\n");
        let err = s.handle(Trigger::Save, &broken).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
        assert!(s.sink().is_empty());
    }

    #[test]
    fn reload_applies_to_next_check() {
        let mut s = session(NamingConfig::default());
        s.reload(NamingConfig {
            constant_case: "PascalCase".into(),
            locale: Locale::Ja,
            ..NamingConfig::default()
        });
        let doc = Document::from_text("a.tsx", "const bad = 1;\n");
        s.handle(Trigger::Startup, &doc).unwrap();
        let diags = s.sink().get(Path::new("a.tsx"));
        assert_eq!(diags[0].violation.rule, "PascalCase");
        assert!(diags[0].message.starts_with("定数名"));
    }

    #[test]
    fn dispose_clears_everything() {
        let mut s = session(NamingConfig::default());
        s.handle(Trigger::Open, &Document::from_text("a.ts", "const bad = 1;\n"))
            .unwrap();
        s.handle(Trigger::Open, &Document::from_text("b.ts", "const bad = 1;\n"))
            .unwrap();
        assert_eq!(s.sink().len(), 2);
        s.dispose();
        assert!(s.into_sink().is_empty());
    }
}
