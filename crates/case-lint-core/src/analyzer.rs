//! Runs a checker over every matching file under a root.
//!
//! Each file is an independent document handed to a [`Session`] with the
//! [`Trigger::Startup`] trigger; the session's collection becomes the
//! [`LintResult`].

use crate::checker::CheckerBox;
use crate::config::Config;
use crate::session::{language_id_for_path, DiagnosticCollection, Document, Session, Trigger};
use crate::types::{FileReport, LintResult, ParseFailure};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error resolving the root.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// No checker was registered.
    #[error("No checker configured")]
    MissingChecker,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    checker: Option<CheckerBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file or directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the language checker.
    #[must_use]
    pub fn checker(mut self, checker: CheckerBox) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if no checker was set, an exclude pattern is not a
    /// valid glob, or the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let checker = self.checker.ok_or(AnalyzerError::MissingChecker)?;
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        for pattern in &exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        Ok(Analyzer {
            root,
            checker,
            exclude_patterns,
            config,
        })
    }
}

/// Checks every supported file under a root.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    checker: CheckerBox,
    exclude_patterns: Vec<String>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files that cannot be read or fail to parse are recorded in
    /// [`LintResult::parse_errors`]; the remaining files are still checked.
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut session = Session::new(
            self.checker.as_ref(),
            self.config.naming.clone(),
            DiagnosticCollection::new(),
        );
        let mut result = LintResult::new();

        for file_path in &files {
            let rel = self.relative_path(file_path);
            result.files_checked += 1;

            let text = match std::fs::read_to_string(file_path) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping unreadable {}: {e}", file_path.display());
                    result.parse_errors.push(ParseFailure {
                        file: rel,
                        message: format!("Failed to read {}: {e}", file_path.display()),
                    });
                    continue;
                }
            };
            let document = Document::from_text(rel.clone(), text);

            if let Err(e) = session.handle(Trigger::Startup, &document) {
                result.parse_errors.push(ParseFailure {
                    file: rel,
                    message: e.to_string(),
                });
            }
        }

        result.reports = session
            .into_sink()
            .iter()
            .map(|(file, diagnostics)| FileReport {
                file: file.to_path_buf(),
                diagnostics: diagnostics.to_vec(),
            })
            .collect();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violation_count(),
            result.files_checked
        );

        Ok(result)
    }

    /// Path used as the document identity: relative to the root, or the
    /// file name when the root is the file itself.
    fn relative_path(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => path
                .file_name()
                .map_or_else(|| path.to_path_buf(), PathBuf::from),
        }
    }

    /// Discovers all files the checker handles.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let supported = self.checker.language_ids();

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(language_id) = language_id_for_path(path) else {
                continue;
            };
            if !supported.contains(&language_id) {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    ///
    /// Only the part below the root is matched, so directories above the
    /// root never cause exclusions.
    fn should_exclude(&self, path: &Path) -> bool {
        let rel = self.relative_path(path);
        let rel_str = rel.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            let glob_match = glob::Pattern::new(pattern)
                .is_ok_and(|glob_pattern| glob_pattern.matches(&rel_str));
            // "**/dist/**" and bare "dist" also match a `dist` directory at any depth
            glob_match || contains_components(&rel, &pattern.replace("**", ""))
        })
    }
}

/// Whether `needle`'s `/`-separated segments appear as consecutive whole
/// components of `path`.
fn contains_components(path: &Path, needle: &str) -> bool {
    let segments: Vec<&str> = needle.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return false;
    }
    let components: Vec<&str> = path
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    components
        .windows(segments.len())
        .any(|window| window == segments.as_slice())
}
