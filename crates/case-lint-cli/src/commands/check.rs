//! Check command implementation.

use anyhow::{Context, Result};
use case_lint_core::{Analyzer, Config};
use case_lint_ts::TypeScriptChecker;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::{NamingOverrides, OutputFormat};

/// Runs the check command.
///
/// Returns `true` when the run should fail: an `Error` diagnostic was
/// published or a file could not be parsed.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    exclude: Vec<String>,
    overrides: &NamingOverrides,
    source: &ConfigSource,
) -> Result<bool> {
    let mut config = source.load().with_context(|| match source.path() {
        Some(p) => format!("Failed to load config: {}", p.display()),
        None => "Failed to load default config".to_owned(),
    })?;
    apply_overrides(&mut config, overrides);

    for key in config.naming.unknown_rule_keys() {
        tracing::warn!("Unknown naming rule `{key}`; names of that kind will not be checked");
    }

    let analyzer = build_analyzer(path, exclude, config)?;

    tracing::info!("Checking {}", analyzer.root().display());

    let result = analyzer.analyze().context("Analysis failed")?;

    for failure in &result.parse_errors {
        tracing::warn!("Skipped {}: {}", failure.file.display(), failure.message);
    }

    super::output::print(&result, format, analyzer.root())?;

    Ok(result.has_errors() || result.has_parse_errors())
}

/// An explicit `path` wins over `[analyzer] root`.
fn build_analyzer(path: Option<&Path>, exclude: Vec<String>, config: Config) -> Result<Analyzer> {
    let mut builder = Analyzer::builder()
        .checker(Box::new(TypeScriptChecker::new()))
        .excludes(exclude)
        .config(config);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    builder.build().context("Failed to build analyzer")
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut Config, overrides: &NamingOverrides) {
    let naming = &mut config.naming;
    if let Some(rule) = &overrides.constant_case {
        naming.constant_case.clone_from(rule);
    }
    if let Some(rule) = &overrides.function_case {
        naming.function_case.clone_from(rule);
    }
    if let Some(severity) = overrides.severity {
        naming.severity = severity.into();
    }
    if let Some(locale) = overrides.locale {
        naming.locale = locale.into();
    }
}
