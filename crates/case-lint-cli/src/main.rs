//! case-lint CLI tool.
//!
//! Usage:
//! ```bash
//! case-lint check [OPTIONS] [PATH]
//! case-lint list-rules
//! case-lint init
//! ```

use anyhow::Result;
use case_lint_core::{Locale, Severity};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming-convention linter for TypeScript constants and functions
#[derive(Parser)]
#[command(name = "case-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a file or every TypeScript file under a directory
    Check {
        /// Path to analyze (default: `[analyzer] root` from the config)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        #[command(flatten)]
        overrides: NamingOverrides,
    },

    /// List available naming rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Command-line overrides for the `[naming]` config section.
#[derive(clap::Args, Debug, Default)]
pub struct NamingOverrides {
    /// Rule key for constants (e.g. UPPER_SNAKE_CASE)
    #[arg(long)]
    pub constant_case: Option<String>,

    /// Rule key for functions (e.g. camelCase)
    #[arg(long)]
    pub function_case: Option<String>,

    /// Severity of reported diagnostics
    #[arg(long)]
    pub severity: Option<SeverityArg>,

    /// Message language
    #[arg(long)]
    pub locale: Option<LocaleArg>,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source excerpts rendered by miette.
    Pretty,
}

/// Severity accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SeverityArg {
    /// Error.
    Error,
    /// Warning.
    Warning,
    /// Information.
    #[value(alias = "info")]
    Information,
    /// Hint.
    Hint,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Error => Self::Error,
            SeverityArg::Warning => Self::Warning,
            SeverityArg::Information => Self::Information,
            SeverityArg::Hint => Self::Hint,
        }
    }
}

/// Message language accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LocaleArg {
    /// English.
    En,
    /// Japanese.
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::En,
            LocaleArg::Ja => Self::Ja,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
            overrides,
        } => {
            let project_dir = path
                .as_deref()
                .filter(|p| p.is_dir())
                .unwrap_or_else(|| std::path::Path::new("."));
            let source = config_resolver::resolve(project_dir, cli.config.as_deref());
            let failed =
                commands::check::run(path.as_deref(), format, exclude, &overrides, &source)?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
