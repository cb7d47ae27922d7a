//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# case-lint configuration

[naming]
# Rule for constants bound to string, number or boolean literals.
# One of: UPPER_SNAKE_CASE, camelCase, PascalCase
constant_case = "UPPER_SNAKE_CASE"

# Rule for function declarations and constants bound to functions.
function_case = "camelCase"

# Error | Warning | Information | Hint
severity = "Warning"

# Message language: en | ja
locale = "en"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true
"#;

const CONFIG_FILE: &str = "case-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to choose naming rules");
    println!("  2. Run: case-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_lint_core::{Config, Locale, Severity};

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.naming, defaults.naming);
        assert_eq!(config.naming.severity, Severity::Warning);
        assert_eq!(config.naming.locale, Locale::En);
        assert_eq!(config.analyzer.exclude, defaults.analyzer.exclude);
        assert!(config.naming.unknown_rule_keys().is_empty());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
