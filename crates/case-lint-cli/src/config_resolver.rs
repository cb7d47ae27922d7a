//! Locates and loads `case-lint.toml`.
//!
//! Lookup order:
//!
//! 1. `--config <PATH>`
//! 2. `case-lint.toml`, then `.case-lint.toml`, in the project directory
//! 3. `config.toml` in the global directory (`$CASE_LINT_CONFIG_DIR` or
//!    `~/.case-lint/`)
//! 4. built-in defaults

use case_lint_core::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Config file path, unless defaults are used.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the config file, or returns defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed. An
    /// explicit path that does not exist is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["case-lint.toml", ".case-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the config source for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir().as_deref())
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// `$CASE_LINT_CONFIG_DIR`, falling back to `~/.case-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("CASE_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".case-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_without_existence_check() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("case-lint.toml"), "").unwrap();

        let result = resolve_in(project.path(), Some(Path::new("/missing.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("/missing.toml")));
    }

    #[test]
    fn project_names_in_order() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".case-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join(".case-lint.toml"))
        );

        fs::write(project.path().join("case-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join("case-lint.toml"))
        );
    }

    #[test]
    fn global_is_a_fallback() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        assert_eq!(
            resolve_in(project.path(), None, Some(global.path())),
            ConfigSource::Global(global.path().join("config.toml"))
        );

        fs::write(project.path().join("case-lint.toml"), "").unwrap();
        assert!(matches!(
            resolve_in(project.path(), None, Some(global.path())),
            ConfigSource::Project(_)
        ));
    }

    #[test]
    fn defaults_when_nothing_found() {
        let project = TempDir::new().unwrap();
        let empty_global = TempDir::new().unwrap();
        assert_eq!(
            resolve_in(project.path(), None, Some(empty_global.path())),
            ConfigSource::Default
        );
        assert!(ConfigSource::Default.path().is_none());
    }

    #[test]
    fn load_reads_naming_section() {
        let project = TempDir::new().unwrap();
        let path = project.path().join("case-lint.toml");
        fs::write(&path, "[naming]\nfunction_case = \"PascalCase\"\nseverity = \"Error\"\n").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert_eq!(config.naming.function_case, "PascalCase");
        assert_eq!(config.naming.constant_case, "UPPER_SNAKE_CASE");
        assert_eq!(config.naming.severity, Severity::Error);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let source = ConfigSource::Explicit(PathBuf::from("/definitely/missing/case-lint.toml"));
        assert!(matches!(source.load(), Err(ConfigError::Io { .. })));
    }
}
