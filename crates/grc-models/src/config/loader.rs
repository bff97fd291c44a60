//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.grc/config.toml`)
//! 3. Project config (`<root>/.grc/config.toml`)
//! 4. Environment variables (`GRC_*`)
//!
//! Each layer overrides the previous.

use super::{default_config_path, ConfigError, GrcConfig, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE};
use std::env::VarError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding `api.prefix`.
pub const ENV_API_PREFIX: &str = "GRC_API_PREFIX";

/// Environment variable overriding `templates.mustache_path`.
pub const ENV_MUSTACHE_PATH: &str = "GRC_MUSTACHE_PATH";

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```no_run
/// use grc_models::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_project_root("/srv/grc")
///     .skip_env_vars()
///     .load()?;
/// # Ok::<(), grc_models::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.grc/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    skip_env: bool,
    skip_global: bool,
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.grc/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Skips environment variable loading.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config file exists but cannot be
    /// read or parsed, or an environment override is invalid. Missing
    /// config files are silently ignored.
    pub fn load(&self) -> Result<GrcConfig, ConfigError> {
        let mut config = GrcConfig::default();

        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.merge(&global_config);
            }
        }

        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = load_file(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.merge(&project_config);
                }
            }
        }

        if !self.skip_env {
            apply_overrides(&mut config, |name| env_value(name, std::env::var(name)))?;
        }

        debug!(
            api_prefix = %config.api.prefix,
            mustache_path = %config.templates.mustache_path,
            roles = config.roles.len(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Loads a config file, returning `None` if it doesn't exist.
fn load_file(path: &Path) -> Result<Option<GrcConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = GrcConfig::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

    Ok(Some(config))
}

/// Interprets the result of reading variable `name`.
///
/// An unset variable is `None`; a value that is not valid UTF-8 is an error.
fn env_value(name: &str, value: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::invalid_env_var(
            name,
            "value is not valid UTF-8",
        )),
    }
}

/// Applies `GRC_*` overrides using `lookup` to read variables.
///
/// Both overrides are URL paths and must start with `/`.
fn apply_overrides<F>(config: &mut GrcConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    if let Some(val) = lookup(ENV_API_PREFIX)? {
        config.api.prefix = absolute_path(ENV_API_PREFIX, val)?;
    }
    if let Some(val) = lookup(ENV_MUSTACHE_PATH)? {
        config.templates.mustache_path = absolute_path(ENV_MUSTACHE_PATH, val)?;
    }
    Ok(())
}

fn absolute_path(name: &str, value: String) -> Result<String, ConfigError> {
    if value.starts_with('/') {
        Ok(value)
    } else {
        Err(ConfigError::invalid_env_var(name, "expected a path starting with '/'"))
    }
}
