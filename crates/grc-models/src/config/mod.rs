//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌─────────────────────────────────────────┐
//! │  1. Environment Variables (GRC_*)       │  Runtime override
//! ├─────────────────────────────────────────┤
//! │  2. Project Config (.grc/config.toml)   │  Deployment-specific
//! ├─────────────────────────────────────────┤
//! │  3. Global Config (~/.grc/config.toml)  │  User defaults
//! ├─────────────────────────────────────────┤
//! │  4. Default Values (compile-time)       │  Fallback
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `GRC_API_PREFIX` | `api.prefix` | absolute path |
//! | `GRC_MUSTACHE_PATH` | `templates.mustache_path` | absolute path |
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! prefix = "/api"
//!
//! [templates]
//! mustache_path = "/static/mustache"
//!
//! [[roles]]
//! id = 42
//! object_type = "Program"
//! name = "Program Managers"
//! rights = "READ | UPDATE | DELETE"
//! mandatory = true
//! ```

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, ENV_API_PREFIX, ENV_MUSTACHE_PATH};
pub use types::{ApiConfig, GrcConfig, TemplatesConfig};

/// Default global config directory.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".grc")
}

/// Default global config file path.
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".grc";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
