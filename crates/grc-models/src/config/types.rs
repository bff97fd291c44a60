//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use grc_auth::{AccessControlRole, InMemoryRoleRegistry};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
///
/// # Example
///
/// ```
/// use grc_models::config::GrcConfig;
///
/// let config = GrcConfig::default();
/// assert_eq!(config.api.prefix, "/api");
/// assert!(config.roles.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GrcConfig {
    /// REST API settings.
    pub api: ApiConfig,

    /// Template locations.
    pub templates: TemplatesConfig,

    /// Access control roles known before the server is asked.
    pub roles: Vec<AccessControlRole>,
}

impl GrcConfig {
    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Scalar values from `other` override only if they differ from the
    /// default. A later layer therefore cannot reset a value to its
    /// default: a project `prefix = "/api"` does not undo a global
    /// `prefix = "/v2"`. Use an environment override for that.
    ///
    /// Roles are appended; when the registry is built, a later
    /// definition of the same `(object_type, name)` wins.
    pub fn merge(&mut self, other: &Self) {
        self.api.merge(&other.api);
        self.templates.merge(&other.templates);
        self.roles.extend(other.roles.iter().cloned());
    }

    /// Builds a role registry seeded with the configured roles.
    #[must_use]
    pub fn role_registry(&self) -> InMemoryRoleRegistry {
        InMemoryRoleRegistry::from_roles(self.roles.iter().cloned())
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Path prefix of every resource collection.
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/api".into(),
        }
    }
}

impl ApiConfig {
    fn merge(&mut self, other: &Self) {
        if other.prefix != Self::default().prefix {
            self.prefix = other.prefix.clone();
        }
    }
}

/// Template configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Root under which mustache templates are served.
    pub mustache_path: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            mustache_path: "/static/mustache".into(),
        }
    }
}

impl TemplatesConfig {
    fn merge(&mut self, other: &Self) {
        if other.mustache_path != Self::default().mustache_path {
            self.mustache_path = other.mustache_path.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grc_auth::{RoleRegistry, RoleRights};
    use grc_types::RoleId;

    #[test]
    fn empty_toml_is_default() {
        let config = GrcConfig::from_toml("").expect("parse");
        assert_eq!(config, GrcConfig::default());
    }

    #[test]
    fn parses_roles() {
        let config = GrcConfig::from_toml(
            r#"
            [[roles]]
            id = 42
            object_type = "Program"
            name = "Program Managers"
            rights = "READ | UPDATE | DELETE"
            mandatory = true

            [[roles]]
            id = 100
            object_type = "Program"
            name = "Program Readers"
            "#,
        )
        .expect("parse");

        assert_eq!(config.roles.len(), 2);
        assert_eq!(config.roles[0].rights, RoleRights::ALL);
        assert!(config.roles[0].mandatory);
        assert_eq!(config.roles[1].rights, RoleRights::READ);
        assert!(!config.roles[1].mandatory);
    }

    #[test]
    fn merge_overrides_non_default() {
        let mut base = GrcConfig::default();
        let overlay = GrcConfig {
            templates: TemplatesConfig {
                mustache_path: "/assets".into(),
            },
            ..GrcConfig::default()
        };

        base.merge(&overlay);
        assert_eq!(base.templates.mustache_path, "/assets");
        assert_eq!(base.api.prefix, "/api");
    }

    #[test]
    fn merge_keeps_existing_when_overlay_default() {
        let mut base = GrcConfig {
            api: ApiConfig {
                prefix: "/v2".into(),
            },
            ..GrcConfig::default()
        };
        base.merge(&GrcConfig::default());
        assert_eq!(base.api.prefix, "/v2");
    }

    #[test]
    fn overlay_cannot_reset_to_default() {
        let mut base = GrcConfig::default();
        base.merge(&GrcConfig::from_toml("[api]\nprefix = \"/v2\"\n").expect("parse"));
        base.merge(&GrcConfig::from_toml("[api]\nprefix = \"/api\"\n").expect("parse"));
        assert_eq!(base.api.prefix, "/v2");
    }

    #[test]
    fn later_role_definition_wins_in_registry() {
        let mut base = GrcConfig::default();
        base.roles.push(AccessControlRole::new(
            RoleId::new(1),
            "Program",
            "Program Managers",
        ));
        let mut overlay = GrcConfig::default();
        overlay.roles.push(AccessControlRole::new(
            RoleId::new(42),
            "Program",
            "Program Managers",
        ));

        base.merge(&overlay);
        let registry = base.role_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_role("Program", "Program Managers").map(|r| r.id),
            Some(RoleId::new(42))
        );
    }
}
