//! Access control roles and the registry that resolves them.
//!
//! # Architecture
//!
//! ```text
//! RoleRegistry trait (THIS MODULE)   <- lookup by (object_type, role_name)
//!          │
//!          ├── InMemoryRoleRegistry (crate::registry)
//!          │
//!          └── (server-backed registries live with the HTTP client)
//! ```

use crate::{AuthError, RoleRights};
use grc_types::RoleId;
use serde::{Deserialize, Serialize};

/// A role that can be bound to people on objects of one type.
///
/// # Example
///
/// ```
/// use grc_auth::{AccessControlRole, RoleRights};
/// use grc_types::RoleId;
///
/// let managers = AccessControlRole::new(RoleId::new(42), "Program", "Program Managers")
///     .with_rights(RoleRights::ALL)
///     .mandatory();
///
/// assert!(managers.applies_to("Program"));
/// assert!(managers.rights.contains(RoleRights::UPDATE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControlRole {
    pub id: RoleId,
    pub object_type: String,
    pub name: String,
    #[serde(default = "default_rights")]
    pub rights: RoleRights,
    /// Marks a role the UI asks to keep filled. Informational only:
    /// [`AccessControlList`](crate::AccessControlList) does not enforce it,
    /// and `revoke` can remove the last holder.
    #[serde(default)]
    pub mandatory: bool,
}

fn default_rights() -> RoleRights {
    RoleRights::READ
}

impl AccessControlRole {
    /// Creates a non-mandatory role with read rights only.
    #[must_use]
    pub fn new(id: RoleId, object_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            object_type: object_type.into(),
            name: name.into(),
            rights: default_rights(),
            mandatory: false,
        }
    }

    #[must_use]
    pub fn with_rights(mut self, rights: RoleRights) -> Self {
        self.rights = rights;
        self
    }

    /// Sets the informational `mandatory` flag.
    #[must_use]
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Returns `true` if this role is defined for `object_type`.
    #[must_use]
    pub fn applies_to(&self, object_type: &str) -> bool {
        self.object_type == object_type
    }
}

impl std::fmt::Display for AccessControlRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{} (#{})", self.object_type, self.name, self.id)
    }
}

/// Resolves access control roles by object type and name.
///
/// Role definitions are static for the lifetime of a session, so
/// implementations may cache freely.
///
/// # Example
///
/// ```
/// use grc_auth::{AccessControlRole, AuthError, RoleRegistry};
/// use grc_types::RoleId;
///
/// #[derive(Debug)]
/// struct SingleRole(AccessControlRole);
///
/// impl RoleRegistry for SingleRole {
///     fn get_role(&self, object_type: &str, role_name: &str) -> Option<AccessControlRole> {
///         (self.0.object_type == object_type && self.0.name == role_name).then(|| self.0.clone())
///     }
///
///     fn roles_for(&self, object_type: &str) -> Vec<AccessControlRole> {
///         self.get_role(object_type, &self.0.name).into_iter().collect()
///     }
/// }
///
/// let registry = SingleRole(AccessControlRole::new(RoleId::new(42), "Program", "Program Managers"));
/// assert_eq!(registry.resolve("Program", "Program Managers").unwrap().id, RoleId::new(42));
/// assert!(matches!(
///     registry.resolve("Audit", "Program Managers"),
///     Err(AuthError::RoleNotConfigured { .. })
/// ));
/// ```
pub trait RoleRegistry: Send + Sync + std::fmt::Debug {
    /// Looks up a role, returning `None` if it is not defined.
    fn get_role(&self, object_type: &str, role_name: &str) -> Option<AccessControlRole>;

    /// Returns every role defined for `object_type`.
    ///
    /// The order of returned roles is unspecified.
    fn roles_for(&self, object_type: &str) -> Vec<AccessControlRole>;

    /// Looks up a role that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleNotConfigured`] if the role is missing.
    fn resolve(&self, object_type: &str, role_name: &str) -> Result<AccessControlRole, AuthError> {
        self.get_role(object_type, role_name)
            .ok_or_else(|| AuthError::role_not_configured(object_type, role_name))
    }
}
