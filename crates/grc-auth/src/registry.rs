//! Default implementation of [`RoleRegistry`].
//!
//! Provides [`InMemoryRoleRegistry`], a thread-safe store seeded from
//! configuration or from the role definitions the server returns.

use crate::{AccessControlRole, RoleRegistry};
use std::collections::HashMap;
use std::sync::RwLock;

type RoleKey = (String, String);

/// Thread-safe, in-memory role registry.
///
/// Roles are keyed by `(object_type, name)`. Registering a role under an
/// existing key replaces the previous definition.
///
/// # Lock Poisoning
///
/// A poisoned lock is logged at error level and the lookup behaves as if
/// the role were absent, which the policy turns into a loud
/// `RoleNotConfigured` error.
///
/// # Example
///
/// ```
/// use grc_auth::{AccessControlRole, InMemoryRoleRegistry, RoleRegistry};
/// use grc_types::RoleId;
///
/// let registry = InMemoryRoleRegistry::new();
/// registry.register(AccessControlRole::new(RoleId::new(42), "Program", "Program Managers"));
///
/// let role = registry.get_role("Program", "Program Managers").unwrap();
/// assert_eq!(role.id, RoleId::new(42));
/// assert!(registry.get_role("Program", "Program Owners").is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRoleRegistry {
    roles: RwLock<HashMap<RoleKey, AccessControlRole>>,
}

impl InMemoryRoleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `roles`. Later duplicates win.
    #[must_use]
    pub fn from_roles(roles: impl IntoIterator<Item = AccessControlRole>) -> Self {
        let registry = Self::new();
        for role in roles {
            registry.register(role);
        }
        registry
    }

    /// Adds or replaces a role, returning the replaced definition.
    pub fn register(&self, role: AccessControlRole) -> Option<AccessControlRole> {
        let key = (role.object_type.clone(), role.name.clone());
        match self.roles.write() {
            Ok(mut roles) => {
                let previous = roles.insert(key, role);
                if let Some(ref old) = previous {
                    tracing::debug!(role = %old, "role definition replaced");
                }
                previous
            }
            Err(e) => {
                tracing::error!("role registry: lock poisoned on register: {e}");
                None
            }
        }
    }

    /// Removes a role, returning it if it was present.
    pub fn unregister(&self, object_type: &str, role_name: &str) -> Option<AccessControlRole> {
        match self.roles.write() {
            Ok(mut roles) => roles.remove(&(object_type.to_string(), role_name.to_string())),
            Err(e) => {
                tracing::error!("role registry: lock poisoned on unregister: {e}");
                None
            }
        }
    }

    /// Returns the number of registered roles.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.roles.read() {
            Ok(roles) => roles.len(),
            Err(e) => {
                tracing::error!("role registry: lock poisoned on len: {e}");
                0
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RoleRegistry for InMemoryRoleRegistry {
    fn get_role(&self, object_type: &str, role_name: &str) -> Option<AccessControlRole> {
        match self.roles.read() {
            Ok(roles) => roles
                .get(&(object_type.to_string(), role_name.to_string()))
                .cloned(),
            Err(e) => {
                tracing::error!("role registry: lock poisoned on get_role: {e}");
                None
            }
        }
    }

    fn roles_for(&self, object_type: &str) -> Vec<AccessControlRole> {
        match self.roles.read() {
            Ok(roles) => roles
                .values()
                .filter(|role| role.applies_to(object_type))
                .cloned()
                .collect(),
            Err(e) => {
                tracing::error!("role registry: lock poisoned on roles_for: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthError;
    use grc_types::RoleId;
    use std::sync::Arc;

    fn program_role(id: u64, name: &str) -> AccessControlRole {
        AccessControlRole::new(RoleId::new(id), "Program", name)
    }

    #[test]
    fn empty_registry() {
        let registry = InMemoryRoleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get_role("Program", "Program Managers").is_none());
        assert!(registry.roles_for("Program").is_empty());
    }

    #[test]
    fn register_replaces_same_key() {
        let registry = InMemoryRoleRegistry::new();
        assert!(registry.register(program_role(1, "Program Managers")).is_none());

        let previous = registry.register(program_role(42, "Program Managers"));
        assert_eq!(previous.map(|r| r.id), Some(RoleId::new(1)));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get_role("Program", "Program Managers").map(|r| r.id),
            Some(RoleId::new(42))
        );
    }

    #[test]
    fn lookup_is_scoped_by_object_type() {
        let registry = InMemoryRoleRegistry::from_roles([
            program_role(42, "Program Managers"),
            AccessControlRole::new(RoleId::new(7), "Audit", "Program Managers"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_role("Audit", "Program Managers").map(|r| r.id),
            Some(RoleId::new(7))
        );
        assert!(registry.get_role("Control", "Program Managers").is_none());
    }

    #[test]
    fn roles_for_filters_object_type() {
        let registry = InMemoryRoleRegistry::from_roles([
            program_role(42, "Program Managers"),
            program_role(99, "Program Editors"),
            AccessControlRole::new(RoleId::new(7), "Audit", "Auditors"),
        ]);

        let mut ids: Vec<RoleId> = registry
            .roles_for("Program")
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![RoleId::new(42), RoleId::new(99)]);
    }

    #[test]
    fn unregister_removes() {
        let registry = InMemoryRoleRegistry::from_roles([program_role(42, "Program Managers")]);
        let removed = registry.unregister("Program", "Program Managers");
        assert!(removed.is_some());
        assert!(registry.is_empty());
        assert!(registry.unregister("Program", "Program Managers").is_none());
    }

    #[test]
    fn resolve_missing_role_errors() {
        let registry = InMemoryRoleRegistry::new();
        let err = registry
            .resolve("Program", "Program Managers")
            .expect_err("missing role should error");
        assert_eq!(
            err,
            AuthError::role_not_configured("Program", "Program Managers")
        );
    }

    #[test]
    fn shared_across_threads() {
        let registry = Arc::new(InMemoryRoleRegistry::new());
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.register(program_role(i, &format!("Role {i}")));
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread should not panic");
        }
        assert_eq!(registry.len(), 4);
    }
}
