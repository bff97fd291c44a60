//! Role-edit policy.
//!
//! Decides whether the current user may only *read* the role assignments
//! of an object, or may also edit them.
//!
//! # Rules
//!
//! | System-wide role | Holds manager role on object | Result |
//! |------------------|------------------------------|--------|
//! | Superuser / Administrator / Editor | any | editable |
//! | anything else | yes | editable |
//! | anything else | no | read-only |
//!
//! Privileged users short-circuit before the registry is consulted, so a
//! missing manager role only surfaces for users who actually need it.
//!
//! # Audit Logging
//!
//! - Editable decisions: debug level
//! - Read-only decisions: info level
//! - Missing manager role: warn level
//! - Policy applied to another object type: warn level

use crate::{AccessControlList, AuthError, CurrentUser, RoleRegistry};
use std::sync::Arc;

/// An object that carries its own access control list.
pub trait Roleable {
    /// The object type name roles are registered under (e.g. `"Program"`).
    fn object_type(&self) -> &str;

    /// The object's role bindings.
    fn access_control_list(&self) -> &AccessControlList;
}

/// Policy answering "may this user edit role assignments on this object?".
///
/// One policy instance covers one object type and names the role that
/// grants edit rights on it.
///
/// # Example
///
/// ```
/// use grc_auth::{
///     AccessControlList, AccessControlRole, CurrentUser, InMemoryRoleRegistry,
///     RoleEditPolicy, Roleable,
/// };
/// use grc_types::{PersonId, RoleId, SystemRole};
/// use std::sync::Arc;
///
/// struct Program {
///     acl: AccessControlList,
/// }
///
/// impl Roleable for Program {
///     fn object_type(&self) -> &str {
///         "Program"
///     }
///     fn access_control_list(&self) -> &AccessControlList {
///         &self.acl
///     }
/// }
///
/// let registry = InMemoryRoleRegistry::from_roles([AccessControlRole::new(
///     RoleId::new(42),
///     "Program",
///     "Program Managers",
/// )]);
/// let policy = RoleEditPolicy::new(Arc::new(registry), "Program", "Program Managers");
///
/// let mut program = Program { acl: AccessControlList::new() };
/// let reader = CurrentUser::new(PersonId::new(5), SystemRole::Reader);
/// assert!(policy.is_read_only(&program, &reader).unwrap());
///
/// program.acl.assign(PersonId::new(5), RoleId::new(42));
/// assert!(!policy.is_read_only(&program, &reader).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RoleEditPolicy {
    registry: Arc<dyn RoleRegistry>,
    object_type: String,
    manager_role: String,
}

impl RoleEditPolicy {
    /// Creates a policy for `object_type` where `manager_role` grants edit rights.
    #[must_use]
    pub fn new(
        registry: Arc<dyn RoleRegistry>,
        object_type: impl Into<String>,
        manager_role: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            object_type: object_type.into(),
            manager_role: manager_role.into(),
        }
    }

    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    #[must_use]
    pub fn manager_role(&self) -> &str {
        &self.manager_role
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<dyn RoleRegistry> {
        &self.registry
    }

    /// Returns `true` if `user` may only read the role assignments of `object`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::ObjectTypeMismatch`] if `object` is not of the type
    ///   this policy was built for, whoever the user is
    /// - [`AuthError::RoleNotConfigured`] if the user is not privileged and
    ///   the manager role cannot be resolved. The policy never falls back
    ///   to either answer in that case.
    pub fn is_read_only<O>(&self, object: &O, user: &CurrentUser) -> Result<bool, AuthError>
    where
        O: Roleable + ?Sized,
    {
        if object.object_type() != self.object_type {
            tracing::warn!(
                user = %user,
                policy_type = %self.object_type,
                object_type = object.object_type(),
                "role edit check failed: policy applied to another object type"
            );
            return Err(AuthError::object_type_mismatch(
                &self.object_type,
                object.object_type(),
            ));
        }

        if user.is_privileged() {
            tracing::debug!(
                user = %user,
                object_type = object.object_type(),
                "role edit allowed: privileged system role"
            );
            return Ok(false);
        }

        let manager = self
            .registry
            .resolve(&self.object_type, &self.manager_role)
            .inspect_err(|e| {
                tracing::warn!(
                    user = %user,
                    object_type = %self.object_type,
                    role = %self.manager_role,
                    error = %e,
                    "role edit check failed: manager role missing"
                );
            })?;

        let holds_manager = object
            .access_control_list()
            .contains(user.id(), manager.id);

        if holds_manager {
            tracing::debug!(
                user = %user,
                object_type = object.object_type(),
                role = %manager,
                "role edit allowed: holds manager role"
            );
        } else {
            tracing::info!(
                user = %user,
                object_type = object.object_type(),
                role = %manager,
                "role edit denied: read-only"
            );
        }

        Ok(!holds_manager)
    }

    /// Like [`is_read_only`](Self::is_read_only), but turns a read-only
    /// answer into an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::ReadOnly`] if the user may not edit, or the
    /// errors of `is_read_only`.
    pub fn ensure_can_edit_roles<O>(&self, object: &O, user: &CurrentUser) -> Result<(), AuthError>
    where
        O: Roleable + ?Sized,
    {
        if self.is_read_only(object, user)? {
            Err(AuthError::read_only(user.id(), object.object_type()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessControlEntry, AccessControlRole, InMemoryRoleRegistry};
    use grc_types::{PersonId, RoleId, SystemRole};

    const MANAGERS: RoleId = RoleId::new(42);
    const EDITORS: RoleId = RoleId::new(99);

    struct Object {
        acl: AccessControlList,
    }

    impl Roleable for Object {
        fn object_type(&self) -> &str {
            "Program"
        }
        fn access_control_list(&self) -> &AccessControlList {
            &self.acl
        }
    }

    fn object(entries: &[(u64, RoleId)]) -> Object {
        Object {
            acl: entries
                .iter()
                .map(|&(person, role)| AccessControlEntry::new(PersonId::new(person), role))
                .collect(),
        }
    }

    fn configured_policy() -> RoleEditPolicy {
        let registry = InMemoryRoleRegistry::from_roles([
            AccessControlRole::new(MANAGERS, "Program", "Program Managers"),
            AccessControlRole::new(EDITORS, "Program", "Program Editors"),
        ]);
        RoleEditPolicy::new(Arc::new(registry), "Program", "Program Managers")
    }

    fn unconfigured_policy() -> RoleEditPolicy {
        RoleEditPolicy::new(
            Arc::new(InMemoryRoleRegistry::new()),
            "Program",
            "Program Managers",
        )
    }

    fn user(id: u64, role: SystemRole) -> CurrentUser {
        CurrentUser::new(PersonId::new(id), role)
    }

    #[test]
    fn privileged_users_are_never_read_only() {
        let policy = configured_policy();
        let empty = object(&[]);
        let other_roles = object(&[(5, EDITORS), (6, MANAGERS)]);

        for role in SystemRole::PRIVILEGED {
            let u = user(5, role);
            assert!(!policy.is_read_only(&empty, &u).expect("check"));
            assert!(!policy.is_read_only(&other_roles, &u).expect("check"));
        }
    }

    #[test]
    fn manager_can_edit() {
        let policy = configured_policy();
        let obj = object(&[(5, MANAGERS)]);
        assert!(!policy
            .is_read_only(&obj, &user(5, SystemRole::Reader))
            .expect("check"));
    }

    #[test]
    fn other_role_is_read_only() {
        let policy = configured_policy();
        let obj = object(&[(5, EDITORS)]);
        assert!(policy
            .is_read_only(&obj, &user(5, SystemRole::Reader))
            .expect("check"));
    }

    #[test]
    fn manager_role_held_by_someone_else_is_read_only() {
        let policy = configured_policy();
        let obj = object(&[(6, MANAGERS), (5, EDITORS)]);
        assert!(policy
            .is_read_only(&obj, &user(5, SystemRole::Creator))
            .expect("check"));
    }

    #[test]
    fn empty_acl_is_read_only() {
        let policy = configured_policy();
        assert!(policy
            .is_read_only(&object(&[]), &user(7, SystemRole::Reader))
            .expect("check"));
    }

    #[test]
    fn unknown_system_role_is_not_privileged() {
        let policy = configured_policy();
        let u = user(5, SystemRole::Other("Auditor".into()));
        assert!(policy.is_read_only(&object(&[]), &u).expect("check"));
    }

    #[test]
    fn missing_manager_role_fails_loudly() {
        let policy = unconfigured_policy();
        let err = policy
            .is_read_only(&object(&[(5, MANAGERS)]), &user(5, SystemRole::Reader))
            .expect_err("missing role must not default");
        assert_eq!(
            err,
            AuthError::role_not_configured("Program", "Program Managers")
        );
    }

    #[test]
    fn missing_manager_role_ignored_for_privileged() {
        let policy = unconfigured_policy();
        let result = policy.is_read_only(&object(&[]), &user(1, SystemRole::Superuser));
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn ensure_can_edit_roles_maps_read_only() {
        let policy = configured_policy();
        let obj = object(&[(5, EDITORS)]);

        let err = policy
            .ensure_can_edit_roles(&obj, &user(5, SystemRole::Reader))
            .expect_err("read-only");
        assert_eq!(err, AuthError::read_only(PersonId::new(5), "Program"));

        let obj = object(&[(5, MANAGERS)]);
        assert!(policy
            .ensure_can_edit_roles(&obj, &user(5, SystemRole::Reader))
            .is_ok());
    }

    #[test]
    fn policy_for_other_object_type_is_rejected() {
        let registry = InMemoryRoleRegistry::from_roles([AccessControlRole::new(
            RoleId::new(7),
            "Audit",
            "Audit Captains",
        )]);
        let audit_policy = RoleEditPolicy::new(Arc::new(registry), "Audit", "Audit Captains");
        let program = object(&[(5, RoleId::new(7))]);

        let err = audit_policy
            .is_read_only(&program, &user(5, SystemRole::Reader))
            .expect_err("audit policy must not decide for a program");
        assert_eq!(err, AuthError::object_type_mismatch("Audit", "Program"));

        assert_eq!(
            audit_policy.is_read_only(&program, &user(1, SystemRole::Administrator)),
            Err(AuthError::object_type_mismatch("Audit", "Program"))
        );
        assert!(audit_policy
            .ensure_can_edit_roles(&program, &user(5, SystemRole::Reader))
            .is_err());
    }

    #[test]
    fn trait_object_works() {
        let policy = configured_policy();
        let obj: Box<dyn Roleable> = Box::new(object(&[(5, MANAGERS)]));
        assert_eq!(
            policy.is_read_only(obj.as_ref(), &user(5, SystemRole::Reader)),
            Ok(false)
        );
    }
}
