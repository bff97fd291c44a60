//! The Program business object.

use crate::{ModelError, Stub};
use chrono::NaiveDate;
use grc_auth::{
    AccessControlList, AclChange, AuthError, CurrentUser, RoleEditPolicy, RoleRegistry, Roleable,
};
use grc_types::{ObjectId, PersonId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Lifecycle status of a Program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramStatus {
    #[default]
    Draft,
    Deprecated,
    Active,
}

impl ProgramStatus {
    /// Every status, in the order the status dropdown lists them.
    pub const ALL: [ProgramStatus; 3] = [Self::Draft, Self::Deprecated, Self::Active];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Deprecated => "Deprecated",
            Self::Active => "Active",
        }
    }
}

impl FromStr for ProgramStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles that can be bound to people on a Program.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramRole {
    #[serde(rename = "Program Managers")]
    Managers,
    #[serde(rename = "Program Editors")]
    Editors,
    #[serde(rename = "Program Readers")]
    Readers,
}

impl ProgramRole {
    pub const ALL: [ProgramRole; 3] = [Self::Managers, Self::Editors, Self::Readers];

    /// Returns the role name registered for the `Program` object type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Managers => "Program Managers",
            Self::Editors => "Program Editors",
            Self::Readers => "Program Readers",
        }
    }

    /// Parses a registered role name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl std::fmt::Display for ProgramRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A compliance program.
///
/// # Example
///
/// ```
/// use grc_models::{Program, ProgramStatus};
///
/// let program = Program::new("Vendor Risk");
/// assert_eq!(program.status, ProgramStatus::Draft);
/// assert!(program.validate().is_ok());
///
/// assert!(Program::new("   ").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Server-assigned id; `None` until created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub status: ProgramStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    /// Effective date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last deprecated date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Stub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<Stub>,
    #[serde(default)]
    pub audits: Vec<Stub>,
    #[serde(default)]
    pub access_control_list: AccessControlList,
}

impl Program {
    /// Object type name roles are registered under.
    pub const OBJECT_TYPE: &'static str = "Program";

    /// Creates a draft program with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            status: ProgramStatus::default(),
            description: String::new(),
            notes: String::new(),
            reference_url: None,
            start_date: None,
            end_date: None,
            context: None,
            modified_by: None,
            audits: Vec::new(),
            access_control_list: AccessControlList::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_acl(mut self, access_control_list: AccessControlList) -> Self {
        self.access_control_list = access_control_list;
        self
    }

    /// Builds the policy deciding who may edit Program role assignments.
    ///
    /// The manager role is [`ProgramRole::Managers`].
    #[must_use]
    pub fn access_policy(registry: Arc<dyn RoleRegistry>) -> RoleEditPolicy {
        RoleEditPolicy::new(registry, Self::OBJECT_TYPE, ProgramRole::Managers.name())
    }

    /// Checks the rules enforced before save.
    ///
    /// # Errors
    ///
    /// - [`ModelError::BlankField`] if the title is blank
    /// - [`ModelError::InvalidDateRange`] if the end date precedes the start date
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::BlankField { field: "title" });
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ModelError::InvalidDateRange { start, end });
            }
        }

        Ok(())
    }

    /// Returns `true` if `user` may only read this program's role assignments.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleNotConfigured`] if the policy's manager role
    /// cannot be resolved for a non-privileged user.
    pub fn read_only_program_roles(
        &self,
        policy: &RoleEditPolicy,
        user: &CurrentUser,
    ) -> Result<bool, AuthError> {
        policy.is_read_only(self, user)
    }

    /// Returns the people holding `role` on this program.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleNotConfigured`] if `role` is not registered.
    pub fn people_in_role(
        &self,
        role: ProgramRole,
        registry: &dyn RoleRegistry,
    ) -> Result<Vec<PersonId>, AuthError> {
        let resolved = registry.resolve(Self::OBJECT_TYPE, role.name())?;
        Ok(self.access_control_list.people_with_role(resolved.id))
    }

    /// Replaces the people holding `role`, on behalf of `user`.
    ///
    /// Empty `people` leaves the role untouched.
    ///
    /// # Errors
    ///
    /// - [`AuthError::ObjectTypeMismatch`] if `policy` is not a Program policy
    /// - [`AuthError::ReadOnly`] if `user` may not edit role assignments
    /// - [`AuthError::RoleNotConfigured`] if a needed role is not registered
    pub fn set_role_people(
        &mut self,
        role: ProgramRole,
        people: &[PersonId],
        policy: &RoleEditPolicy,
        user: &CurrentUser,
    ) -> Result<AclChange, AuthError> {
        if policy.object_type() != Self::OBJECT_TYPE {
            return Err(AuthError::object_type_mismatch(
                policy.object_type(),
                Self::OBJECT_TYPE,
            ));
        }
        policy.ensure_can_edit_roles(&*self, user)?;

        let resolved = policy.registry().resolve(Self::OBJECT_TYPE, role.name())?;
        let change = self.access_control_list.set_role_people(resolved.id, people);

        tracing::info!(
            program = ?self.id,
            user = %user,
            role = %role,
            added = change.added.len(),
            removed = change.removed.len(),
            "program role assignments updated"
        );

        Ok(change)
    }
}

impl Roleable for Program {
    fn object_type(&self) -> &str {
        Self::OBJECT_TYPE
    }

    fn access_control_list(&self) -> &AccessControlList {
        &self.access_control_list
    }
}
