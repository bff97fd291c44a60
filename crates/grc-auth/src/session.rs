//! The authenticated user a check is evaluated for.

use grc_types::{Person, PersonId, SystemRole};
use serde::{Deserialize, Serialize};

/// The currently authenticated user.
///
/// Passed explicitly into every policy check instead of being read from
/// process-wide state, so two requests for different users can be
/// evaluated side by side.
///
/// # Why No Default?
///
/// There is no sensible anonymous user. Construct with
/// [`CurrentUser::new`] or from a [`Person`].
///
/// # Example
///
/// ```
/// use grc_auth::CurrentUser;
/// use grc_types::{Person, PersonId, SystemRole};
///
/// let user = CurrentUser::new(PersonId::new(5), SystemRole::Reader);
/// assert!(!user.is_privileged());
///
/// let admin = Person::new(PersonId::new(1), "admin@example.com", SystemRole::Administrator);
/// let user = CurrentUser::from(&admin);
/// assert!(user.is_privileged());
/// assert_eq!(user.to_string(), "user:1@Administrator");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    id: PersonId,
    system_wide_role: SystemRole,
}

impl CurrentUser {
    #[must_use]
    pub fn new(id: PersonId, system_wide_role: SystemRole) -> Self {
        Self {
            id,
            system_wide_role,
        }
    }

    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[must_use]
    pub fn system_wide_role(&self) -> &SystemRole {
        &self.system_wide_role
    }

    /// Returns `true` if the global tier bypasses object-scoped checks.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.system_wide_role.is_privileged()
    }
}

impl From<&Person> for CurrentUser {
    fn from(person: &Person) -> Self {
        Self::new(person.id, person.system_wide_role.clone())
    }
}

impl std::fmt::Display for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}@{}", self.id, self.system_wide_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privileged_follows_system_role() {
        assert!(CurrentUser::new(PersonId::new(1), SystemRole::Superuser).is_privileged());
        assert!(CurrentUser::new(PersonId::new(1), SystemRole::Editor).is_privileged());
        assert!(!CurrentUser::new(PersonId::new(1), SystemRole::Creator).is_privileged());
    }

    #[test]
    fn from_person_copies_identity() {
        let person = Person::new(PersonId::new(9), "x@example.com", SystemRole::Reader);
        let user = CurrentUser::from(&person);
        assert_eq!(user.id(), PersonId::new(9));
        assert_eq!(user.system_wide_role(), &SystemRole::Reader);
    }

    #[test]
    fn deserializes_from_bootstrap_payload() {
        let json = r#"{"id": 7, "system_wide_role": "No Access"}"#;
        let user: CurrentUser = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.id(), PersonId::new(7));
        assert_eq!(user.system_wide_role(), &SystemRole::NoAccess);
    }
}
