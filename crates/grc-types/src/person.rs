//! Person (user account) record.

use crate::{PersonId, SystemRole};
use serde::{Deserialize, Serialize};

/// A person known to the application.
///
/// Only identity and the global tier live here. What a person may do on
/// a particular object is decided by that object's access control list.
///
/// # Example
///
/// ```
/// use grc_types::{Person, PersonId, SystemRole};
///
/// let person = Person::new(PersonId::new(5), "user@example.com", SystemRole::Reader);
/// assert_eq!(person.email, "user@example.com");
/// assert!(!person.system_wide_role.is_privileged());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub system_wide_role: SystemRole,
}

impl Person {
    #[must_use]
    pub fn new(id: PersonId, email: impl Into<String>, system_wide_role: SystemRole) -> Self {
        Self {
            id,
            email: email.into(),
            name: None,
            system_wide_role,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the display name, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person:{} <{}>", self.id, self.email)
    }
}
