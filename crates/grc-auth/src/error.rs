//! Access policy errors.

use grc_types::{ErrorCode, PersonId};
use thiserror::Error;

/// Errors raised while evaluating object-scoped role checks.
///
/// # Example
///
/// ```
/// use grc_auth::AuthError;
/// use grc_types::ErrorCode;
///
/// let err = AuthError::role_not_configured("Program", "Program Managers");
/// assert_eq!(err.code(), "AUTH_ROLE_NOT_CONFIGURED");
/// assert!(!err.is_recoverable());
/// assert!(err.to_string().contains("Program Managers"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A role the policy depends on is missing from the registry.
    ///
    /// This is a deployment problem. The policy never guesses an answer
    /// when it sees this.
    #[error("role '{role_name}' is not configured for object type '{object_type}'")]
    RoleNotConfigured {
        object_type: String,
        role_name: String,
    },

    /// A policy was asked about an object of a type it was not built for.
    #[error("policy for '{policy_type}' cannot decide on object type '{object_type}'")]
    ObjectTypeMismatch {
        policy_type: String,
        object_type: String,
    },

    /// The person may only read the role assignments of the object.
    #[error("person {person} cannot edit role assignments on {object_type}")]
    ReadOnly {
        person: PersonId,
        object_type: String,
    },
}

impl AuthError {
    pub fn role_not_configured(object_type: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self::RoleNotConfigured {
            object_type: object_type.into(),
            role_name: role_name.into(),
        }
    }

    pub fn object_type_mismatch(
        policy_type: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self::ObjectTypeMismatch {
            policy_type: policy_type.into(),
            object_type: object_type.into(),
        }
    }

    pub fn read_only(person: PersonId, object_type: impl Into<String>) -> Self {
        Self::ReadOnly {
            person,
            object_type: object_type.into(),
        }
    }
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::RoleNotConfigured { .. } => "AUTH_ROLE_NOT_CONFIGURED",
            Self::ObjectTypeMismatch { .. } => "AUTH_OBJECT_TYPE_MISMATCH",
            Self::ReadOnly { .. } => "AUTH_READ_ONLY",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
