//! Identifier types for GRC objects.
//!
//! The server assigns integer primary keys to every row, and the REST
//! API exposes them verbatim (`/api/programs/{id}`). Each kind of key
//! gets its own newtype so a role id can never be compared against a
//! person id by accident.

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{input}': {source}")]
pub struct ParseIdError {
    /// Which identifier was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
    #[source]
    source: ParseIntError,
}

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw server-assigned key.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw key.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self).map_err(|source| ParseIdError {
                    kind: $kind,
                    input: s.to_string(),
                    source,
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// Identifier of a person (user account).
    ///
    /// # Example
    ///
    /// ```
    /// use grc_types::PersonId;
    ///
    /// let id: PersonId = "5".parse().unwrap();
    /// assert_eq!(id, PersonId::new(5));
    /// assert_eq!(id.to_string(), "5");
    /// ```
    PersonId,
    "person id"
);

integer_id!(
    /// Identifier of an access control role.
    ///
    /// Roles are scoped to an object type, so the same role name on two
    /// object types ("Program Managers" vs "Audit Captains") resolves to
    /// different ids.
    RoleId,
    "role id"
);

integer_id!(
    /// Identifier of a business object row (Program, Audit, ...).
    ObjectId,
    "object id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        let id = PersonId::new(5);
        assert_eq!(id.get(), 5);
        assert_eq!(PersonId::from(5), id);
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: RoleId = " 42 ".parse().expect("should parse");
        assert_eq!(id, RoleId::new(42));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "abc".parse::<ObjectId>().expect_err("should fail");
        assert_eq!(err.kind, "object id");
        assert_eq!(err.input, "abc");
        assert!(err.to_string().contains("invalid object id 'abc'"));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!("-1".parse::<PersonId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&RoleId::new(99)).expect("serialize");
        assert_eq!(json, "99");

        let parsed: RoleId = serde_json::from_str("99").expect("deserialize");
        assert_eq!(parsed, RoleId::new(99));
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(PersonId::new(1) < PersonId::new(2));
    }
}
