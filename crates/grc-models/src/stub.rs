//! Lightweight object references.

use grc_types::ObjectId;
use serde::{Deserialize, Serialize};

/// A reference to another object by type and id.
///
/// The API embeds related objects as stubs (`{"id": 3, "type": "Audit"}`)
/// rather than full payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stub {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Stub {
    #[must_use]
    pub fn new(id: ObjectId, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
        }
    }

    /// Returns `true` if this stub points at an object of `type_name`.
    #[must_use]
    pub fn is_a(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }
}

impl std::fmt::Display for Stub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.type_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_type_key_on_the_wire() {
        let stub = Stub::new(ObjectId::new(3), "Audit");
        let json = serde_json::to_string(&stub).expect("serialize");
        assert_eq!(json, r#"{"id":3,"type":"Audit"}"#);
    }

    #[test]
    fn display_and_kind() {
        let stub = Stub::new(ObjectId::new(8), "Context");
        assert_eq!(stub.to_string(), "Context#8");
        assert!(stub.is_a("Context"));
        assert!(!stub.is_a("Audit"));
    }
}
