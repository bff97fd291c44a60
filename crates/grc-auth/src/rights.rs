//! Rights carried by an access control role.
//!
//! An access control role says *who* is bound to an object; its rights
//! say *what* that binding allows.
//!
//! ```text
//! Program Managers  READ | UPDATE | DELETE
//! Program Editors   READ | UPDATE | DELETE
//! Program Readers   READ
//! ```
//!
//! # Example
//!
//! ```
//! use grc_auth::RoleRights;
//!
//! let editors = RoleRights::ALL;
//! assert!(editors.contains(RoleRights::UPDATE));
//!
//! let readers = RoleRights::READ;
//! assert!(!readers.contains(RoleRights::DELETE));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Object-level rights granted by an access control role.
    ///
    /// | Right | Allows |
    /// |-------|--------|
    /// | [`READ`](Self::READ) | viewing the object |
    /// | [`UPDATE`](Self::UPDATE) | editing attributes and mappings |
    /// | [`DELETE`](Self::DELETE) | deleting the object |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RoleRights: u8 {
        const READ   = 0b0000_0001;
        const UPDATE = 0b0000_0010;
        const DELETE = 0b0000_0100;
    }
}

impl RoleRights {
    /// Read, update and delete.
    pub const ALL: Self = Self::READ.union(Self::UPDATE).union(Self::DELETE);

    /// Returns the names of the set rights, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::READ) {
            names.push("READ");
        }
        if self.contains(Self::UPDATE) {
            names.push("UPDATE");
        }
        if self.contains(Self::DELETE) {
            names.push("DELETE");
        }
        names
    }

    /// Parses a right name (case-insensitive). `"ALL"` yields every right.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_auth::RoleRights;
    ///
    /// assert_eq!(RoleRights::parse("update"), Some(RoleRights::UPDATE));
    /// assert_eq!(RoleRights::parse("all"), Some(RoleRights::ALL));
    /// assert_eq!(RoleRights::parse("admin"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "READ" => Some(Self::READ),
            "UPDATE" | "EDIT" => Some(Self::UPDATE),
            "DELETE" => Some(Self::DELETE),
            "ALL" => Some(Self::ALL),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
