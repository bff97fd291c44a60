//! Global (system-wide) role tier.

use serde::{Deserialize, Serialize};

/// The global privilege tier of a person.
///
/// Unlike object-scoped access control roles ("Program Managers", ...),
/// a system-wide role applies everywhere. The three privileged tiers
/// bypass per-object role checks entirely.
///
/// | Tier | Privileged |
/// |------|------------|
/// | `Superuser` | yes |
/// | `Administrator` | yes |
/// | `Editor` | yes |
/// | `Reader` | no |
/// | `Creator` | no |
/// | `No Access` | no |
///
/// Names that are not recognised are kept verbatim in [`SystemRole::Other`]
/// so that a round trip through the API never loses information. Unknown
/// tiers are never privileged.
///
/// # Example
///
/// ```
/// use grc_types::SystemRole;
///
/// let role: SystemRole = "Administrator".into();
/// assert!(role.is_privileged());
///
/// let role = SystemRole::from("Reader");
/// assert!(!role.is_privileged());
/// assert_eq!(role.as_str(), "Reader");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SystemRole {
    Superuser,
    Administrator,
    Editor,
    Reader,
    Creator,
    NoAccess,
    /// A tier this build does not know about.
    Other(String),
}

impl SystemRole {
    /// Tiers that always pass object-scoped role checks.
    pub const PRIVILEGED: [SystemRole; 3] = [Self::Superuser, Self::Administrator, Self::Editor];

    /// Returns `true` for `Superuser`, `Administrator` and `Editor`.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Superuser | Self::Administrator | Self::Editor)
    }

    /// Returns the display name used by the server.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Superuser => "Superuser",
            Self::Administrator => "Administrator",
            Self::Editor => "Editor",
            Self::Reader => "Reader",
            Self::Creator => "Creator",
            Self::NoAccess => "No Access",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for SystemRole {
    fn from(name: &str) -> Self {
        match name {
            "Superuser" => Self::Superuser,
            "Administrator" => Self::Administrator,
            "Editor" => Self::Editor,
            "Reader" => Self::Reader,
            "Creator" => Self::Creator,
            "No Access" => Self::NoAccess,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SystemRole {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<SystemRole> for String {
    fn from(role: SystemRole) -> Self {
        match role {
            SystemRole::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
