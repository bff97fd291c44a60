//! Object-scoped access control for GRC objects.
//!
//! # Permission Model
//!
//! ```text
//! May edit role assignments =
//!     SystemRole is privileged (Superuser | Administrator | Editor)
//!   ∪ ACL binds CurrentUser to the object's manager role
//! ```
//!
//! | Piece | Type | Controls |
//! |-------|------|----------|
//! | [`CurrentUser`] | Struct | Who is acting, with which global tier |
//! | [`AccessControlList`] | Struct | Who holds which role on one object |
//! | [`RoleRegistry`] | Trait | Which role id a `(object type, role name)` maps to |
//! | [`RoleEditPolicy`] | Struct | Combines the three into a read-only answer |
//!
//! # Crate Architecture
//!
//! ```text
//! grc-types  (PersonId, RoleId, SystemRole)
//!     ↑
//! grc-auth   (AccessControlList, RoleRegistry, CurrentUser, RoleEditPolicy)  ◄── THIS CRATE
//!     ↑
//! grc-models (Program implements Roleable)
//! ```
//!
//! # Design Principles
//!
//! - **Explicit context**: the current user and the registry are passed in,
//!   never read from globals
//! - **Fail loudly**: a missing role definition is an error, not a default
//! - **Trait at the seam**: registries backed by config, the server, or test
//!   fixtures all implement [`RoleRegistry`]

pub mod acl;
pub mod error;
pub mod policy;
pub mod registry;
pub mod rights;
pub mod role;
pub mod session;

pub use acl::{AccessControlEntry, AccessControlList, AclChange};
pub use error::AuthError;
pub use policy::{RoleEditPolicy, Roleable};
pub use registry::InMemoryRoleRegistry;
pub use rights::RoleRights;
pub use role::{AccessControlRole, RoleRegistry};
pub use session::CurrentUser;
