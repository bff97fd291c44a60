//! Core types for the GRC Program model.
//!
//! This crate holds the identity-level vocabulary shared by the
//! access policy (`grc-auth`) and the resource model (`grc-models`).
//! It carries no permission logic.
//!
//! # Crate Architecture
//!
//! ```text
//! grc-types   (PersonId, RoleId, ObjectId, SystemRole, Person, ErrorCode)  ◄── HERE
//!     ↑
//! grc-auth    (AccessControlList, RoleRegistry, CurrentUser, RoleEditPolicy)
//!     ↑
//! grc-models  (Program, ModelDescriptor, config)
//! ```
//!
//! # Example
//!
//! ```
//! use grc_types::{Person, PersonId, RoleId, SystemRole};
//!
//! let reader = Person::new(PersonId::new(5), "reader@example.com", SystemRole::Reader);
//! let managers = RoleId::new(42);
//!
//! assert!(!reader.system_wide_role.is_privileged());
//! assert_eq!(managers.get(), 42);
//! ```

mod error;
mod id;
mod person;
mod system_role;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{ObjectId, ParseIdError, PersonId, RoleId};
pub use person::Person;
pub use system_role::SystemRole;
