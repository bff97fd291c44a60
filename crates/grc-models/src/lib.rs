//! GRC client models.
//!
//! This crate holds the Program resource: its fields, validation, role
//! maintenance and the descriptor the client framework reads to wire the
//! model into REST endpoints, tree views and link targets.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  grc-types  : PersonId, RoleId, ObjectId, SystemRole        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  grc-auth   : AccessControlList, RoleRegistry,              │
//! │               CurrentUser, RoleEditPolicy                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  grc-models : Program, ModelDescriptor, config (THIS CRATE) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! ## [`program`] - The Program object
//!
//! - [`Program`]: fields, validation, role maintenance
//! - [`ProgramRole`]: Managers, Editors, Readers in display order
//! - [`ProgramStatus`]: Draft, Deprecated, Active
//!
//! ## [`descriptor`] - Static model metadata
//!
//! - [`ModelDescriptor`]: endpoints, mixins, attributes, roles, tree view
//!
//! ## [`config`] - Layered configuration
//!
//! - [`GrcConfig`](config::GrcConfig): API prefix, template root, known roles
//! - [`ConfigLoader`](config::ConfigLoader): defaults, files, `GRC_*` env vars
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use grc_auth::{AccessControlEntry, AccessControlList, AccessControlRole, CurrentUser};
//! use grc_models::config::GrcConfig;
//! use grc_models::{Program, ProgramRole};
//! use grc_types::{PersonId, RoleId, SystemRole};
//!
//! let mut config = GrcConfig::default();
//! config.roles.push(AccessControlRole::new(
//!     RoleId::new(42),
//!     Program::OBJECT_TYPE,
//!     ProgramRole::Managers.name(),
//! ));
//! let policy = Program::access_policy(Arc::new(config.role_registry()));
//!
//! let program = Program::new("Vendor Risk").with_acl(AccessControlList::from(vec![
//!     AccessControlEntry::new(PersonId::new(2), RoleId::new(42)),
//! ]));
//!
//! let manager = CurrentUser::new(PersonId::new(2), SystemRole::Reader);
//! let outsider = CurrentUser::new(PersonId::new(3), SystemRole::Reader);
//!
//! assert!(!policy.is_read_only(&program, &manager)?);
//! assert!(policy.is_read_only(&program, &outsider)?);
//! # Ok::<(), grc_auth::AuthError>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod endpoint;
pub mod error;
pub mod mixin;
pub mod program;
pub mod stub;
pub mod tree_view;

pub use descriptor::{AttributeKind, ModelDescriptor, PROGRAM_LINKS};
pub use endpoint::{Endpoint, HttpMethod, RestEndpoints};
pub use error::ModelError;
pub use mixin::Mixins;
pub use program::{Program, ProgramRole, ProgramStatus};
pub use stub::Stub;
