//! Access control for inspection records.
//!
//! Authorization is layered:
//!
//! 1. **Access gate** ([`can_access`]): may this role open the record at
//!    all? Evaluated first; a denial means the caller must not render
//!    editable content.
//! 2. **Visibility resolver** ([`resolve`]): which actions are offered, and
//!    is the form read-only? Pure, recomputed per render.
//!
//! Both are backed by two closed data tables: the stage permission table
//! ([`permissions_for`]) for coarse (role, stage) capabilities, and the
//! override matrix ([`override_for`]) for (status, role) exceptions. Every
//! lookup failure resolves to the maximally restrictive decision.

mod error;
mod overrides;
mod permissions;
mod resolver;
mod role;

#[cfg(test)]
mod tests;

pub use error::AccessError;
pub use overrides::{VisibilityOverride, override_for};
pub use permissions::{PermissionRecord, permissions_for};
pub use resolver::{
    ButtonVisibility, ResolveContext, ReturnTarget, ViewMode, can_access, resolve, resolve_str,
};
pub use role::Role;
