//! Core workflow engine for multi-role environmental inspection approvals.
//!
//! An inspection record moves through creation, assignment, in-progress,
//! completed, review, legal, and closed stages as organizational roles act
//! on it. This crate owns the parts with real invariants:
//!
//! - the **status catalog** and lifecycle model ([`workflow`]);
//! - the **access-control resolver** deciding, for any (role, status, mode)
//!   triple, which actions are legal ([`access`]);
//! - the **law-conditional field validator** gating forward transitions
//!   ([`validation`]);
//! - the **draft reconciliation manager** arbitrating between the local
//!   autosave cache and the server-held checklist ([`draft`]).
//!
//! Rendering, exports, notifications, and the backend HTTP API are external
//! collaborators; the server surface this crate consumes is the [`api`]
//! trait.
//!
//! # Data flow
//!
//! ```text
//! UI action
//!   -> access gate        may the role open this record at all?
//!   -> visibility resolver  which actions are offered?
//!   -> field validator      are the edits legal under the selected laws?
//!   -> draft manager        persist locally, sync, submit
//!   -> server interface     authoritative once a submission succeeds
//! ```
//!
//! Authorization failures resolve as far upstream as possible; validation
//! failures resolve entirely client-side; persistence failures are
//! retryable without data loss.

pub mod access;
pub mod api;
pub mod draft;
pub mod form;
pub mod validation;
pub mod workflow;
