//! Inspection workflow model and lifecycle state machine.
//!
//! An inspection record moves through a fixed sequence of stages as
//! organizational roles act on it:
//!
//! ```text
//! Creation --> Assignment --> InProgress --> Completed
//!                                               |
//!                                               v
//!                        Closed <-- Legal <-- Review
//! ```
//!
//! # Key Concepts
//!
//! - **Status**: the fine-grained lifecycle value (e.g. `SECTION_IN_PROGRESS`)
//! - **Stage**: one of seven coarse phases every status belongs to
//! - **Catalog**: the total status → stage mapping ([`InspectionStatus::stage`])
//! - **Transition action**: the closed vocabulary of user-triggered
//!   operations ([`TransitionAction`])
//!
//! The two closed statuses are terminal; no action is legal from either.

mod action;
mod error;
mod status;

#[cfg(test)]
mod tests;

pub use action::{ComplianceDecision, NoticeKind, TransitionAction};
pub use error::WorkflowError;
pub use status::{InspectionStatus, WorkflowStage};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::Role;
use crate::form::FormDraft;

/// The server's stored representation of an inspection's form content.
///
/// Present once any party has saved; `is_draft` distinguishes a partial
/// server-held draft from a completed submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    /// The latest server-accepted form snapshot.
    pub form: FormDraft,

    /// True while the server copy is a non-terminal draft.
    #[serde(default)]
    pub is_draft: bool,

    /// Set when the form was submitted as a completed checklist.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// An inspection record as held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    /// Opaque inspection identifier.
    pub id: String,

    /// Current lifecycle status.
    pub status: InspectionStatus,

    /// The role currently responsible for acting on the record.
    #[serde(default)]
    pub assigned_to: Option<Role>,

    /// The role that created the record.
    pub created_by: Role,

    /// Regulatory statute codes driving which sub-forms apply.
    #[serde(default)]
    pub laws: Vec<crate::form::EnvironmentalLaw>,

    /// The server-held form content, once any party has saved.
    #[serde(default)]
    pub checklist: Option<Checklist>,
}

impl Inspection {
    /// Returns the workflow stage of the record's current status.
    #[must_use]
    pub const fn stage(&self) -> WorkflowStage {
        self.status.stage()
    }

    /// Guards against transitions out of a terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TerminalStatus`] if the inspection is closed.
    pub fn ensure_open(&self) -> Result<(), WorkflowError> {
        if self.status.is_terminal() {
            return Err(WorkflowError::TerminalStatus {
                inspection_id: self.id.clone(),
                status: self.status.as_str().to_string(),
            });
        }
        Ok(())
    }
}
