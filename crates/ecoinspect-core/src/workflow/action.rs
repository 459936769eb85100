//! The closed set of transition actions a user can trigger on an inspection.
//!
//! Each variant carries the payload its server operation needs, so dispatch
//! is matched exhaustively at compile time rather than routed on free-form
//! action strings.

use serde::{Deserialize, Serialize};

use super::status::InspectionStatus;

/// The compliance decision attached to a forward submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceDecision {
    /// The establishment met every applicable requirement.
    Compliant,
    /// At least one requirement or inspected system failed.
    NonCompliant,
}

impl ComplianceDecision {
    /// Returns the string representation of this decision.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "COMPLIANT",
            Self::NonCompliant => "NON_COMPLIANT",
        }
    }
}

/// The kind of legal notice sent to an establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeKind {
    /// Notice of Violation.
    Violation,
    /// Notice of Order.
    Order,
}

impl NoticeKind {
    /// Returns the string representation of this notice kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Violation => "NOV",
            Self::Order => "NOO",
        }
    }
}

/// A user-triggered action against an inspection record.
///
/// This is the complete action vocabulary of the workflow; the draft manager
/// matches on it exhaustively and there is no string-keyed fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionAction {
    /// Persist the current form snapshot to the server as a non-terminal
    /// draft. Skips validation.
    SaveDraft,

    /// Submit the form as a terminal transition. Requires an empty
    /// validation error set.
    Submit {
        /// The compliance decision driving the target completed status.
        decision: ComplianceDecision,
    },

    /// Close the inspection with remarks.
    Close {
        /// Closing remarks recorded against the inspection.
        remarks: String,
        /// Explicit final status, when the closer overrides the default.
        final_status: Option<InspectionStatus>,
    },

    /// Send a legal notice to the establishment.
    SendNotice {
        /// Whether this is a Notice of Violation or Notice of Order.
        kind: NoticeKind,
        /// Free-form notice body forwarded to the server.
        payload: String,
    },

    /// Attach a file to a finding system.
    UploadAttachment {
        /// The finding system the attachment belongs to.
        system_id: String,
        /// File bytes.
        file: Vec<u8>,
        /// Display caption.
        caption: String,
    },

    /// Remove a previously uploaded attachment.
    DeleteAttachment {
        /// Server-assigned attachment identifier.
        attachment_id: String,
    },
}

impl TransitionAction {
    /// Returns true if this action advances the workflow and therefore
    /// requires the field validator to pass first.
    #[must_use]
    pub const fn requires_validation(&self) -> bool {
        matches!(self, Self::Submit { .. })
    }
}
