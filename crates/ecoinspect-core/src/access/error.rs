//! Access module error types.

use thiserror::Error;

use crate::workflow::InspectionStatus;

use super::role::Role;

/// Errors raised at the access-control boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// A role string is not recognized.
    ///
    /// This is a programming or configuration error: the caller must fail
    /// closed (deny access) rather than surface it as user feedback.
    #[error("unknown role: {value}")]
    UnknownRole {
        /// The unrecognized role string.
        value: String,
    },

    /// The access gate denied the role any view of the record.
    ///
    /// Callers must not render editable content at all on this error; it is
    /// the outer authorization boundary, evaluated before button visibility.
    #[error("role {role} may not access an inspection in status {status}")]
    Denied {
        /// The role that was denied.
        role: Role,
        /// The status of the inspection it was denied for.
        status: InspectionStatus,
    },
}
