//! Workflow module error types.

use thiserror::Error;

/// Errors that can occur while working with the status catalog.
///
/// These are programming or configuration errors, not user input errors:
/// callers that hit them must fail closed (deny access) rather than surface
/// them as validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WorkflowError {
    /// A status string is not in the catalog.
    #[error("unknown inspection status: {value}")]
    UnknownStatus {
        /// The unrecognized status string.
        value: String,
    },

    /// A transition was attempted out of a terminal status.
    #[error("inspection {inspection_id} is closed ({status}); no further transitions")]
    TerminalStatus {
        /// The inspection ID.
        inspection_id: String,
        /// The terminal status the inspection is in.
        status: String,
    },
}
