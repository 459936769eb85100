//! Server interface error types.

use thiserror::Error;

/// Errors returned by an [`InspectionApi`](super::InspectionApi)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The inspection does not exist on the server.
    #[error("inspection not found: {inspection_id}")]
    NotFound {
        /// The inspection ID that was requested.
        inspection_id: String,
    },

    /// The server rejected the operation.
    #[error("server rejected {operation}: {reason}")]
    Rejected {
        /// The operation that was rejected.
        operation: String,
        /// Server-supplied reason.
        reason: String,
    },

    /// The request did not complete (network failure, timeout).
    #[error("transport failure during {operation}: {reason}")]
    Transport {
        /// The operation that failed.
        operation: String,
        /// Failure detail.
        reason: String,
    },
}
