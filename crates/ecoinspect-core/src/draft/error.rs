//! Draft manager error types.

use thiserror::Error;

use crate::access::AccessError;
use crate::api::ApiError;
use crate::validation::ValidationErrorSet;
use crate::workflow::WorkflowError;

use super::store::StoreError;

/// Errors from draft reconciliation and transition dispatch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DraftError {
    /// The field validator rejected the snapshot. User-correctable; the
    /// server was not contacted.
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(ValidationErrorSet),

    /// A server write failed. The local draft is retained so no data is
    /// lost; the operation is retryable.
    #[error("server write failed during {operation}; local draft retained")]
    Persistence {
        /// The operation that failed.
        operation: &'static str,
        /// The underlying API failure.
        #[source]
        source: ApiError,
    },

    /// A response arrived after the user triggered a different transition.
    /// Discarded, never applied.
    #[error("stale response: request generation {request}, current {current}")]
    Stale {
        /// Generation the response belongs to.
        request: u64,
        /// The manager's current generation.
        current: u64,
    },

    /// No inspection has been loaded yet.
    #[error("inspection {inspection_id} is not loaded")]
    NotLoaded {
        /// The inspection ID.
        inspection_id: String,
    },

    /// The access gate denied the role.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// A non-write server interaction failed (e.g. the initial fetch).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A workflow invariant was violated (terminal status, unknown status).
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}
