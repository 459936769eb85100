//! The consumed server interface.
//!
//! The backend HTTP API is an external collaborator: this crate specifies
//! only the operation shapes and assumes the server is authoritative once a
//! submission succeeds. Implementations live outside the crate; tests use an
//! in-crate mock.
//!
//! Operations are assumed idempotent enough that a client retry after a
//! timeout does not corrupt state; that assumption must be validated against
//! the real backend.

mod error;

pub use error::ApiError;

use crate::form::{AttachmentRef, FormDraft};
use crate::workflow::{ComplianceDecision, Inspection, InspectionStatus, NoticeKind};

/// The server operations the draft manager consumes.
///
/// All operations are asynchronous request/response; there is no overlapping
/// in-flight mutation of the same inspection from the same client.
#[allow(async_fn_in_trait)]
pub trait InspectionApi {
    /// Fetches the current server-held inspection record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the record is missing or the request fails.
    async fn fetch_inspection(&self, inspection_id: &str) -> Result<Inspection, ApiError>;

    /// Stores the snapshot as a non-terminal server draft.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the server rejects the write or the request
    /// fails.
    async fn save_draft(&self, inspection_id: &str, form: &FormDraft) -> Result<(), ApiError>;

    /// Submits the snapshot as a terminal transition payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the server rejects the submission or the
    /// request fails.
    async fn submit(
        &self,
        inspection_id: &str,
        form: &FormDraft,
        decision: ComplianceDecision,
    ) -> Result<(), ApiError>;

    /// Closes the inspection with remarks and an optional explicit final
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the server rejects the close or the request
    /// fails.
    async fn close(
        &self,
        inspection_id: &str,
        remarks: &str,
        final_status: Option<InspectionStatus>,
    ) -> Result<(), ApiError>;

    /// Sends a legal notice for the inspection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the server rejects the notice or the
    /// request fails.
    async fn send_notice(
        &self,
        inspection_id: &str,
        kind: NoticeKind,
        payload: &str,
    ) -> Result<(), ApiError>;

    /// Uploads a finding attachment; returns the stored reference.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the upload is rejected or the request
    /// fails.
    async fn upload_attachment(
        &self,
        inspection_id: &str,
        system_id: &str,
        file: Vec<u8>,
        caption: &str,
    ) -> Result<AttachmentRef, ApiError>;

    /// Deletes a previously uploaded attachment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the delete is rejected or the request
    /// fails.
    async fn delete_attachment(
        &self,
        inspection_id: &str,
        attachment_id: &str,
    ) -> Result<(), ApiError>;
}
