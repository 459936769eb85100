//! The draft reconciliation manager.
//!
//! Owns the working form snapshot for one inspection, the autosave cadence,
//! the local/server priority decision at load time, and the dispatch of
//! transition actions to the server interface.
//!
//! # Failure semantics
//!
//! - A server write failure leaves the local draft intact; nothing is lost
//!   and the user can retry.
//! - Submission never contacts the server while the validator reports
//!   errors.
//! - A response that arrives after the pending-request generation has moved
//!   on (the user navigated away or triggered another transition) is
//!   discarded, not applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::access::{AccessError, Role, can_access};
use crate::api::InspectionApi;
use crate::form::{AttachmentRef, FormDraft};
use crate::validation::{ValidationContext, validate};
use crate::workflow::{ComplianceDecision, Inspection, InspectionStatus, NoticeKind, TransitionAction};

use super::error::DraftError;
use super::store::{DraftStore, StoredDraft};
use super::{AUTOSAVE_INTERVAL, DraftPriority, DraftSource, autosave_due, draft_priority};

/// Draft manager configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftManagerConfig {
    /// Seconds between local autosaves of the working snapshot.
    #[serde(default = "default_autosave_secs")]
    pub autosave_interval_secs: i64,
}

const fn default_autosave_secs() -> i64 {
    AUTOSAVE_INTERVAL.num_seconds()
}

impl Default for DraftManagerConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_secs(),
        }
    }
}

/// Monotonically increasing request generation shared with the UI layer.
///
/// The UI bumps the counter when the editing view unmounts or the user
/// triggers a different transition; any in-flight operation then discards
/// its response instead of applying it.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter(Arc<AtomicU64>);

impl GenerationCounter {
    /// Starts a new request and returns its generation.
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The current generation.
    fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Invalidates every pending request.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// What [`DraftManager::load`] decided.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// The server-held inspection record.
    pub inspection: Inspection,
    /// Which physical draft copies existed.
    pub source: DraftSource,
    /// Which copy was chosen as authoritative.
    pub priority: DraftPriority,
}

/// Reconciles the local autosave cache with the server-held checklist and
/// dispatches transition actions for one inspection.
#[derive(Debug)]
pub struct DraftManager<S, A> {
    inspection_id: String,
    role: Role,
    store: S,
    api: A,
    config: DraftManagerConfig,
    generation: GenerationCounter,
    inspection: Option<Inspection>,
    form: FormDraft,
    last_autosave: Option<DateTime<Utc>>,
}

impl<S: DraftStore, A: InspectionApi> DraftManager<S, A> {
    /// Creates a manager for one inspection with the default configuration.
    pub fn new(inspection_id: impl Into<String>, role: Role, store: S, api: A) -> Self {
        Self::with_config(inspection_id, role, store, api, DraftManagerConfig::default())
    }

    /// Creates a manager with an explicit configuration.
    pub fn with_config(
        inspection_id: impl Into<String>,
        role: Role,
        store: S,
        api: A,
        config: DraftManagerConfig,
    ) -> Self {
        Self {
            inspection_id: inspection_id.into(),
            role,
            store,
            api,
            config,
            generation: GenerationCounter::default(),
            inspection: None,
            form: FormDraft::default(),
            last_autosave: None,
        }
    }

    /// The inspection this manager is bound to.
    #[must_use]
    pub fn inspection_id(&self) -> &str {
        &self.inspection_id
    }

    /// The current working snapshot.
    #[must_use]
    pub const fn form(&self) -> &FormDraft {
        &self.form
    }

    /// The loaded server record, once [`load`](Self::load) has run.
    #[must_use]
    pub const fn inspection(&self) -> Option<&Inspection> {
        self.inspection.as_ref()
    }

    /// A handle the UI layer uses to invalidate pending requests on
    /// navigation or unmount.
    #[must_use]
    pub fn generation_handle(&self) -> GenerationCounter {
        self.generation.clone()
    }

    /// Fetches the server record, runs the access gate, and reconciles the
    /// two draft copies.
    ///
    /// # Errors
    ///
    /// - [`DraftError::Access`] when the role may not view the record; the
    ///   caller must not render editable content.
    /// - [`DraftError::Api`] when the fetch fails.
    /// - [`DraftError::Stale`] when the response arrived after the user
    ///   moved on; the result is discarded.
    pub async fn load(&mut self, forced_reentry: bool) -> Result<LoadOutcome, DraftError> {
        let request = self.generation.next();
        let inspection = self.api.fetch_inspection(&self.inspection_id).await?;
        self.check_stale(request)?;

        if !can_access(self.role, inspection.status) {
            return Err(AccessError::Denied {
                role: self.role,
                status: inspection.status,
            }
            .into());
        }

        let local = self.store.get(&self.inspection_id)?;
        let has_server_checklist = inspection.checklist.is_some();
        let source = DraftSource::classify(local.is_some(), has_server_checklist);
        let priority = draft_priority(
            inspection.status,
            local.is_some(),
            has_server_checklist,
            forced_reentry,
        );
        debug!(
            inspection_id = %self.inspection_id,
            status = %inspection.status,
            ?source,
            ?priority,
            forced_reentry,
            "reconciled draft copies at load",
        );

        match priority {
            DraftPriority::Local => {
                // Checked above: Local is only chosen when a local entry
                // exists.
                if let Some(entry) = local {
                    self.form = entry.form;
                    self.last_autosave = Some(entry.last_saved);
                }
            },
            DraftPriority::Server => {
                if let Some(checklist) = &inspection.checklist {
                    self.form = checklist.form.clone();
                }
                self.last_autosave = None;
            },
            DraftPriority::Empty => {
                self.form = FormDraft::default();
                self.last_autosave = None;
            },
        }

        self.inspection = Some(inspection.clone());
        Ok(LoadOutcome {
            inspection,
            source,
            priority,
        })
    }

    /// Replaces the working snapshot with the user's latest edits.
    ///
    /// Cheap and synchronous; persistence happens on the autosave cadence,
    /// not per keystroke.
    pub fn record_edit(&mut self, form: FormDraft) {
        self.form = form;
    }

    /// Persists the working snapshot locally if the autosave interval has
    /// elapsed. Returns true when a save happened.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Store`] when the local write fails.
    pub fn maybe_autosave(&mut self, now: DateTime<Utc>) -> Result<bool, DraftError> {
        let interval = chrono::Duration::seconds(self.config.autosave_interval_secs);
        if !autosave_due(self.last_autosave, now, interval) {
            return Ok(false);
        }
        self.persist_local(now)?;
        Ok(true)
    }

    /// Persists the working snapshot to the local store immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Store`] when the local write fails.
    pub fn persist_local(&mut self, now: DateTime<Utc>) -> Result<(), DraftError> {
        self.store.put(
            &self.inspection_id,
            StoredDraft {
                form: self.form.clone(),
                last_saved: now,
            },
        )?;
        self.last_autosave = Some(now);
        Ok(())
    }

    /// Discards the local draft entry explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Store`] when the removal fails.
    pub fn discard_local(&mut self) -> Result<(), DraftError> {
        self.store.remove(&self.inspection_id)?;
        self.last_autosave = None;
        Ok(())
    }

    /// Dispatches one transition action. The action vocabulary is closed;
    /// every variant is handled here.
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's failure; see the individual
    /// methods.
    pub async fn execute(
        &mut self,
        action: TransitionAction,
        ctx: &ValidationContext,
        now: DateTime<Utc>,
    ) -> Result<(), DraftError> {
        match action {
            TransitionAction::SaveDraft => self.save_draft(now).await,
            TransitionAction::Submit { decision } => self.submit(decision, ctx, now).await,
            TransitionAction::Close {
                remarks,
                final_status,
            } => self.close(&remarks, final_status).await,
            TransitionAction::SendNotice { kind, payload } => {
                self.send_notice(kind, &payload).await
            },
            TransitionAction::UploadAttachment {
                system_id,
                file,
                caption,
            } => self
                .upload_attachment(&system_id, file, &caption, now)
                .await
                .map(|_| ()),
            TransitionAction::DeleteAttachment { attachment_id } => {
                self.delete_attachment(&attachment_id, now).await
            },
        }
    }

    /// Sends the current snapshot to the server as a non-terminal draft.
    ///
    /// Skips the field validator. The snapshot is persisted locally first so
    /// the last edit is never lost; on a successful server write the local
    /// entry is cleared and the server copy becomes authoritative.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is closed.
    /// - [`DraftError::Persistence`] when the server write fails; the local
    ///   draft is retained.
    pub async fn save_draft(&mut self, now: DateTime<Utc>) -> Result<(), DraftError> {
        self.require_loaded()?.ensure_open()?;
        self.persist_local(now)?;

        let request = self.generation.next();
        self.api
            .save_draft(&self.inspection_id, &self.form)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "save_draft",
                source,
            })?;
        self.check_stale(request)?;

        self.clear_local_after_server_write();
        Ok(())
    }

    /// Submits the snapshot as a terminal transition.
    ///
    /// The field validator must return an empty error set; on any error the
    /// server is not contacted and the full set is surfaced.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is closed.
    /// - [`DraftError::Validation`] with the complete error set.
    /// - [`DraftError::Persistence`] when the server write fails; the local
    ///   draft is retained.
    pub async fn submit(
        &mut self,
        decision: ComplianceDecision,
        ctx: &ValidationContext,
        now: DateTime<Utc>,
    ) -> Result<(), DraftError> {
        self.require_loaded()?.ensure_open()?;
        self.persist_local(now)?;

        let errors = validate(&self.form, ctx);
        if !errors.is_empty() {
            return Err(DraftError::Validation(errors));
        }

        let request = self.generation.next();
        self.api
            .submit(&self.inspection_id, &self.form, decision)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "submit",
                source,
            })?;
        self.check_stale(request)?;

        self.clear_local_after_server_write();
        Ok(())
    }

    /// Closes the inspection with remarks and an optional explicit final
    /// status.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is already closed.
    /// - [`DraftError::Persistence`] when the server write fails.
    pub async fn close(
        &mut self,
        remarks: &str,
        final_status: Option<InspectionStatus>,
    ) -> Result<(), DraftError> {
        self.require_loaded()?.ensure_open()?;

        let request = self.generation.next();
        self.api
            .close(&self.inspection_id, remarks, final_status)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "close",
                source,
            })?;
        self.check_stale(request)?;

        // The record is terminal now; a lingering local draft would only
        // resurface stale content.
        self.clear_local_after_server_write();
        Ok(())
    }

    /// Sends a legal notice.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is closed.
    /// - [`DraftError::Persistence`] when the server rejects the notice.
    pub async fn send_notice(&mut self, kind: NoticeKind, payload: &str) -> Result<(), DraftError> {
        self.require_loaded()?.ensure_open()?;

        let request = self.generation.next();
        self.api
            .send_notice(&self.inspection_id, kind, payload)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "send_notice",
                source,
            })?;
        self.check_stale(request)
    }

    /// Uploads a finding attachment and records its reference on the
    /// working snapshot.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is closed.
    /// - [`DraftError::Persistence`] when the upload fails.
    pub async fn upload_attachment(
        &mut self,
        system_id: &str,
        file: Vec<u8>,
        caption: &str,
        now: DateTime<Utc>,
    ) -> Result<AttachmentRef, DraftError> {
        self.require_loaded()?.ensure_open()?;

        let request = self.generation.next();
        let attachment = self
            .api
            .upload_attachment(&self.inspection_id, system_id, file, caption)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "upload_attachment",
                source,
            })?;
        self.check_stale(request)?;

        self.form.attachments.push(attachment.clone());
        self.persist_local(now)?;
        Ok(attachment)
    }

    /// Deletes an uploaded attachment and drops its reference from the
    /// working snapshot.
    ///
    /// # Errors
    ///
    /// - [`DraftError::NotLoaded`] before a successful [`load`](Self::load).
    /// - [`DraftError::Workflow`] when the inspection is closed.
    /// - [`DraftError::Persistence`] when the delete fails.
    pub async fn delete_attachment(
        &mut self,
        attachment_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DraftError> {
        self.require_loaded()?.ensure_open()?;

        let request = self.generation.next();
        self.api
            .delete_attachment(&self.inspection_id, attachment_id)
            .await
            .map_err(|source| DraftError::Persistence {
                operation: "delete_attachment",
                source,
            })?;
        self.check_stale(request)?;

        self.form.attachments.retain(|a| a.id != attachment_id);
        self.persist_local(now)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn store_entry(&self) -> Option<StoredDraft> {
        self.store.get(&self.inspection_id).ok().flatten()
    }

    fn require_loaded(&self) -> Result<&Inspection, DraftError> {
        self.inspection.as_ref().ok_or_else(|| DraftError::NotLoaded {
            inspection_id: self.inspection_id.clone(),
        })
    }

    fn check_stale(&self, request: u64) -> Result<(), DraftError> {
        let current = self.generation.current();
        if current != request {
            debug!(
                inspection_id = %self.inspection_id,
                request,
                current,
                "discarding stale response",
            );
            return Err(DraftError::Stale { request, current });
        }
        Ok(())
    }

    fn clear_local_after_server_write(&mut self) {
        // The server copy is authoritative now. A failed removal is not a
        // data-loss risk, so it does not fail the operation.
        if let Err(error) = self.store.remove(&self.inspection_id) {
            warn!(
                inspection_id = %self.inspection_id,
                %error,
                "failed to clear local draft after server write",
            );
        }
        self.last_autosave = None;
    }
}

/// Drives the autosave cadence for a shared manager until `shutdown` fires.
///
/// The editing view owns the shutdown sender and drops or signals it on
/// unmount, cancelling the timer. Local write failures are logged and the
/// loop keeps running.
pub async fn autosave_loop<S: DraftStore, A: InspectionApi>(
    manager: &tokio::sync::Mutex<DraftManager<S, A>>,
    mut shutdown: tokio::sync::watch::Receiver<bool>,
) {
    let interval_secs = {
        let guard = manager.lock().await;
        u64::try_from(guard.config.autosave_interval_secs).unwrap_or(30)
    };
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut guard = manager.lock().await;
                if let Err(error) = guard.maybe_autosave(Utc::now()) {
                    warn!(%error, "autosave failed; will retry next tick");
                }
            },
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    return;
                }
            },
        }
    }
}
