//! Draft reconciliation: local autosave cache vs. server-held checklist.
//!
//! Two physical copies of the form can exist at load time. Reconciliation
//! is a single documented priority function ([`draft_priority`]), not
//! heuristic field checks scattered through load logic:
//!
//! - the **local** draft wins only while the server status is still
//!   in-progress, or when the client re-enters the form from a review
//!   screen in a forced edit mode;
//! - in every other case a server-held checklist wins;
//! - a local draft that is the only copy in existence is used as a last
//!   resort.
//!
//! The manager ([`DraftManager`]) owns the autosave cadence (fixed
//! interval, not per keystroke), persists synchronously before any
//! submit/draft action, and guards against applying late-arriving network
//! responses with a request generation counter.

mod error;
mod manager;
mod store;


pub use error::DraftError;
pub use manager::{DraftManager, DraftManagerConfig, GenerationCounter, LoadOutcome, autosave_loop};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore, StoreError, StoredDraft};

use chrono::{DateTime, Duration, Utc};

use crate::workflow::InspectionStatus;

/// Which physical copies of the draft exist at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSource {
    /// Neither side holds form content.
    NoDraft,
    /// Only the local autosave cache has content.
    LocalOnly,
    /// Only the server checklist has content.
    ServerOnly,
    /// Both copies exist and the priority rule decides.
    Both,
}

impl DraftSource {
    /// Classifies which copies exist.
    #[must_use]
    pub const fn classify(has_local: bool, has_server: bool) -> Self {
        match (has_local, has_server) {
            (false, false) => Self::NoDraft,
            (true, false) => Self::LocalOnly,
            (false, true) => Self::ServerOnly,
            (true, true) => Self::Both,
        }
    }
}

/// The authoritative copy chosen at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPriority {
    /// Start from the local autosaved draft.
    Local,
    /// Start from the server checklist.
    Server,
    /// Start from an empty form.
    Empty,
}

/// Decides which copy is authoritative at load time.
///
/// Deterministic over its inputs; the inspection's server status is the
/// only lifecycle fact consulted.
#[must_use]
pub const fn draft_priority(
    server_status: InspectionStatus,
    has_local: bool,
    has_server_checklist: bool,
    forced_reentry: bool,
) -> DraftPriority {
    if has_local && (server_status.is_in_progress() || forced_reentry) {
        return DraftPriority::Local;
    }
    if has_server_checklist {
        return DraftPriority::Server;
    }
    if has_local {
        // Last resort: the local cache is the only copy in existence.
        return DraftPriority::Local;
    }
    DraftPriority::Empty
}

/// Default interval between local autosaves of the working snapshot.
pub const AUTOSAVE_INTERVAL: Duration = Duration::seconds(30);

/// Returns true when an autosave is due under the given interval.
///
/// A snapshot that has never been saved is always due. This is the single
/// cadence rule; [`DraftManager::maybe_autosave`] routes through it with the
/// configured interval.
#[must_use]
pub fn autosave_due(
    last_saved: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    interval: Duration,
) -> bool {
    match last_saved {
        None => true,
        Some(last) => now - last >= interval,
    }
}
