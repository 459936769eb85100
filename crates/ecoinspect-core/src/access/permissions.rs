//! The stage permission table: coarse capabilities per (role, stage).
//!
//! The table is a closed data table covering every (role, stage) pair the
//! catalog can produce. A lookup miss is a programming error, not a runtime
//! expectation; callers treat it as "no access" and log it as unexpected.
//!
//! Design rules encoded here:
//!
//! - Admin is a read-only auditor: `can_view` everywhere, nothing else.
//! - Legal Unit has no view or edit capability before the Review stage; it
//!   enters the workflow only at Review, Legal, and Closed.
//! - Monitoring Personnel never reviews or closes; it edits only its own
//!   Assignment, `InProgress`, and Completed stages.
//! - `can_edit` implies `can_view` on every row.

use serde::{Deserialize, Serialize};

use crate::workflow::WorkflowStage;

use super::role::Role;

/// Coarse capabilities of one role at one workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// May open and read the record.
    pub can_view: bool,
    /// May modify the form content.
    pub can_edit: bool,
    /// May act on someone else's completed submission.
    pub can_review: bool,
    /// May move the record toward or into a closed status.
    pub can_close: bool,
}

impl PermissionRecord {
    /// Builds a record from its four flags.
    #[must_use]
    pub const fn new(can_view: bool, can_edit: bool, can_review: bool, can_close: bool) -> Self {
        Self {
            can_view,
            can_edit,
            can_review,
            can_close,
        }
    }

    /// The no-access record.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }
}

/// One row of the stage permission table.
type Row = (Role, WorkflowStage, PermissionRecord);

const VIEW: PermissionRecord = PermissionRecord::new(true, false, false, false);
const VIEW_EDIT: PermissionRecord = PermissionRecord::new(true, true, false, false);
const VIEW_REVIEW: PermissionRecord = PermissionRecord::new(true, false, true, false);
const VIEW_REVIEW_CLOSE: PermissionRecord = PermissionRecord::new(true, false, true, true);
const VIEW_CLOSE: PermissionRecord = PermissionRecord::new(true, false, false, true);
const VIEW_EDIT_CLOSE: PermissionRecord = PermissionRecord::new(true, true, false, true);
const NONE: PermissionRecord = PermissionRecord::none();

/// The complete stage permission table, one row per (role, stage) pair.
const STAGE_PERMISSIONS: [Row; 42] = {
    use Role::{Admin, DivisionChief, LegalUnit, MonitoringPersonnel, SectionChief, UnitHead};
    use WorkflowStage::{Assignment, Closed, Completed, Creation, InProgress, Legal, Review};

    [
        (Admin, Creation, VIEW),
        (Admin, Assignment, VIEW),
        (Admin, InProgress, VIEW),
        (Admin, Completed, VIEW),
        (Admin, Review, VIEW),
        (Admin, Legal, VIEW),
        (Admin, Closed, VIEW),
        (DivisionChief, Creation, VIEW_EDIT),
        (DivisionChief, Assignment, VIEW_EDIT),
        (DivisionChief, InProgress, VIEW),
        (DivisionChief, Completed, VIEW_REVIEW),
        (DivisionChief, Review, VIEW_REVIEW_CLOSE),
        (DivisionChief, Legal, VIEW_CLOSE),
        (DivisionChief, Closed, VIEW),
        (SectionChief, Creation, VIEW),
        (SectionChief, Assignment, VIEW_EDIT),
        (SectionChief, InProgress, VIEW_EDIT),
        (SectionChief, Completed, VIEW_REVIEW),
        (SectionChief, Review, VIEW_REVIEW),
        (SectionChief, Legal, VIEW),
        (SectionChief, Closed, VIEW),
        (UnitHead, Creation, NONE),
        (UnitHead, Assignment, VIEW_EDIT),
        (UnitHead, InProgress, VIEW_EDIT),
        (UnitHead, Completed, VIEW_REVIEW),
        (UnitHead, Review, VIEW_REVIEW),
        (UnitHead, Legal, VIEW),
        (UnitHead, Closed, VIEW),
        (MonitoringPersonnel, Creation, NONE),
        (MonitoringPersonnel, Assignment, VIEW_EDIT),
        (MonitoringPersonnel, InProgress, VIEW_EDIT),
        (MonitoringPersonnel, Completed, VIEW_EDIT),
        (MonitoringPersonnel, Review, NONE),
        (MonitoringPersonnel, Legal, NONE),
        (MonitoringPersonnel, Closed, VIEW),
        (LegalUnit, Creation, NONE),
        (LegalUnit, Assignment, NONE),
        (LegalUnit, InProgress, NONE),
        (LegalUnit, Completed, NONE),
        (LegalUnit, Review, VIEW),
        (LegalUnit, Legal, VIEW_EDIT_CLOSE),
        (LegalUnit, Closed, VIEW),
    ]
};

/// Looks up the coarse capabilities of `role` at `stage`.
///
/// Returns `None` on a table miss. The table covers every (role, stage)
/// pair, so a miss indicates table corruption; callers must treat it as
/// no access and log it as unexpected.
#[must_use]
pub fn permissions_for(role: Role, stage: WorkflowStage) -> Option<PermissionRecord> {
    STAGE_PERMISSIONS
        .iter()
        .find(|(r, s, _)| *r == role && *s == stage)
        .map(|(_, _, record)| *record)
}
