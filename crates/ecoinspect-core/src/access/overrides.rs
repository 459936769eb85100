//! The status-role override matrix: fine-grained exceptions to the stage
//! permission table.
//!
//! Two statuses in the same stage can require different buttons for the same
//! role. A freshly assigned record and an in-progress record are both
//! edit-capable with identical buttons, but a reviewed status of the Review
//! stage is close-only for the role that already acted on it while the next
//! reviewer up gets a forward button.
//!
//! When an override exists, every field it mentions fully replaces the
//! stage-derived default for that field; unmentioned fields fall back to the
//! defaults.

use crate::workflow::InspectionStatus;

use super::role::Role;

/// A partial button-visibility decision for one (status, role) pair.
///
/// `None` fields defer to the stage-derived defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityOverride {
    /// Replacement for the draft button, if mentioned.
    pub show_draft: Option<bool>,
    /// Replacement for the submit button, if mentioned.
    pub show_submit: Option<bool>,
    /// Replacement for the close button, if mentioned.
    pub show_close: Option<bool>,
    /// Replacement for the back button, if mentioned.
    pub show_back: Option<bool>,
    /// Replacement for the read-only flag, if mentioned.
    pub read_only: Option<bool>,
}

impl VisibilityOverride {
    const fn new() -> Self {
        Self {
            show_draft: None,
            show_submit: None,
            show_close: None,
            show_back: None,
            read_only: None,
        }
    }

    const fn draft(mut self, value: bool) -> Self {
        self.show_draft = Some(value);
        self
    }

    const fn submit(mut self, value: bool) -> Self {
        self.show_submit = Some(value);
        self
    }

    const fn close(mut self, value: bool) -> Self {
        self.show_close = Some(value);
        self
    }
}

/// A reviewer's forward action: full resubmission, no separate draft saving.
const FORWARD: VisibilityOverride = VisibilityOverride::new().draft(false).submit(true);

/// Terminal review position: the record can only be closed from here.
const CLOSE_ONLY: VisibilityOverride = VisibilityOverride::new()
    .draft(false)
    .submit(false)
    .close(true);

/// One row of the override matrix.
type Row = (InspectionStatus, Role, VisibilityOverride);

/// The override matrix. Rows not present fall back entirely to the stage
/// permission table.
const OVERRIDES: [Row; 13] = {
    use InspectionStatus as S;
    use Role::{DivisionChief, LegalUnit, SectionChief, UnitHead};

    [
        // Creation: the Division Chief assigns rather than drafts.
        (S::DivisionCreated, DivisionChief, VisibilityOverride::new().draft(false)),
        // Completed submissions: the next role up forwards after review.
        (S::MonitoringCompletedCompliant, UnitHead, FORWARD),
        (S::MonitoringCompletedNonCompliant, UnitHead, FORWARD),
        (S::UnitCompletedCompliant, SectionChief, FORWARD),
        (S::UnitCompletedNonCompliant, SectionChief, FORWARD),
        (S::SectionCompletedCompliant, DivisionChief, FORWARD),
        (S::SectionCompletedNonCompliant, DivisionChief, FORWARD),
        // Review chain: each reviewed status forwards one level up; the
        // Division Chief's own reviewed status is close-only.
        (S::UnitReviewed, SectionChief, FORWARD),
        (S::SectionReviewed, DivisionChief, FORWARD),
        (S::DivisionReviewed, DivisionChief, CLOSE_ONLY),
        // Legal: evaluation has no draft concept; once a notice is out the
        // record can only be closed.
        (S::ForLegalReview, LegalUnit, VisibilityOverride::new().draft(false)),
        (S::NovSent, LegalUnit, CLOSE_ONLY),
        (S::NooSent, LegalUnit, CLOSE_ONLY),
    ]
};

/// Looks up the override for a (status, role) pair, if one exists.
#[must_use]
pub fn override_for(status: InspectionStatus, role: Role) -> Option<VisibilityOverride> {
    OVERRIDES
        .iter()
        .find(|(s, r, _)| *s == status && *r == role)
        .map(|(_, _, o)| *o)
}

#[cfg(test)]
pub(crate) fn all_overrides() -> &'static [Row] {
    &OVERRIDES
}
