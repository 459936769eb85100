//! The visibility resolver: (role, status, mode) → concrete UI affordances.
//!
//! The resolver is a pure function recomputed on every render. It never
//! panics and never errs on the side of access: every unrecognized
//! combination resolves to the maximally restrictive decision
//! ([`ButtonVisibility::restricted`]) so that a bad lookup denies write
//! access rather than silently allowing it.
//!
//! Evaluation order:
//!
//! 1. The access gate ([`can_access`]) is the outer authorization boundary;
//!    when it denies, the resolver short-circuits to the restricted decision
//!    and the caller must not render editable content at all.
//! 2. Stage-derived defaults come from the permission table.
//! 3. The override matrix replaces every field it mentions.
//! 4. Presentation mode (preview / review-approval / return-to-review)
//!    adjusts the final decision.

use tracing::warn;

use crate::workflow::{InspectionStatus, WorkflowStage};

use super::overrides::override_for;
use super::permissions::permissions_for;
use super::role::Role;

/// The resolved, presentation-ready decision for one (role, status, mode)
/// combination. Never stored; recomputed per render or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    /// Offer the "save as draft" action.
    pub show_draft: bool,
    /// Offer the submit / forward action.
    pub show_submit: bool,
    /// Offer the close action.
    pub show_close: bool,
    /// Offer a back-navigation affordance.
    pub show_back: bool,
    /// The form must render read-only.
    pub is_read_only: bool,
}

impl ButtonVisibility {
    /// The fail-closed decision: no actions offered, form read-only.
    #[must_use]
    pub const fn restricted() -> Self {
        Self {
            show_draft: false,
            show_submit: false,
            show_close: false,
            show_back: false,
            is_read_only: true,
        }
    }
}

/// How the form is being presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Regular editing view.
    #[default]
    Normal,
    /// Read-only preview of the rendered form.
    Preview,
}

/// Where the user navigated from, when it changes the available actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnTarget {
    /// Opened directly.
    #[default]
    None,
    /// Opened from a review screen for editing; only full resubmission is
    /// meaningful, and the user must be able to return to the review screen.
    Review,
}

/// Presentation context for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveContext {
    /// Normal or preview presentation.
    pub mode: ViewMode,
    /// Forced re-entry origin, if any.
    pub return_to: ReturnTarget,
    /// A reviewer is previewing someone else's completed submission and must
    /// be able to return to the review screen.
    pub review_approval: bool,
}

/// Decides whether `role` may view an inspection in `status` at all.
///
/// This is the outer authorization boundary and must be evaluated before
/// [`resolve`]: when it returns false the caller must not render editable
/// content, not merely hide buttons. Defaults to false on any lookup miss.
#[must_use]
pub fn can_access(role: Role, status: InspectionStatus) -> bool {
    permissions_for(role, status.stage()).is_some_and(|p| p.can_view)
}

/// Resolves the button visibility for one (role, status, context) triple.
///
/// Pure and total: every input resolves to a decision, and unrecognized or
/// denied combinations yield [`ButtonVisibility::restricted`].
#[must_use]
pub fn resolve(role: Role, status: InspectionStatus, ctx: &ResolveContext) -> ButtonVisibility {
    let stage = status.stage();

    let Some(perm) = permissions_for(role, stage) else {
        warn!(role = %role, stage = %stage, "stage permission table miss; denying access");
        return ButtonVisibility::restricted();
    };

    // Outer boundary: a role without view capability gets nothing, in every
    // mode.
    if !perm.can_view {
        return ButtonVisibility::restricted();
    }

    // Stage-derived defaults.
    let mut vis = ButtonVisibility {
        show_draft: perm.can_edit,
        show_submit: perm.can_edit,
        show_close: perm.can_view,
        show_back: false,
        is_read_only: !perm.can_edit,
    };

    // Fine-grained exceptions: mentioned fields fully replace the defaults.
    if let Some(o) = override_for(status, role) {
        if let Some(v) = o.show_draft {
            vis.show_draft = v;
        }
        if let Some(v) = o.show_submit {
            vis.show_submit = v;
        }
        if let Some(v) = o.show_close {
            vis.show_close = v;
        }
        if let Some(v) = o.show_back {
            vis.show_back = v;
        }
        if let Some(v) = o.read_only {
            vis.is_read_only = v;
        }
    }

    if matches!(ctx.mode, ViewMode::Preview) {
        vis.is_read_only = true;
        vis.show_draft = false;
        vis.show_submit = false;

        // An editable in-progress preview returns to the form; review and
        // legal previews have no return path and close instead.
        if stage == WorkflowStage::InProgress {
            vis.show_back = true;
        }
        if matches!(stage, WorkflowStage::Review | WorkflowStage::Legal) {
            vis.show_close = true;
        }

        // Review-approval preview always returns to the review screen,
        // regardless of stage.
        if ctx.review_approval {
            vis.show_back = true;
            vis.show_close = false;
        }
    }

    if matches!(ctx.return_to, ReturnTarget::Review) {
        vis.show_back = true;
        vis.show_close = false;
        vis.show_draft = false;
        if matches!(ctx.mode, ViewMode::Normal) {
            vis.show_submit = perm.can_edit;
            vis.is_read_only = !perm.can_edit;
        }
    }

    vis
}

/// String-level entry point for callers holding raw role/status values.
///
/// Unknown strings fail closed: the miss is logged as unexpected and the
/// restricted decision is returned. Never surfaced as user feedback.
#[must_use]
pub fn resolve_str(role: &str, status: &str, ctx: &ResolveContext) -> ButtonVisibility {
    let Ok(role) = Role::parse(role) else {
        warn!(role, "unknown role; denying access");
        return ButtonVisibility::restricted();
    };
    let Ok(status) = InspectionStatus::parse(status) else {
        warn!(status, "unknown inspection status; denying access");
        return ButtonVisibility::restricted();
    };
    resolve(role, status, ctx)
}
