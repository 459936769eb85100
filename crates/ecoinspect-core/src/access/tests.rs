//! Tests for the access module.

use proptest::prelude::*;

use crate::workflow::{InspectionStatus, WorkflowStage};

use super::*;

// =============================================================================
// Stage Permission Table Tests
// =============================================================================

#[test]
fn test_table_covers_every_role_stage_pair() {
    for role in Role::ALL {
        for stage in WorkflowStage::ALL {
            assert!(
                permissions_for(role, stage).is_some(),
                "missing table row for ({role}, {stage})"
            );
        }
    }
}

#[test]
fn test_admin_is_read_only_everywhere() {
    for stage in WorkflowStage::ALL {
        let record = permissions_for(Role::Admin, stage).unwrap();
        assert!(record.can_view, "{stage}");
        assert!(!record.can_edit, "{stage}");
        assert!(!record.can_review, "{stage}");
        assert!(!record.can_close, "{stage}");
    }
}

#[test]
fn test_edit_implies_view() {
    for role in Role::ALL {
        for stage in WorkflowStage::ALL {
            let record = permissions_for(role, stage).unwrap();
            assert!(
                !record.can_edit || record.can_view,
                "({role}, {stage}) edits without view"
            );
        }
    }
}

#[test]
fn test_legal_unit_enters_only_at_review() {
    use WorkflowStage::{Assignment, Completed, Creation, InProgress};

    for stage in [Creation, Assignment, InProgress, Completed] {
        let record = permissions_for(Role::LegalUnit, stage).unwrap();
        assert!(!record.can_view, "{stage}");
        assert!(!record.can_edit, "{stage}");
    }
    assert!(permissions_for(Role::LegalUnit, WorkflowStage::Review).unwrap().can_view);
    assert!(permissions_for(Role::LegalUnit, WorkflowStage::Legal).unwrap().can_edit);
}

#[test]
fn test_monitoring_personnel_never_reviews_or_closes() {
    for stage in WorkflowStage::ALL {
        let record = permissions_for(Role::MonitoringPersonnel, stage).unwrap();
        assert!(!record.can_review, "{stage}");
        assert!(!record.can_close, "{stage}");
    }
}

// =============================================================================
// Override Matrix Tests
// =============================================================================

#[test]
fn test_override_respects_stage_membership() {
    // An override only makes sense where the coarse table grants view.
    for (status, role, _) in super::overrides::all_overrides() {
        let record = permissions_for(*role, status.stage()).unwrap();
        assert!(record.can_view, "override for inaccessible ({status}, {role})");
    }
}

#[test]
fn test_close_override_never_forces_draft() {
    for (status, role, o) in super::overrides::all_overrides() {
        if o.show_close == Some(true) {
            assert_ne!(
                o.show_draft,
                Some(true),
                "({status}, {role}) turns on close and draft together"
            );
        }
    }
}

#[test]
fn test_unmentioned_fields_fall_back_to_stage_defaults() {
    // FOR_LEGAL_REVIEW / LegalUnit only overrides show_draft; submit and
    // close keep their stage-derived values (edit-capable, view-capable).
    let vis = resolve(
        Role::LegalUnit,
        InspectionStatus::ForLegalReview,
        &ResolveContext::default(),
    );
    assert!(!vis.show_draft);
    assert!(vis.show_submit);
    assert!(vis.show_close);
    assert!(!vis.is_read_only);
}

#[test]
fn test_same_stage_statuses_can_differ_per_role() {
    // SECTION_REVIEWED and DIVISION_REVIEWED share the Review stage but
    // resolve differently for the Division Chief: forward vs close-only.
    let ctx = ResolveContext::default();
    let forward = resolve(Role::DivisionChief, InspectionStatus::SectionReviewed, &ctx);
    let close_only = resolve(Role::DivisionChief, InspectionStatus::DivisionReviewed, &ctx);

    assert!(forward.show_submit);
    assert!(!forward.show_draft);
    assert!(!close_only.show_submit);
    assert!(close_only.show_close);
}

// =============================================================================
// Resolver Tests
// =============================================================================

#[test]
fn test_monitoring_personnel_in_progress_normal() {
    let vis = resolve(
        Role::MonitoringPersonnel,
        InspectionStatus::MonitoringInProgress,
        &ResolveContext::default(),
    );
    assert_eq!(
        vis,
        ButtonVisibility {
            show_draft: true,
            show_submit: true,
            show_close: true,
            show_back: false,
            is_read_only: false,
        }
    );
}

#[test]
fn test_legal_unit_denied_during_section_work() {
    assert!(!can_access(Role::LegalUnit, InspectionStatus::SectionInProgress));

    let vis = resolve(
        Role::LegalUnit,
        InspectionStatus::SectionInProgress,
        &ResolveContext::default(),
    );
    assert_eq!(vis, ButtonVisibility::restricted());
}

#[test]
fn test_assigned_and_in_progress_share_buttons() {
    let ctx = ResolveContext::default();
    let assigned = resolve(
        Role::MonitoringPersonnel,
        InspectionStatus::MonitoringAssigned,
        &ctx,
    );
    let in_progress = resolve(
        Role::MonitoringPersonnel,
        InspectionStatus::MonitoringInProgress,
        &ctx,
    );
    assert_eq!(assigned, in_progress);
}

#[test]
fn test_preview_forces_read_only() {
    let ctx = ResolveContext {
        mode: ViewMode::Preview,
        ..ResolveContext::default()
    };
    let vis = resolve(
        Role::MonitoringPersonnel,
        InspectionStatus::MonitoringInProgress,
        &ctx,
    );
    assert!(vis.is_read_only);
    assert!(!vis.show_draft);
    assert!(!vis.show_submit);
    // Editable in-progress preview returns to the form.
    assert!(vis.show_back);
}

#[test]
fn test_preview_at_review_stage_closes_instead_of_returning() {
    let ctx = ResolveContext {
        mode: ViewMode::Preview,
        ..ResolveContext::default()
    };
    let vis = resolve(Role::SectionChief, InspectionStatus::UnitReviewed, &ctx);
    assert!(vis.show_close);
    assert!(!vis.show_back);
    assert!(vis.is_read_only);
}

#[test]
fn test_return_to_review_reenables_submit_per_edit() {
    let ctx = ResolveContext {
        return_to: ReturnTarget::Review,
        ..ResolveContext::default()
    };

    // Edit-capable role: full resubmission offered, no separate draft.
    let editor = resolve(
        Role::MonitoringPersonnel,
        InspectionStatus::MonitoringInProgress,
        &ctx,
    );
    assert!(editor.show_back);
    assert!(!editor.show_close);
    assert!(editor.show_submit);
    assert!(!editor.show_draft);
    assert!(!editor.is_read_only);

    // View-only role stays read-only.
    let viewer = resolve(Role::Admin, InspectionStatus::MonitoringInProgress, &ctx);
    assert!(viewer.show_back);
    assert!(!viewer.show_submit);
    assert!(viewer.is_read_only);
}

#[test]
fn test_resolve_str_fails_closed_on_unknown_input() {
    let ctx = ResolveContext::default();
    assert_eq!(
        resolve_str("SUPERVISOR", "SECTION_IN_PROGRESS", &ctx),
        ButtonVisibility::restricted()
    );
    assert_eq!(
        resolve_str("ADMIN", "SECTION_PAUSED", &ctx),
        ButtonVisibility::restricted()
    );
}

#[test]
fn test_resolve_str_matches_typed_resolution() {
    let ctx = ResolveContext::default();
    assert_eq!(
        resolve_str("MONITORING_PERSONNEL", "MONITORING_IN_PROGRESS", &ctx),
        resolve(
            Role::MonitoringPersonnel,
            InspectionStatus::MonitoringInProgress,
            &ctx,
        )
    );
}

// =============================================================================
// Property Tests
// =============================================================================

fn any_role() -> impl Strategy<Value = Role> {
    proptest::sample::select(Role::ALL.to_vec())
}

fn any_status() -> impl Strategy<Value = InspectionStatus> {
    proptest::sample::select(InspectionStatus::ALL.to_vec())
}

fn any_context() -> impl Strategy<Value = ResolveContext> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(preview, review, approval)| {
        ResolveContext {
            mode: if preview { ViewMode::Preview } else { ViewMode::Normal },
            return_to: if review { ReturnTarget::Review } else { ReturnTarget::None },
            review_approval: approval,
        }
    })
}

proptest! {
    #[test]
    fn prop_review_approval_preview_always_returns(
        role in any_role(),
        status in any_status(),
        return_review in any::<bool>(),
    ) {
        let ctx = ResolveContext {
            mode: ViewMode::Preview,
            return_to: if return_review { ReturnTarget::Review } else { ReturnTarget::None },
            review_approval: true,
        };
        let vis = resolve(role, status, &ctx);
        if can_access(role, status) {
            prop_assert!(vis.show_back);
            prop_assert!(!vis.show_close);
        }
    }

    #[test]
    fn prop_gate_denial_implies_restricted(
        role in any_role(),
        status in any_status(),
        ctx in any_context(),
    ) {
        if !can_access(role, status) {
            let vis = resolve(role, status, &ctx);
            prop_assert_eq!(vis, ButtonVisibility::restricted());
        }
    }

    #[test]
    fn prop_preview_never_offers_writes(
        role in any_role(),
        status in any_status(),
        approval in any::<bool>(),
    ) {
        let ctx = ResolveContext {
            mode: ViewMode::Preview,
            return_to: ReturnTarget::None,
            review_approval: approval,
        };
        let vis = resolve(role, status, &ctx);
        prop_assert!(vis.is_read_only);
        prop_assert!(!vis.show_draft);
        prop_assert!(!vis.show_submit);
    }

    #[test]
    fn prop_resolver_is_pure(
        role in any_role(),
        status in any_status(),
        ctx in any_context(),
    ) {
        prop_assert_eq!(resolve(role, status, &ctx), resolve(role, status, &ctx));
    }
}
