//! Tests for the workflow module.

use super::*;

// =============================================================================
// Status Catalog Tests
// =============================================================================

#[test]
fn test_stage_mapping_is_total() {
    for status in InspectionStatus::ALL {
        // Every status maps to exactly one stage; stage() is a pure
        // function, so calling it twice must agree.
        assert_eq!(status.stage(), status.stage(), "{status}");
    }
}

#[test]
fn test_catalog_group_sizes() {
    let count = |stage: WorkflowStage| {
        InspectionStatus::ALL
            .iter()
            .filter(|s| s.stage() == stage)
            .count()
    };

    assert_eq!(count(WorkflowStage::Creation), 1);
    assert_eq!(count(WorkflowStage::Assignment), 3);
    assert_eq!(count(WorkflowStage::InProgress), 3);
    assert_eq!(count(WorkflowStage::Completed), 6);
    assert_eq!(count(WorkflowStage::Review), 3);
    assert_eq!(count(WorkflowStage::Legal), 3);
    assert_eq!(count(WorkflowStage::Closed), 2);
}

#[test]
fn test_status_string_roundtrip() {
    for status in InspectionStatus::ALL {
        assert_eq!(InspectionStatus::parse(status.as_str()), Ok(status));
    }
}

#[test]
fn test_unknown_status_is_an_error() {
    let result = InspectionStatus::parse("SECTION_REOPENED");
    assert_eq!(
        result,
        Err(WorkflowError::UnknownStatus {
            value: "SECTION_REOPENED".to_string(),
        })
    );
}

#[test]
fn test_serde_uses_catalog_strings() {
    let json = serde_json::to_string(&InspectionStatus::SectionInProgress).unwrap();
    assert_eq!(json, "\"SECTION_IN_PROGRESS\"");

    let parsed: InspectionStatus = serde_json::from_str("\"CLOSED_NON_COMPLIANT\"").unwrap();
    assert_eq!(parsed, InspectionStatus::ClosedNonCompliant);
}

#[test]
fn test_only_closed_statuses_are_terminal() {
    for status in InspectionStatus::ALL {
        assert_eq!(
            status.is_terminal(),
            status.stage() == WorkflowStage::Closed,
            "{status}"
        );
    }
}

// =============================================================================
// Inspection Record Tests
// =============================================================================

fn sample_inspection(status: InspectionStatus) -> Inspection {
    Inspection {
        id: "insp-001".to_string(),
        status,
        assigned_to: Some(crate::access::Role::MonitoringPersonnel),
        created_by: crate::access::Role::DivisionChief,
        laws: vec![crate::form::EnvironmentalLaw::Ra8749],
        checklist: None,
    }
}

#[test]
fn test_ensure_open_allows_active_statuses() {
    let inspection = sample_inspection(InspectionStatus::MonitoringInProgress);
    assert!(inspection.ensure_open().is_ok());
}

#[test]
fn test_ensure_open_rejects_terminal_statuses() {
    let inspection = sample_inspection(InspectionStatus::ClosedCompliant);
    let result = inspection.ensure_open();
    assert_eq!(
        result,
        Err(WorkflowError::TerminalStatus {
            inspection_id: "insp-001".to_string(),
            status: "CLOSED_COMPLIANT".to_string(),
        })
    );
}

// =============================================================================
// Transition Action Tests
// =============================================================================

#[test]
fn test_only_submit_requires_validation() {
    assert!(
        TransitionAction::Submit {
            decision: ComplianceDecision::Compliant,
        }
        .requires_validation()
    );
    assert!(!TransitionAction::SaveDraft.requires_validation());
    assert!(
        !TransitionAction::Close {
            remarks: "resolved".to_string(),
            final_status: None,
        }
        .requires_validation()
    );
    assert!(
        !TransitionAction::SendNotice {
            kind: NoticeKind::Violation,
            payload: "NOV body".to_string(),
        }
        .requires_validation()
    );
}
