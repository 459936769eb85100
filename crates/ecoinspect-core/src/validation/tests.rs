//! Tests for the field validator.

use crate::form::{
    Compliance, ComplianceItem, EnvironmentalLaw, FormDraft, InspectionSystem, Permit, PermitKind,
    TouchedSet,
};

use super::*;

const CURRENT_YEAR: i32 = 2026;

fn ctx() -> ValidationContext {
    ValidationContext::new(CURRENT_YEAR)
}

/// A form that passes every rule for a single-law (RA-8749) inspection.
pub(crate) fn valid_form() -> FormDraft {
    let mut form = FormDraft::default();

    form.general.establishment_name = "Mabuhay Steel Works".to_string();
    form.general.address = "88 Industrial Ave, Valenzuela City".to_string();
    form.general.coordinates = "14.7011, 120.9830".to_string();
    form.general.year_established = "1998".to_string();
    form.general.phone_number = "+63 2 8920 2251".to_string();
    form.general.email = "pco@mabuhaysteel.ph".to_string();
    form.general.pco_name = "R. Santos".to_string();
    form.general.pco_accreditation_no = "2024-07-0153".to_string();
    form.general.operating_hours = Some(16);
    form.general.operating_days_per_week = Some(6);
    form.general.operating_days_per_year = Some(300);
    form.general.environmental_laws = vec![EnvironmentalLaw::Ra8749];

    form.permits.push(Permit {
        law: EnvironmentalLaw::Ra8749,
        kind: PermitKind::PermitToOperateAir,
        permit_number: "POA-2024-0441".to_string(),
        date_issued: None,
        expiry_date: None,
    });

    form.systems.push(InspectionSystem {
        id: "apc".to_string(),
        name: "Air Pollution Control Facilities".to_string(),
        law: EnvironmentalLaw::Ra8749,
        compliant: Some(Compliance::Yes),
        remarks: String::new(),
    });

    form
}

#[test]
fn test_valid_form_produces_no_errors() {
    let errors = validate(&valid_form(), &ctx());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_validator_is_idempotent() {
    let form = {
        let mut f = valid_form();
        f.general.establishment_name.clear();
        f.general.email = "not-an-email".to_string();
        f
    };
    let first = validate(&form, &ctx());
    let second = validate(&form, &ctx());
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_all_errors_reported_in_one_pass() {
    let errors = validate(&FormDraft::default(), &ctx());

    // Not fail-fast: the empty form violates every required-field rule at
    // once.
    assert!(errors.contains("general.establishment_name"));
    assert!(errors.contains("general.address"));
    assert!(errors.contains("general.coordinates"));
    assert!(errors.contains("general.year_established"));
    assert!(errors.contains("general.phone_number"));
    assert!(errors.contains("general.email"));
    assert!(errors.contains("general.pco_accreditation_no"));
    assert!(errors.contains("general.operating_hours"));
    assert!(errors.contains("general.environmental_laws"));
}

#[test]
fn test_year_in_future_is_rejected() {
    let mut form = valid_form();
    form.general.year_established = "2027".to_string();
    let errors = validate(&form, &ctx());
    assert!(errors.contains("general.year_established"));
}

#[test]
fn test_fax_checked_only_when_provided() {
    let mut form = valid_form();
    form.general.fax_number = String::new();
    assert!(!validate(&form, &ctx()).contains("general.fax_number"));

    form.general.fax_number = "not a fax".to_string();
    assert!(validate(&form, &ctx()).contains("general.fax_number"));
}

#[test]
fn test_operating_ranges_enforced() {
    let mut form = valid_form();
    form.general.operating_hours = Some(25);
    form.general.operating_days_per_week = Some(8);
    form.general.operating_days_per_year = Some(366);

    let errors = validate(&form, &ctx());
    assert!(errors.contains("general.operating_hours"));
    assert!(errors.contains("general.operating_days_per_week"));
    assert!(errors.contains("general.operating_days_per_year"));
}

// =============================================================================
// Law-Conditional Rules
// =============================================================================

#[test]
fn test_permit_requirement_follows_selected_laws() {
    let mut form = valid_form();
    form.permits[0].permit_number = String::new();

    // RA-8749 selected, no permit number under it: error present.
    let errors = validate(&form, &ctx());
    assert!(errors.contains("permits"));

    // Removing RA-8749 (swapping in permit-free RA-9003) makes the
    // requirement disappear, holding all else constant.
    form.general.environmental_laws = vec![EnvironmentalLaw::Ra9003];
    form.systems.clear();
    let errors = validate(&form, &ctx());
    assert!(!errors.contains("permits"));
}

#[test]
fn test_permit_under_unselected_law_does_not_satisfy_rule() {
    let mut form = valid_form();
    // The only filled permit belongs to a law that is not selected.
    form.permits[0].law = EnvironmentalLaw::Ra9275;
    let errors = validate(&form, &ctx());
    assert!(errors.contains("permits"));
}

#[test]
fn test_at_least_one_law_required() {
    let mut form = valid_form();
    form.general.environmental_laws.clear();
    let errors = validate(&form, &ctx());
    assert!(errors.contains("general.environmental_laws"));
}

#[test]
fn test_system_remarks_required_only_for_selected_laws() {
    let mut form = valid_form();
    form.systems.push(InspectionSystem {
        id: "wastewater".to_string(),
        name: "Wastewater Treatment".to_string(),
        law: EnvironmentalLaw::Ra9275,
        compliant: Some(Compliance::No),
        remarks: String::new(),
    });
    form.recommendations = vec!["Require corrective action plan".to_string()];

    // RA-9275 is not selected, so its system does not demand remarks.
    let errors = validate(&form, &ctx());
    assert!(!errors.contains("systems.wastewater.remarks"));

    // Selecting the law activates the rule.
    form.general.environmental_laws.push(EnvironmentalLaw::Ra9275);
    form.permits.push(Permit {
        law: EnvironmentalLaw::Ra9275,
        kind: PermitKind::DischargePermit,
        permit_number: "DP-2025-112".to_string(),
        date_issued: None,
        expiry_date: None,
    });
    let errors = validate(&form, &ctx());
    assert!(errors.contains("systems.wastewater.remarks"));
}

// =============================================================================
// Recommendation Rule
// =============================================================================

#[test]
fn test_compliant_form_needs_no_recommendation() {
    let errors = validate(&valid_form(), &ctx());
    assert!(!errors.contains("recommendations"));
}

#[test]
fn test_non_compliant_finding_requires_recommendation() {
    let mut form = valid_form();
    let baseline = validate(&form, &ctx());
    assert!(baseline.is_empty());

    form.systems[0].compliant = Some(Compliance::No);
    form.systems[0].remarks = "Scrubber offline during operation".to_string();

    // Exactly one new error, keyed to recommendations.
    let errors = validate(&form, &ctx());
    assert_eq!(errors.len(), 1);
    assert!(errors.contains("recommendations"));

    form.recommendations = vec!["Issue notice to repair scrubber".to_string()];
    assert!(validate(&form, &ctx()).is_empty());
}

#[test]
fn test_non_compliant_checklist_item_also_requires_recommendation() {
    let mut form = valid_form();
    form.compliance_items.push(ComplianceItem {
        law: EnvironmentalLaw::Ra8749,
        requirement: "Quarterly stack emission test".to_string(),
        compliant: Some(Compliance::No),
        remarks: "No test on record for Q2".to_string(),
    });
    let errors = validate(&form, &ctx());
    assert!(errors.contains("recommendations"));
}

#[test]
fn test_not_applicable_is_not_non_compliant() {
    let mut form = valid_form();
    form.systems[0].compliant = Some(Compliance::NotApplicable);
    let errors = validate(&form, &ctx());
    assert!(!errors.contains("recommendations"));
    assert!(!errors.contains("systems.apc.remarks"));
}

// =============================================================================
// Touched-Set Filtering
// =============================================================================

#[test]
fn test_visible_filters_by_touched_fields() {
    let errors = validate(&FormDraft::default(), &ctx());
    assert!(errors.len() > 2);

    let mut touched = TouchedSet::new();
    touched.touch("general.establishment_name");
    touched.touch("general.email");

    let visible = errors.visible(&touched);
    assert_eq!(visible.len(), 2);
    assert!(visible.contains("general.establishment_name"));
    assert!(visible.contains("general.email"));

    // Filtering is presentation-only; the full set is untouched.
    assert!(errors.len() > visible.len());
}
