//! Conditional, law-dependent validation of the inspection form.
//!
//! [`validate`] runs every rule in one pass and returns the complete error
//! set; it is never fail-fast, so the caller can present all problems
//! together. An empty set is the precondition for any forward transition
//! that submits the form.
//!
//! Which rules apply depends on the laws selected in
//! `general.environmental_laws`: a field required under one law may be
//! irrelevant under another. Validation itself is stateless and ignores
//! which fields the user has touched; display filtering goes through
//! [`ValidationErrorSet::visible`].

mod rules;

#[cfg(test)]
pub(crate) mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::{FormDraft, TouchedSet};

/// Mapping from field/item key to a human-readable message.
///
/// Ordered and deterministic: validating the same snapshot twice yields the
/// same set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorSet(BTreeMap<String, String>);

impl ValidationErrorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field key.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Returns the message for a field key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if a field key has an error.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the form passed every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Filters the set down to fields the user has touched.
    ///
    /// Presentation-only: submission gating always checks the full set.
    #[must_use]
    pub fn visible(&self, touched: &TouchedSet) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| touched.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

/// External facts the validator needs.
///
/// Passed explicitly so validation is deterministic and testable; there is
/// no hidden clock read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The current calendar year, for the year-established check.
    pub current_year: i32,
}

impl ValidationContext {
    /// Builds a context anchored at `current_year`.
    #[must_use]
    pub const fn new(current_year: i32) -> Self {
        Self { current_year }
    }
}

/// Validates the form against every applicable rule, in one pass.
#[must_use]
pub fn validate(form: &FormDraft, ctx: &ValidationContext) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();

    check_general(form, ctx, &mut errors);
    check_laws_and_permits(form, &mut errors);
    check_findings(form, &mut errors);

    errors
}

fn check_general(form: &FormDraft, ctx: &ValidationContext, errors: &mut ValidationErrorSet) {
    let g = &form.general;

    if g.establishment_name.trim().is_empty() {
        errors.insert(
            "general.establishment_name",
            "Establishment name is required",
        );
    }
    if g.address.trim().is_empty() {
        errors.insert("general.address", "Establishment address is required");
    }

    if !rules::valid_coordinates(g.coordinates.trim()) {
        errors.insert(
            "general.coordinates",
            "Coordinates must be decimal \"latitude, longitude\"",
        );
    }

    if !rules::valid_year(g.year_established.trim(), ctx.current_year) {
        errors.insert(
            "general.year_established",
            "Year established must be a four-digit year not in the future",
        );
    }

    if !rules::valid_phone(g.phone_number.trim()) {
        errors.insert("general.phone_number", "Phone number is not valid");
    }
    // Fax is optional; format-checked only when provided.
    if !g.fax_number.trim().is_empty() && !rules::valid_phone(g.fax_number.trim()) {
        errors.insert("general.fax_number", "Fax number is not valid");
    }

    if !rules::valid_email(g.email.trim()) {
        errors.insert("general.email", "Email address is not valid");
    }

    if g.pco_name.trim().is_empty() {
        errors.insert("general.pco_name", "Pollution Control Officer is required");
    }
    if !rules::valid_pco_accreditation(g.pco_accreditation_no.trim()) {
        errors.insert(
            "general.pco_accreditation_no",
            "PCO accreditation number must match YYYY-RR-NNNN",
        );
    }

    if !rules::in_range(g.operating_hours, 1, 24) {
        errors.insert(
            "general.operating_hours",
            "Operating hours per day must be between 1 and 24",
        );
    }
    if !rules::in_range(g.operating_days_per_week, 1, 7) {
        errors.insert(
            "general.operating_days_per_week",
            "Operating days per week must be between 1 and 7",
        );
    }
    if !rules::in_range(g.operating_days_per_year, 1, 365) {
        errors.insert(
            "general.operating_days_per_year",
            "Operating days per year must be between 1 and 365",
        );
    }
}

fn check_laws_and_permits(form: &FormDraft, errors: &mut ValidationErrorSet) {
    let g = &form.general;

    if g.environmental_laws.is_empty() {
        errors.insert(
            "general.environmental_laws",
            "At least one environmental law must be selected",
        );
        return;
    }

    // At least one permit number among permits of selected laws. Skipped
    // when no selected law carries a permit kind (e.g. RA-9003 alone).
    let any_permit_applicable = g
        .environmental_laws
        .iter()
        .any(|law| !law.permit_kinds().is_empty());
    if !any_permit_applicable {
        return;
    }

    let any_permit_filled = form
        .permits
        .iter()
        .filter(|p| g.law_selected(p.law))
        .any(|p| !p.permit_number.trim().is_empty());
    if !any_permit_filled {
        errors.insert(
            "permits",
            "At least one permit number is required under the selected laws",
        );
    }
}

fn check_findings(form: &FormDraft, errors: &mut ValidationErrorSet) {
    // Per-system remarks when the system is non-compliant, but only for
    // systems whose law is currently selected.
    for system in &form.systems {
        if !form.general.law_selected(system.law) {
            continue;
        }
        let non_compliant = system.compliant.is_some_and(|c| c.is_non_compliant());
        if non_compliant && system.remarks.trim().is_empty() {
            errors.insert(
                format!("systems.{}.remarks", system.id),
                format!("Remarks are required for non-compliant system {}", system.name),
            );
        }
    }

    // A recommendation is required exactly when something was found
    // non-compliant.
    let no_recommendation = form.recommendations.iter().all(|r| r.trim().is_empty());
    if form.has_non_compliant_finding() && no_recommendation {
        errors.insert(
            "recommendations",
            "A recommendation is required when any item or system is non-compliant",
        );
    }
}
