//! The editable content of an inspection: the form draft model.
//!
//! Two physical copies of a [`FormDraft`] may exist concurrently: a local
//! autosaved draft and a server-held checklist. The draft reconciliation
//! manager decides which one is authoritative at load time; this module only
//! defines the shape.

mod law;

pub use law::{EnvironmentalLaw, PermitKind};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Compliance state of one checklist requirement or inspected system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Compliance {
    /// Requirement met.
    Yes,
    /// Requirement not met.
    No,
    /// Requirement does not apply to this establishment.
    NotApplicable,
}

impl Compliance {
    /// Returns true for an explicit non-compliant marking.
    #[must_use]
    pub const fn is_non_compliant(&self) -> bool {
        matches!(self, Self::No)
    }
}

/// Establishment identity and operating profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneralInfo {
    /// Establishment name.
    #[serde(default)]
    pub establishment_name: String,

    /// Establishment address.
    #[serde(default)]
    pub address: String,

    /// Geographic coordinates in `"lat, lon"` decimal form.
    #[serde(default)]
    pub coordinates: String,

    /// Year established, four digits.
    #[serde(default)]
    pub year_established: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone_number: String,

    /// Contact fax number, when present.
    #[serde(default)]
    pub fax_number: String,

    /// Contact email address.
    #[serde(default)]
    pub email: String,

    /// Pollution Control Officer name.
    #[serde(default)]
    pub pco_name: String,

    /// PCO accreditation number, `YYYY-RR-NNNN`.
    #[serde(default)]
    pub pco_accreditation_no: String,

    /// Operating hours per day, 1–24.
    #[serde(default)]
    pub operating_hours: Option<u32>,

    /// Operating days per week, 1–7.
    #[serde(default)]
    pub operating_days_per_week: Option<u32>,

    /// Operating days per year, 1–365.
    #[serde(default)]
    pub operating_days_per_year: Option<u32>,

    /// The statutes selected for this inspection. Drives which permits,
    /// checklist items, and finding systems are applicable.
    #[serde(default)]
    pub environmental_laws: Vec<EnvironmentalLaw>,
}

impl GeneralInfo {
    /// Returns true if `law` is selected on this form.
    #[must_use]
    pub fn law_selected(&self, law: EnvironmentalLaw) -> bool {
        self.environmental_laws.contains(&law)
    }
}

/// Why the inspection is being conducted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurposeOfInspection {
    /// Routine compliance verification.
    #[serde(default)]
    pub verify_compliance: bool,

    /// Investigating a filed complaint.
    #[serde(default)]
    pub investigate_complaint: bool,

    /// Follow-up on a prior inspection's findings.
    #[serde(default)]
    pub follow_up: bool,

    /// Free-form purpose, when none of the above applies.
    #[serde(default)]
    pub other: Option<String>,
}

/// A permit or registration held by the establishment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permit {
    /// The law this permit belongs to.
    pub law: EnvironmentalLaw,

    /// The kind of permit.
    pub kind: PermitKind,

    /// Permit number as issued; empty when not held.
    #[serde(default)]
    pub permit_number: String,

    /// Date the permit was issued.
    #[serde(default)]
    pub date_issued: Option<chrono::NaiveDate>,

    /// Permit expiry date.
    #[serde(default)]
    pub expiry_date: Option<chrono::NaiveDate>,
}

/// One checklist requirement under a selected law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    /// The law the requirement comes from.
    pub law: EnvironmentalLaw,

    /// The requirement text.
    pub requirement: String,

    /// Compliance marking; `None` until the inspector decides.
    #[serde(default)]
    pub compliant: Option<Compliance>,

    /// Inspector remarks.
    #[serde(default)]
    pub remarks: String,
}

/// An inspected environmental management system (a finding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionSystem {
    /// Stable system identifier, used to key attachments and error entries.
    pub id: String,

    /// Display name, e.g. "Air Pollution Control Facilities".
    pub name: String,

    /// The law this system is inspected under.
    pub law: EnvironmentalLaw,

    /// Compliance marking; `None` until the inspector decides.
    #[serde(default)]
    pub compliant: Option<Compliance>,

    /// Inspector remarks; required when the system is non-compliant and its
    /// law is selected.
    #[serde(default)]
    pub remarks: String,
}

/// A reference to a server-stored finding attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Server-assigned attachment identifier.
    pub id: String,

    /// The finding system the attachment belongs to.
    pub system_id: String,

    /// Display caption.
    #[serde(default)]
    pub caption: String,

    /// Server URL of the stored file.
    pub url: String,
}

/// The complete editable inspection form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormDraft {
    /// Establishment identity and operating profile.
    #[serde(default)]
    pub general: GeneralInfo,

    /// Purpose-of-inspection flags.
    #[serde(default)]
    pub purposes: PurposeOfInspection,

    /// Permits held, one row per (law, kind) the form offers.
    #[serde(default)]
    pub permits: Vec<Permit>,

    /// Checklist requirements under the selected laws.
    #[serde(default)]
    pub compliance_items: Vec<ComplianceItem>,

    /// Inspected systems (findings).
    #[serde(default)]
    pub systems: Vec<InspectionSystem>,

    /// Recommendations; required when anything is non-compliant.
    #[serde(default)]
    pub recommendations: Vec<String>,

    /// Finding attachments already uploaded to the server.
    #[serde(default)]
    pub attachments: Vec<AttachmentRef>,
}

impl FormDraft {
    /// Returns true if any compliance item or finding system is marked
    /// non-compliant.
    #[must_use]
    pub fn has_non_compliant_finding(&self) -> bool {
        self.compliance_items
            .iter()
            .any(|i| i.compliant.is_some_and(|c| c.is_non_compliant()))
            || self
                .systems
                .iter()
                .any(|s| s.compliant.is_some_and(|c| c.is_non_compliant()))
    }
}

/// The set of field keys the user has interacted with.
///
/// Conditional validation display is driven by this explicit set rather
/// than implicit render-order state: the validator always returns the full
/// error set, and callers filter presentation through the touched set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<String>);

impl TouchedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a field key as touched.
    pub fn touch(&mut self, key: impl Into<String>) {
        self.0.insert(key.into());
    }

    /// Returns true if the field key has been touched.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Number of touched fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
