//! The status catalog: every inspection status and its workflow stage.
//!
//! The catalog is the single source of truth for the status → stage mapping.
//! No other component may infer a stage by pattern-matching on the status
//! name; everything routes through [`InspectionStatus::stage`].

use serde::{Deserialize, Serialize};

use super::error::WorkflowError;

/// The seven coarse workflow phases every status belongs to.
///
/// The mapping from status to stage is total and fixed; it is never
/// role-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStage {
    /// Record has been created but not yet assigned.
    Creation,
    /// Record is assigned to a role but work has not started.
    Assignment,
    /// The assignee is actively filling out the inspection form.
    InProgress,
    /// The assignee has submitted a completed form.
    Completed,
    /// A reviewing role is evaluating the submission.
    Review,
    /// The Legal Unit is handling violations or orders.
    Legal,
    /// Terminal stage; no further transitions.
    Closed,
}

impl WorkflowStage {
    /// Returns the string representation of this stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Creation => "CREATION",
            Self::Assignment => "ASSIGNMENT",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Review => "REVIEW",
            Self::Legal => "LEGAL",
            Self::Closed => "CLOSED",
        }
    }

    /// All stages, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Creation,
        Self::Assignment,
        Self::InProgress,
        Self::Completed,
        Self::Review,
        Self::Legal,
        Self::Closed,
    ];
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fine-grained inspection lifecycle status.
///
/// Statuses are grouped by stage: one creation status, three assignment
/// statuses (one per assignable role), three in-progress statuses, six
/// completed statuses (compliant / non-compliant per assignable role),
/// three review statuses, three legal statuses, and two terminal closed
/// statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionStatus {
    /// Created by the Division Chief, not yet assigned.
    DivisionCreated,

    /// Assigned to the Section Chief.
    SectionAssigned,
    /// Assigned to a Unit Head.
    UnitAssigned,
    /// Assigned to Monitoring Personnel.
    MonitoringAssigned,

    /// Section Chief is filling out the form.
    SectionInProgress,
    /// Unit Head is filling out the form.
    UnitInProgress,
    /// Monitoring Personnel is filling out the form.
    MonitoringInProgress,

    /// Section Chief submitted with a compliant finding.
    SectionCompletedCompliant,
    /// Section Chief submitted with a non-compliant finding.
    SectionCompletedNonCompliant,
    /// Unit Head submitted with a compliant finding.
    UnitCompletedCompliant,
    /// Unit Head submitted with a non-compliant finding.
    UnitCompletedNonCompliant,
    /// Monitoring Personnel submitted with a compliant finding.
    MonitoringCompletedCompliant,
    /// Monitoring Personnel submitted with a non-compliant finding.
    MonitoringCompletedNonCompliant,

    /// Reviewed by the Unit Head, forwarded up.
    UnitReviewed,
    /// Reviewed by the Section Chief, forwarded up.
    SectionReviewed,
    /// Reviewed by the Division Chief.
    DivisionReviewed,

    /// Endorsed to the Legal Unit for evaluation.
    ForLegalReview,
    /// Notice of Violation sent to the establishment.
    NovSent,
    /// Notice of Order sent to the establishment.
    NooSent,

    /// Closed; establishment found compliant.
    ClosedCompliant,
    /// Closed; establishment found non-compliant.
    ClosedNonCompliant,
}

impl InspectionStatus {
    /// Every status in the catalog, grouped by stage.
    pub const ALL: [Self; 21] = [
        Self::DivisionCreated,
        Self::SectionAssigned,
        Self::UnitAssigned,
        Self::MonitoringAssigned,
        Self::SectionInProgress,
        Self::UnitInProgress,
        Self::MonitoringInProgress,
        Self::SectionCompletedCompliant,
        Self::SectionCompletedNonCompliant,
        Self::UnitCompletedCompliant,
        Self::UnitCompletedNonCompliant,
        Self::MonitoringCompletedCompliant,
        Self::MonitoringCompletedNonCompliant,
        Self::UnitReviewed,
        Self::SectionReviewed,
        Self::DivisionReviewed,
        Self::ForLegalReview,
        Self::NovSent,
        Self::NooSent,
        Self::ClosedCompliant,
        Self::ClosedNonCompliant,
    ];

    /// Returns the workflow stage this status belongs to.
    ///
    /// Total over the catalog; every status maps to exactly one stage.
    #[must_use]
    pub const fn stage(&self) -> WorkflowStage {
        match self {
            Self::DivisionCreated => WorkflowStage::Creation,

            Self::SectionAssigned | Self::UnitAssigned | Self::MonitoringAssigned => {
                WorkflowStage::Assignment
            },

            Self::SectionInProgress | Self::UnitInProgress | Self::MonitoringInProgress => {
                WorkflowStage::InProgress
            },

            Self::SectionCompletedCompliant
            | Self::SectionCompletedNonCompliant
            | Self::UnitCompletedCompliant
            | Self::UnitCompletedNonCompliant
            | Self::MonitoringCompletedCompliant
            | Self::MonitoringCompletedNonCompliant => WorkflowStage::Completed,

            Self::UnitReviewed | Self::SectionReviewed | Self::DivisionReviewed => {
                WorkflowStage::Review
            },

            Self::ForLegalReview | Self::NovSent | Self::NooSent => WorkflowStage::Legal,

            Self::ClosedCompliant | Self::ClosedNonCompliant => WorkflowStage::Closed,
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ClosedCompliant | Self::ClosedNonCompliant)
    }

    /// Returns true if this status is one of the in-progress statuses.
    ///
    /// The draft reconciliation priority rule keys off this predicate.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self.stage(), WorkflowStage::InProgress)
    }

    /// Parses a status from its catalog string.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::UnknownStatus`] if the string is not in the
    /// catalog.
    pub fn parse(s: &str) -> Result<Self, WorkflowError> {
        match s {
            "DIVISION_CREATED" => Ok(Self::DivisionCreated),
            "SECTION_ASSIGNED" => Ok(Self::SectionAssigned),
            "UNIT_ASSIGNED" => Ok(Self::UnitAssigned),
            "MONITORING_ASSIGNED" => Ok(Self::MonitoringAssigned),
            "SECTION_IN_PROGRESS" => Ok(Self::SectionInProgress),
            "UNIT_IN_PROGRESS" => Ok(Self::UnitInProgress),
            "MONITORING_IN_PROGRESS" => Ok(Self::MonitoringInProgress),
            "SECTION_COMPLETED_COMPLIANT" => Ok(Self::SectionCompletedCompliant),
            "SECTION_COMPLETED_NON_COMPLIANT" => Ok(Self::SectionCompletedNonCompliant),
            "UNIT_COMPLETED_COMPLIANT" => Ok(Self::UnitCompletedCompliant),
            "UNIT_COMPLETED_NON_COMPLIANT" => Ok(Self::UnitCompletedNonCompliant),
            "MONITORING_COMPLETED_COMPLIANT" => Ok(Self::MonitoringCompletedCompliant),
            "MONITORING_COMPLETED_NON_COMPLIANT" => Ok(Self::MonitoringCompletedNonCompliant),
            "UNIT_REVIEWED" => Ok(Self::UnitReviewed),
            "SECTION_REVIEWED" => Ok(Self::SectionReviewed),
            "DIVISION_REVIEWED" => Ok(Self::DivisionReviewed),
            "FOR_LEGAL_REVIEW" => Ok(Self::ForLegalReview),
            "NOV_SENT" => Ok(Self::NovSent),
            "NOO_SENT" => Ok(Self::NooSent),
            "CLOSED_COMPLIANT" => Ok(Self::ClosedCompliant),
            "CLOSED_NON_COMPLIANT" => Ok(Self::ClosedNonCompliant),
            _ => Err(WorkflowError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }

    /// Returns the catalog string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DivisionCreated => "DIVISION_CREATED",
            Self::SectionAssigned => "SECTION_ASSIGNED",
            Self::UnitAssigned => "UNIT_ASSIGNED",
            Self::MonitoringAssigned => "MONITORING_ASSIGNED",
            Self::SectionInProgress => "SECTION_IN_PROGRESS",
            Self::UnitInProgress => "UNIT_IN_PROGRESS",
            Self::MonitoringInProgress => "MONITORING_IN_PROGRESS",
            Self::SectionCompletedCompliant => "SECTION_COMPLETED_COMPLIANT",
            Self::SectionCompletedNonCompliant => "SECTION_COMPLETED_NON_COMPLIANT",
            Self::UnitCompletedCompliant => "UNIT_COMPLETED_COMPLIANT",
            Self::UnitCompletedNonCompliant => "UNIT_COMPLETED_NON_COMPLIANT",
            Self::MonitoringCompletedCompliant => "MONITORING_COMPLETED_COMPLIANT",
            Self::MonitoringCompletedNonCompliant => "MONITORING_COMPLETED_NON_COMPLIANT",
            Self::UnitReviewed => "UNIT_REVIEWED",
            Self::SectionReviewed => "SECTION_REVIEWED",
            Self::DivisionReviewed => "DIVISION_REVIEWED",
            Self::ForLegalReview => "FOR_LEGAL_REVIEW",
            Self::NovSent => "NOV_SENT",
            Self::NooSent => "NOO_SENT",
            Self::ClosedCompliant => "CLOSED_COMPLIANT",
            Self::ClosedNonCompliant => "CLOSED_NON_COMPLIANT",
        }
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
