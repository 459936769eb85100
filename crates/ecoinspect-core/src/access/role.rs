//! Organizational roles acting on inspection records.

use serde::{Deserialize, Serialize};

use super::error::AccessError;

/// An organizational actor type with fixed capabilities per workflow stage.
///
/// A role's capability at a stage is independent of the specific status
/// within that stage unless an explicit override exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Read-only auditor; can view every stage, never edit.
    Admin,
    /// Creates records, assigns work, reviews, and closes.
    DivisionChief,
    /// Mid-level assignee and reviewer.
    SectionChief,
    /// Unit-level assignee and reviewer.
    UnitHead,
    /// Field inspector; edits its own assignments, never reviews or closes.
    MonitoringPersonnel,
    /// Handles violations and orders; enters only at review and later stages.
    LegalUnit,
}

impl Role {
    /// All roles.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::DivisionChief,
        Self::SectionChief,
        Self::UnitHead,
        Self::MonitoringPersonnel,
        Self::LegalUnit,
    ];

    /// Parses a role from its catalog string.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownRole`] if the string is not a
    /// recognized role.
    pub fn parse(s: &str) -> Result<Self, AccessError> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "DIVISION_CHIEF" => Ok(Self::DivisionChief),
            "SECTION_CHIEF" => Ok(Self::SectionChief),
            "UNIT_HEAD" => Ok(Self::UnitHead),
            "MONITORING_PERSONNEL" => Ok(Self::MonitoringPersonnel),
            "LEGAL_UNIT" => Ok(Self::LegalUnit),
            _ => Err(AccessError::UnknownRole {
                value: s.to_string(),
            }),
        }
    }

    /// Returns the catalog string for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::DivisionChief => "DIVISION_CHIEF",
            Self::SectionChief => "SECTION_CHIEF",
            Self::UnitHead => "UNIT_HEAD",
            Self::MonitoringPersonnel => "MONITORING_PERSONNEL",
            Self::LegalUnit => "LEGAL_UNIT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
