//! The environmental law catalog and the permits each law requires.

use serde::{Deserialize, Serialize};

/// An environmental statute an inspection can cover.
///
/// Which laws are selected on the form decides which sub-forms, permits,
/// and finding systems are applicable during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentalLaw {
    /// PD-1586: Environmental Impact Statement system.
    #[serde(rename = "PD-1586")]
    Pd1586,
    /// RA-6969: Toxic Substances and Hazardous Waste Control Act.
    #[serde(rename = "RA-6969")]
    Ra6969,
    /// RA-8749: Clean Air Act.
    #[serde(rename = "RA-8749")]
    Ra8749,
    /// RA-9275: Clean Water Act.
    #[serde(rename = "RA-9275")]
    Ra9275,
    /// RA-9003: Ecological Solid Waste Management Act.
    #[serde(rename = "RA-9003")]
    Ra9003,
}

impl EnvironmentalLaw {
    /// All laws in the catalog.
    pub const ALL: [Self; 5] = [
        Self::Pd1586,
        Self::Ra6969,
        Self::Ra8749,
        Self::Ra9275,
        Self::Ra9003,
    ];

    /// Returns the statute code for this law.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pd1586 => "PD-1586",
            Self::Ra6969 => "RA-6969",
            Self::Ra8749 => "RA-8749",
            Self::Ra9275 => "RA-9275",
            Self::Ra9003 => "RA-9003",
        }
    }

    /// The permit kinds an establishment needs under this law.
    ///
    /// RA-9003 carries no permit; its compliance is tracked through the
    /// checklist items alone.
    #[must_use]
    pub const fn permit_kinds(&self) -> &'static [PermitKind] {
        match self {
            Self::Pd1586 => &[PermitKind::Ecc],
            Self::Ra6969 => &[PermitKind::DenrRegistryId, PermitKind::PclCertificate],
            Self::Ra8749 => &[PermitKind::PermitToOperateAir],
            Self::Ra9275 => &[PermitKind::DischargePermit],
            Self::Ra9003 => &[],
        }
    }
}

impl std::fmt::Display for EnvironmentalLaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A kind of permit or registration an establishment can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermitKind {
    /// Environmental Compliance Certificate (PD-1586).
    Ecc,
    /// DENR hazardous-waste generator registry ID (RA-6969).
    DenrRegistryId,
    /// Priority Chemical List compliance certificate (RA-6969).
    PclCertificate,
    /// Permit to Operate air pollution source installations (RA-8749).
    PermitToOperateAir,
    /// Wastewater discharge permit (RA-9275).
    DischargePermit,
}

impl PermitKind {
    /// Returns the string representation of this permit kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ecc => "ECC",
            Self::DenrRegistryId => "DENR_REGISTRY_ID",
            Self::PclCertificate => "PCL_CERTIFICATE",
            Self::PermitToOperateAir => "PERMIT_TO_OPERATE_AIR",
            Self::DischargePermit => "DISCHARGE_PERMIT",
        }
    }
}
