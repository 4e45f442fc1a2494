//! Action types: discrete legal tasks a user can follow a roadmap for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string that names no known key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key: {0}")]
pub struct UnknownKey(pub String);

/// Every action the catalog knows about.
///
/// Identifiers are kebab-case on the wire (`register-company`, `file-fir`).
/// Knowing an action does not imply a roadmap template exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    // Business.
    RegisterCompany,
    AnnualReturns,
    Trademark,
    GstRegistration,
    PartnershipDeed,
    BusinessLicense,

    // Property.
    PropertyRegistration,
    RentAgreement,
    PropertyDispute,
    Mutation,
    Encumbrance,

    // Criminal.
    FileFir,
    BailApplication,
    Chargesheet,
    PoliceComplaint,

    // Family.
    Divorce,
    ChildCustody,
    Maintenance,
    Adoption,

    // Employment.
    WrongfulTermination,
    WageDispute,
    WorkplaceHarassment,
    EmploymentContract,
    LaborComplaint,
    WorkplaceDiscrimination,
    PfGratuity,
    MaternityLeave,
    WorkplaceSafety,
    BonusDisputes,
    WorkHours,
    Retrenchment,
}

impl ActionId {
    pub const ALL: [Self; 31] = [
        Self::RegisterCompany,
        Self::AnnualReturns,
        Self::Trademark,
        Self::GstRegistration,
        Self::PartnershipDeed,
        Self::BusinessLicense,
        Self::PropertyRegistration,
        Self::RentAgreement,
        Self::PropertyDispute,
        Self::Mutation,
        Self::Encumbrance,
        Self::FileFir,
        Self::BailApplication,
        Self::Chargesheet,
        Self::PoliceComplaint,
        Self::Divorce,
        Self::ChildCustody,
        Self::Maintenance,
        Self::Adoption,
        Self::WrongfulTermination,
        Self::WageDispute,
        Self::WorkplaceHarassment,
        Self::EmploymentContract,
        Self::LaborComplaint,
        Self::WorkplaceDiscrimination,
        Self::PfGratuity,
        Self::MaternityLeave,
        Self::WorkplaceSafety,
        Self::BonusDisputes,
        Self::WorkHours,
        Self::Retrenchment,
    ];

    /// The kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegisterCompany => "register-company",
            Self::AnnualReturns => "annual-returns",
            Self::Trademark => "trademark",
            Self::GstRegistration => "gst-registration",
            Self::PartnershipDeed => "partnership-deed",
            Self::BusinessLicense => "business-license",
            Self::PropertyRegistration => "property-registration",
            Self::RentAgreement => "rent-agreement",
            Self::PropertyDispute => "property-dispute",
            Self::Mutation => "mutation",
            Self::Encumbrance => "encumbrance",
            Self::FileFir => "file-fir",
            Self::BailApplication => "bail-application",
            Self::Chargesheet => "chargesheet",
            Self::PoliceComplaint => "police-complaint",
            Self::Divorce => "divorce",
            Self::ChildCustody => "child-custody",
            Self::Maintenance => "maintenance",
            Self::Adoption => "adoption",
            Self::WrongfulTermination => "wrongful-termination",
            Self::WageDispute => "wage-dispute",
            Self::WorkplaceHarassment => "workplace-harassment",
            Self::EmploymentContract => "employment-contract",
            Self::LaborComplaint => "labor-complaint",
            Self::WorkplaceDiscrimination => "workplace-discrimination",
            Self::PfGratuity => "pf-gratuity",
            Self::MaternityLeave => "maternity-leave",
            Self::WorkplaceSafety => "workplace-safety",
            Self::BonusDisputes => "bonus-disputes",
            Self::WorkHours => "work-hours",
            Self::Retrenchment => "retrenchment",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// How demanding an action is for a lay user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Complex,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Complex => "Complex",
        }
    }
}

/// One row of a category's action list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummary {
    pub id: ActionId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
}
