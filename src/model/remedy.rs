//! Remedy paths offered mid-conversation.

use serde::{Deserialize, Serialize};

/// The five remedy paths the assistant offers once it has the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemedyKind {
    LegalNotice,
    ConsumerComplaint,
    Court,
    Mediation,
    PoliceComplaint,
}

impl RemedyKind {
    /// Offer order.
    pub const ALL: [Self; 5] = [
        Self::LegalNotice,
        Self::ConsumerComplaint,
        Self::Court,
        Self::Mediation,
        Self::PoliceComplaint,
    ];

    /// The bare name a canned roadmap is registered under.
    pub fn key(self) -> &'static str {
        match self {
            Self::LegalNotice => "Send Legal Notice",
            Self::ConsumerComplaint => "Consumer Complaint",
            Self::Court => "Approach Court",
            Self::Mediation => "Seek Mediation",
            Self::PoliceComplaint => "File Police Complaint",
        }
    }

    /// The label shown on the option button.
    pub fn option_label(self) -> &'static str {
        match self {
            Self::LegalNotice => "Send Legal Notice (Formal warning)",
            Self::ConsumerComplaint => "File Consumer Complaint (Cost-effective)",
            Self::Court => "Approach Court (Formal litigation)",
            Self::Mediation => "Seek Mediation (Mutual resolution)",
            Self::PoliceComplaint => "File Police Complaint (Criminal matters)",
        }
    }

    /// Match a chosen label exactly against the bare key or the option label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == label || kind.option_label() == label)
    }
}
