//! Category types: top-level legal domains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::{ActionSummary, UnknownKey};

/// The legal domains shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Business,
    Property,
    Criminal,
    Family,
    Motor,
    Contracts,
    Consumer,
    Employment,
}

impl CategoryId {
    /// Home screen order.
    pub const ALL: [Self; 8] = [
        Self::Business,
        Self::Property,
        Self::Criminal,
        Self::Family,
        Self::Motor,
        Self::Contracts,
        Self::Consumer,
        Self::Employment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Property => "property",
            Self::Criminal => "criminal",
            Self::Family => "family",
            Self::Motor => "motor",
            Self::Contracts => "contracts",
            Self::Consumer => "consumer",
            Self::Employment => "employment",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// A legal domain and the actions filed under it.
///
/// A category with no actions is listed on the home screen but has
/// nothing to drill into yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    /// Heading shown on the category's own page.
    pub display_name: String,

    /// Shorter label used on the home screen.
    pub short_name: String,

    #[serde(default)]
    pub actions: Vec<ActionSummary>,
}
