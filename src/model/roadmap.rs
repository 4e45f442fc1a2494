//! Roadmap types: ordered step plans and the payload a chat reply carries.

use serde::{Deserialize, Serialize};

/// Illustrative progress marker shown on a step.
///
/// Templates are read-only, so this never reflects real user progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl StepStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

/// One step of a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    /// 1-based position within the roadmap.
    pub ordinal: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_documents: Vec<String>,
    pub fee: String,
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_link: Option<String>,
    #[serde(default)]
    pub status: StepStatus,
}

/// An immutable, ordered plan for completing one action or remedy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapTemplate {
    pub title: String,
    pub steps: Vec<RoadmapStep>,
}

/// Aggregate figures shown above a chat roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub total_time: String,
    pub total_cost: String,
    pub success_rate: String,
}

/// A roadmap materialized for one chat reply.
///
/// Built once when the assistant resolves a remedy and owned by the
/// message that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPayload {
    pub title: String,
    pub steps: Vec<RoadmapStep>,
    pub estimate: Estimate,
}

impl RoadmapPayload {
    pub fn from_template(template: &RoadmapTemplate, estimate: Estimate) -> Self {
        Self {
            title: template.title.clone(),
            steps: template.steps.clone(),
            estimate,
        }
    }
}
