//! Core data model for the legal guide.
//!
//! These types describe what the assistant works with: categories and
//! actions from the catalog, roadmap templates and payloads, remedy paths,
//! and the chat messages a conversation produces.

mod action;
mod category;
mod message;
mod remedy;
mod roadmap;

pub use action::{ActionId, ActionSummary, Difficulty, UnknownKey};
pub use category::{Category, CategoryId};
pub use message::{ChatMessage, MessageContent, MessageKind, Sender};
pub use remedy::RemedyKind;
pub use roadmap::{Estimate, RoadmapPayload, RoadmapStep, RoadmapTemplate, StepStatus};
