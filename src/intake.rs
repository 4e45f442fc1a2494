//! The intake flow: four positional stages that turn user messages into an
//! issue context.
//!
//! ```text
//! Initial ──issue type──▶ Details ──details──▶ Options ──remedy──▶ Roadmap
//! ```
//!
//! Each transition records exactly one context field and moves one stage on.
//! Message content is never inspected; the input boundary has already
//! rejected empty text. `Roadmap` is terminal: later messages leave both the
//! stage and the context untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Issue categories offered by the opening message.
pub const ISSUE_CATEGORIES: [&str; 7] = [
    "Business/Commercial Issue",
    "Property Dispute",
    "Consumer Complaint",
    "Employment Issue",
    "Criminal Matter",
    "Family Law Issue",
    "Other",
];

/// Where the intake flow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeState {
    /// Waiting for the issue type.
    Initial,

    /// Waiting for a description of what happened.
    Details,

    /// Waiting for a remedy choice.
    Options,

    /// A roadmap has been shown.
    Roadmap,
}

impl IntakeState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Roadmap)
    }
}

/// What the user has told the assistant so far.
///
/// Fields fill in order and are never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueContext {
    pub issue_type: Option<String>,
    pub details: Option<String>,
    pub preferred_option: Option<String>,
}

impl IssueContext {
    /// The stage implied by which fields are filled.
    pub fn state(&self) -> IntakeState {
        match (&self.issue_type, &self.details, &self.preferred_option) {
            (None, _, _) => IntakeState::Initial,
            (Some(_), None, _) => IntakeState::Details,
            (Some(_), Some(_), None) => IntakeState::Options,
            (Some(_), Some(_), Some(_)) => IntakeState::Roadmap,
        }
    }
}

/// Record `message` in the field owned by `state` and move one stage on.
///
/// `state` must be `context.state()`; the pair is kept in lockstep by
/// [`Conversation`](crate::conversation::Conversation).
pub fn advance(
    state: IntakeState,
    mut context: IssueContext,
    message: &str,
) -> (IntakeState, IssueContext) {
    debug_assert_eq!(state, context.state(), "intake state out of step with context");

    let next = match state {
        IntakeState::Initial => {
            context.issue_type = Some(message.to_string());
            IntakeState::Details
        }
        IntakeState::Details => {
            context.details = Some(message.to_string());
            IntakeState::Options
        }
        IntakeState::Options => {
            context.preferred_option = Some(message.to_string());
            IntakeState::Roadmap
        }
        IntakeState::Roadmap => IntakeState::Roadmap,
    };

    if next != state {
        debug!(from = ?state, to = ?next, "Intake advanced");
    }
    (next, context)
}
