//! Response selection for the assistant.
//!
//! [`Resolver::resolve`] picks the reply for one user message given the
//! intake stage that message arrived in. Before the roadmap it works from
//! canned prompts and the remedy table; after the roadmap it hands off to
//! the [`FollowUp`] micro-responder, which rotates through the tips
//! registered for the conversation's focus action.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog;
use crate::intake::{ISSUE_CATEGORIES, IntakeState, IssueContext};
use crate::model::{ActionId, ChatMessage, Estimate, RemedyKind, RoadmapPayload};

pub const GREETING: &str = "Hello! I'm your AI Legal Assistant. I'll help you understand your \
    legal options and create a customized roadmap. What legal issue are you facing today?";

pub const REMEDY_PROMPT: &str = "Based on your situation, here are your main legal options. \
    Each has different pros, cons, and requirements:";

/// Follow-up reply when the conversation has no focus action.
pub const ASSISTANT_FALLBACK: &str = "I can help you with legal guidance, document templates, \
    or explain your rights. What would you like to know?";

/// Follow-up reply when the focus action has no registered tips.
pub const ROADMAP_FALLBACK: &str = "I can help you adapt this roadmap based on your specific \
    situation. Could you provide more details about your concern?";

/// Remedy whose roadmap stands in for any label without one.
pub const FALLBACK_REMEDY: RemedyKind = RemedyKind::LegalNotice;

/// The opening message of every intake conversation.
pub fn opening_message() -> ChatMessage {
    ChatMessage::options(GREETING, ISSUE_CATEGORIES)
}

/// The aggregate figures shown with every chat roadmap.
pub fn fixed_estimate() -> Estimate {
    Estimate {
        total_time: "1-2 months".to_string(),
        total_cost: "₹1,000-5,000".to_string(),
        success_rate: "70-80%".to_string(),
    }
}

/// Build the roadmap for a chosen remedy label.
///
/// Labels that name no remedy, and remedies without a canned roadmap,
/// get the legal notice roadmap.
pub fn remedy_roadmap(label: &str) -> RoadmapPayload {
    let matched = RemedyKind::from_label(label).and_then(|kind| {
        catalog::remedy_template(kind).map(|template| (kind, template))
    });

    let template = match matched {
        Some((kind, template)) => {
            debug!(?kind, "Remedy roadmap resolved");
            template
        }
        None => {
            info!(label, "No canned roadmap for remedy, using legal notice");
            catalog::remedy_template(FALLBACK_REMEDY)
                .expect("legal notice remedy roadmap is embedded")
        }
    };

    RoadmapPayload::from_template(template, fixed_estimate())
}

/// How follow-up tips are picked when an action has several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipRotation {
    /// Cycle through tips in order, one per reply.
    #[default]
    RoundRobin,

    /// Pick uniformly at random each time; repeats are possible.
    Random,
}

/// Answers open-ended questions once a roadmap is on screen.
#[derive(Debug, Clone)]
pub struct FollowUp {
    focus: Option<ActionId>,
    rotation: TipRotation,
    cursor: usize,
}

impl FollowUp {
    pub fn new(focus: Option<ActionId>, rotation: TipRotation) -> Self {
        Self {
            focus,
            rotation,
            cursor: 0,
        }
    }

    /// The action whose tips this responder draws from.
    pub fn focus(&self) -> Option<ActionId> {
        self.focus
    }

    /// The next tip for the focus action, or a fallback prompt.
    pub fn reply(&mut self) -> &'static str {
        let Some(focus) = self.focus else {
            return ASSISTANT_FALLBACK;
        };
        let tips = match catalog::tips_for(focus) {
            Some(tips) if !tips.is_empty() => tips,
            _ => {
                debug!(action = %focus, "No tips registered");
                return ROADMAP_FALLBACK;
            }
        };

        match self.rotation {
            TipRotation::RoundRobin => {
                let tip = tips[self.cursor % tips.len()].as_str();
                self.cursor = self.cursor.wrapping_add(1);
                tip
            }
            TipRotation::Random => tips
                .choose(&mut rand::thread_rng())
                .map_or(ROADMAP_FALLBACK, String::as_str),
        }
    }
}

/// Selects the assistant's reply for each user message.
#[derive(Debug, Clone)]
pub struct Resolver {
    follow_up: FollowUp,
}

impl Resolver {
    pub fn new(follow_up: FollowUp) -> Self {
        Self { follow_up }
    }

    pub fn follow_up(&self) -> &FollowUp {
        &self.follow_up
    }

    /// Reply to `message`, which arrived while the flow was in `state`.
    ///
    /// `message` is assumed non-empty.
    pub fn resolve(
        &mut self,
        message: &str,
        state: IntakeState,
        context: &IssueContext,
    ) -> ChatMessage {
        match state {
            IntakeState::Initial => ChatMessage::text(details_prompt(message)),

            // The remedy list does not depend on the issue type.
            IntakeState::Details => ChatMessage::options(
                REMEDY_PROMPT,
                RemedyKind::ALL.map(RemedyKind::option_label),
            ),

            IntakeState::Options => {
                debug!(
                    issue = context.issue_type.as_deref().unwrap_or_default(),
                    remedy = message,
                    "Resolving roadmap"
                );
                ChatMessage::roadmap(
                    format!("Perfect! Here's your custom roadmap for \"{message}\":"),
                    remedy_roadmap(message),
                )
            }

            IntakeState::Roadmap => ChatMessage::text(self.follow_up.reply()),
        }
    }
}

fn details_prompt(issue: &str) -> String {
    format!(
        "I understand you're dealing with a {}. Could you provide more specific details about \
         your situation? For example:\n\n\
         • What exactly happened?\n\
         • When did it occur?\n\
         • Who are the parties involved?\n\
         • What outcome are you seeking?",
        issue.to_lowercase()
    )
}
