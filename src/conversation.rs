//! Conversations: the append-only message logs a front end renders.
//!
//! A [`Conversation`] runs the intake flow. An [`AdvisorChat`] is the
//! lighter thread attached to a roadmap page, where every question goes
//! straight to the follow-up responder. Both guard the input boundary:
//! blank submissions are refused before any state changes.
//!
//! Dropping a conversation discards it; nothing is persisted.

use tracing::{debug, info};
use uuid::Uuid;

use crate::intake::{self, IntakeState, IssueContext};
use crate::model::{ActionId, ChatMessage};
use crate::render::RenderSink;
use crate::resolver::{self, FollowUp, Resolver, TipRotation};

/// Greeting that opens a roadmap's advisor thread.
pub const ADVISOR_GREETING: &str =
    "Hi! I can help you adapt this roadmap based on your specific situation. What questions do you have?";

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("message is empty")]
    Empty,
}

/// Trim a submission and refuse it if nothing is left.
fn accept(input: &str) -> Result<&str, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(trimmed)
    }
}

/// One intake conversation with the assistant.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    context: IssueContext,
    resolver: Resolver,
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation seeded with the opening options message.
    ///
    /// `focus` names the action whose tips answer questions after the
    /// roadmap is shown.
    pub fn new(focus: Option<ActionId>, rotation: TipRotation) -> Self {
        let id = Uuid::new_v4();
        info!(conversation = %id, focus = ?focus, "Conversation started");
        Self {
            id,
            context: IssueContext::default(),
            resolver: Resolver::new(FollowUp::new(focus, rotation)),
            messages: vec![resolver::opening_message()],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The current stage, derived from the context so the two never disagree.
    pub fn state(&self) -> IntakeState {
        self.context.state()
    }

    pub fn context(&self) -> &IssueContext {
        &self.context
    }

    pub fn focus(&self) -> Option<ActionId> {
        self.resolver.follow_up().focus()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message, which is always the assistant's.
    pub fn last(&self) -> &ChatMessage {
        // The log is seeded on construction and only ever grows.
        &self.messages[self.messages.len() - 1]
    }

    /// Submit one user message.
    ///
    /// Appends the user's message and the assistant's reply, advances the
    /// intake flow, and returns the two new entries.
    pub fn submit(&mut self, input: &str) -> Result<&[ChatMessage], InputError> {
        let text = accept(input)?;
        let state = self.state();

        let reply = self.resolver.resolve(text, state, &self.context);
        let (next, context) = intake::advance(state, std::mem::take(&mut self.context), text);
        self.context = context;

        debug!(
            conversation = %self.id,
            from = ?state,
            to = ?next,
            kind = ?reply.kind(),
            "Turn resolved"
        );

        let start = self.messages.len();
        self.messages.push(ChatMessage::user(text));
        self.messages.push(reply);
        Ok(&self.messages[start..])
    }

    /// Send the whole log to a sink, oldest first.
    pub fn replay(&self, sink: &mut impl RenderSink) {
        for message in &self.messages {
            sink.render(message);
        }
    }
}

/// The question thread attached to one action's roadmap.
#[derive(Debug, Clone)]
pub struct AdvisorChat {
    follow_up: FollowUp,
    messages: Vec<ChatMessage>,
}

impl AdvisorChat {
    pub fn new(action: ActionId, rotation: TipRotation) -> Self {
        Self {
            follow_up: FollowUp::new(Some(action), rotation),
            messages: vec![ChatMessage::text(ADVISOR_GREETING)],
        }
    }

    pub fn action(&self) -> Option<ActionId> {
        self.follow_up.focus()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Ask one question; returns the user's message and the reply.
    pub fn ask(&mut self, input: &str) -> Result<&[ChatMessage], InputError> {
        let text = accept(input)?;
        let reply = ChatMessage::text(self.follow_up.reply());

        let start = self.messages.len();
        self.messages.push(ChatMessage::user(text));
        self.messages.push(reply);
        Ok(&self.messages[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog;
    use crate::model::{MessageKind, Sender};
    use crate::resolver::{ASSISTANT_FALLBACK, remedy_roadmap};

    fn conversation() -> Conversation {
        Conversation::new(None, TipRotation::RoundRobin)
    }

    #[test]
    fn starts_with_single_options_message() {
        let c = conversation();
        assert_eq!(c.messages().len(), 1);
        assert_eq!(c.messages()[0].kind(), MessageKind::Options);
        assert_eq!(c.state(), IntakeState::Initial);
    }

    #[test]
    fn blank_input_is_refused_without_changes() {
        let mut c = conversation();
        assert_eq!(c.submit("").unwrap_err(), InputError::Empty);
        assert_eq!(c.submit("   \t\n").unwrap_err(), InputError::Empty);
        assert_eq!(c.messages().len(), 1);
        assert_eq!(c.state(), IntakeState::Initial);
    }

    #[test]
    fn submissions_are_trimmed() {
        let mut c = conversation();
        c.submit("  Property Dispute  ").unwrap();
        assert_eq!(c.context().issue_type.as_deref(), Some("Property Dispute"));
        assert_eq!(c.messages()[1].body, "Property Dispute");
    }

    #[test]
    fn log_grows_by_two_per_turn_and_never_changes() {
        let mut c = conversation();
        let mut snapshot: Vec<ChatMessage> = c.messages().to_vec();
        for (n, input) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
            c.submit(input).unwrap();
            assert_eq!(c.messages().len(), 1 + 2 * (n + 1));
            assert_eq!(&c.messages()[..snapshot.len()], snapshot.as_slice());
            snapshot = c.messages().to_vec();
        }
    }

    #[test]
    fn submit_returns_user_message_and_reply() {
        let mut c = conversation();
        let new = c.submit("Employment Issue").unwrap();
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].sender, Sender::User);
        assert_eq!(new[1].sender, Sender::System);
    }

    #[test]
    fn four_messages_reach_roadmap_with_context_filled() {
        let mut c = conversation();
        for m in ["one", "two", "three", "four"] {
            c.submit(m).unwrap();
        }
        assert_eq!(c.state(), IntakeState::Roadmap);
        assert_eq!(c.context().issue_type.as_deref(), Some("one"));
        assert_eq!(c.context().details.as_deref(), Some("two"));
        assert_eq!(c.context().preferred_option.as_deref(), Some("three"));
    }

    #[test]
    fn employment_round_trip() {
        let mut c = conversation();

        let reply = c.submit("Employment Issue").unwrap()[1].clone();
        assert_eq!(c.state(), IntakeState::Details);
        assert_eq!(reply.kind(), MessageKind::Text);
        assert!(reply.body.contains("employment issue"));

        let reply = c.submit("I was fired without notice").unwrap()[1].clone();
        assert_eq!(c.state(), IntakeState::Options);
        assert_eq!(reply.choices().unwrap().len(), 5);

        let reply = c.submit("Approach Court").unwrap()[1].clone();
        assert_eq!(c.state(), IntakeState::Roadmap);
        let roadmap = reply.roadmap_payload().unwrap();
        assert_eq!(roadmap, &remedy_roadmap("Send Legal Notice"));
        assert_eq!(roadmap.steps.len(), 4);
        assert_eq!(roadmap.estimate.total_time, "1-2 months");
        assert_eq!(roadmap.estimate.total_cost, "₹1,000-5,000");
        assert_eq!(roadmap.estimate.success_rate, "70-80%");
    }

    #[test]
    fn after_roadmap_file_fir_focus_answers_with_its_tips() {
        let tips = catalog::tips_for(ActionId::FileFir).unwrap();
        for rotation in [TipRotation::RoundRobin, TipRotation::Random] {
            let mut c = Conversation::new(Some(ActionId::FileFir), rotation);
            for m in ["Criminal Matter", "My phone was stolen", "File Police Complaint"] {
                c.submit(m).unwrap();
            }
            let before = c.context().clone();
            for _ in 0..5 {
                let reply = &c.submit("What if they refuse?").unwrap()[1];
                assert!(tips.iter().any(|t| *t == reply.body));
                assert_ne!(reply.body, ASSISTANT_FALLBACK);
            }
            assert_eq!(c.state(), IntakeState::Roadmap);
            assert_eq!(c.context(), &before);
        }
    }

    #[test]
    fn last_is_latest_reply() {
        let mut c = conversation();
        c.submit("Other").unwrap();
        assert_eq!(c.last().sender, Sender::System);
        assert_eq!(c.last().kind(), MessageKind::Text);
    }

    #[test]
    fn replay_sends_every_message_in_order() {
        let mut c = conversation();
        c.submit("Other").unwrap();
        let mut seen: Vec<ChatMessage> = Vec::new();
        c.replay(&mut seen);
        assert_eq!(seen, c.messages());
    }

    #[test]
    fn advisor_answers_from_action_tips() {
        let tips = catalog::tips_for(ActionId::PfGratuity).unwrap();
        let mut chat = AdvisorChat::new(ActionId::PfGratuity, TipRotation::RoundRobin);
        assert_eq!(chat.messages()[0].body, ADVISOR_GREETING);

        let new = chat.ask("Can I withdraw early?").unwrap();
        assert_eq!(new[0].body, "Can I withdraw early?");
        assert_eq!(new[1].body, tips[0]);
        assert_eq!(chat.messages().len(), 3);
        assert!(chat.ask(" ").is_err());
        assert_eq!(chat.messages().len(), 3);
    }
}
