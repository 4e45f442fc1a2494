//! Render sinks and plain-text formatting for chat messages and roadmaps.
//!
//! The engine only ever hands finished [`ChatMessage`]s outward. A sink
//! decides how to show them; the formatters here produce the line layout
//! shared by the CLI and the TUI.

use std::io::{self, Write};

use crate::model::{
    ChatMessage, MessageContent, RoadmapPayload, RoadmapStep, RoadmapTemplate, Sender,
};

/// Closes every action roadmap.
pub const DISCLAIMER: &str = "Legal disclaimer: this roadmap provides general guidance only. Laws \
     and procedures may vary by jurisdiction. Always consult a qualified legal professional for \
     advice specific to your situation.";

/// Receives messages in conversation order.
pub trait RenderSink {
    fn render(&mut self, message: &ChatMessage);
}

/// Collects messages as-is.
impl RenderSink for Vec<ChatMessage> {
    fn render(&mut self, message: &ChatMessage) {
        self.push(message.clone());
    }
}

/// Writes formatted lines to any writer.
///
/// Write failures are kept and reported by [`TextSink::finish`], since
/// [`RenderSink::render`] cannot fail.
pub struct TextSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn render(&mut self, message: &ChatMessage) {
        if self.error.is_some() {
            return;
        }
        for line in format_message(message) {
            if let Err(e) = writeln!(self.out, "{line}") {
                self.error = Some(e);
                return;
            }
        }
        if let Err(e) = writeln!(self.out) {
            self.error = Some(e);
        }
    }
}

/// Lines for one chat message.
pub fn format_message(message: &ChatMessage) -> Vec<String> {
    let who = match message.sender {
        Sender::User => "you",
        Sender::System => "assistant",
    };

    let mut lines: Vec<String> = Vec::new();
    let mut body = message.body.lines();
    if let Some(first) = body.next() {
        lines.push(format!("{who} › {first}"));
    } else {
        lines.push(format!("{who} ›"));
    }
    let indent = " ".repeat(who.len() + 3);
    for line in body {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{indent}{line}"));
        }
    }

    match &message.content {
        MessageContent::Text => {}
        MessageContent::Options { options } => {
            for (i, option) in options.iter().enumerate() {
                lines.push(format!("  [{}] {option}", i + 1));
            }
        }
        MessageContent::Roadmap { roadmap } => {
            lines.push(String::new());
            lines.extend(format_payload(roadmap));
        }
    }

    lines
}

/// Lines for a chat roadmap: title, estimate badges, then the steps.
pub fn format_payload(payload: &RoadmapPayload) -> Vec<String> {
    let mut lines = vec![
        payload.title.clone(),
        format!(
            "  time {}  ·  cost {}  ·  success {}",
            payload.estimate.total_time, payload.estimate.total_cost, payload.estimate.success_rate
        ),
    ];
    for step in &payload.steps {
        lines.push(String::new());
        format_step(&mut lines, step, false);
    }
    lines
}

/// Lines for an action roadmap, with step statuses and the disclaimer.
pub fn format_template(template: &RoadmapTemplate) -> Vec<String> {
    let mut lines = vec![template.title.clone()];
    for step in &template.steps {
        lines.push(String::new());
        format_step(&mut lines, step, true);
    }
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines
}

fn format_step(lines: &mut Vec<String>, step: &RoadmapStep, with_status: bool) {
    if with_status {
        lines.push(format!(
            "{}. {}  [{}]",
            step.ordinal,
            step.title,
            step.status.label()
        ));
    } else {
        lines.push(format!("{}. {}", step.ordinal, step.title));
    }
    lines.push(format!("   {}", step.description));
    lines.push(format!("   fee: {}  ·  time: {}", step.fee, step.timeframe));
    if !step.required_documents.is_empty() {
        lines.push(format!(
            "   documents: {}",
            step.required_documents.join(", ")
        ));
    }
    if let Some(link) = &step.official_link {
        lines.push(format!("   portal: {link}"));
    }
}
