//! Roadmap screen: one action's steps, with an optional advisor thread.

use std::cell::Cell;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::catalog;
use crate::conversation::AdvisorChat;
use crate::model::{ActionId, RoadmapTemplate};
use crate::render;
use crate::resolver::TipRotation;

use super::{window, wrap};

/// Rows given to the advisor thread when it is open.
const ADVISOR_HEIGHT: u16 = 10;

pub struct RoadmapScreen {
    action: ActionId,
    template: Option<&'static RoadmapTemplate>,
    lines: Vec<String>,
    /// Clamped to the wrapped length on every render.
    scroll_offset: Cell<usize>,
    advisor: AdvisorChat,
    advisor_open: bool,
    input: String,
}

impl RoadmapScreen {
    pub fn new(action: ActionId, rotation: TipRotation) -> Self {
        let template = catalog::template(action);
        Self {
            action,
            template,
            lines: template.map(render::format_template).unwrap_or_default(),
            scroll_offset: Cell::new(0),
            advisor: AdvisorChat::new(action, rotation),
            advisor_open: false,
            input: String::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.template.is_some()
    }

    /// Whether keystrokes go to the advisor input.
    pub fn is_typing(&self) -> bool {
        self.advisor_open
    }

    /// Show or hide the advisor thread. The thread survives hiding.
    pub fn toggle_advisor(&mut self) {
        if self.is_found() {
            self.advisor_open = !self.advisor_open;
        }
    }

    pub fn advisor(&self) -> &AdvisorChat {
        &self.advisor
    }

    pub fn on_char(&mut self, c: char) {
        if self.advisor_open {
            self.input.push(c);
        }
    }

    pub fn on_backspace(&mut self) {
        if self.advisor_open {
            self.input.pop();
        }
    }

    /// Send the typed question. Blank input is ignored.
    pub fn on_enter(&mut self) {
        if !self.advisor_open {
            return;
        }
        if self.advisor.ask(&self.input).is_ok() {
            self.input.clear();
        }
    }

    pub fn on_scroll_up(&mut self) {
        self.scroll_offset.set(self.scroll_offset.get().saturating_sub(1));
    }

    pub fn on_scroll_down(&mut self) {
        self.scroll_offset.set(self.scroll_offset.get().saturating_add(1));
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let advisor_height = if self.advisor_open { ADVISOR_HEIGHT } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Length(3),              // header
            Constraint::Min(0),                 // steps
            Constraint::Length(advisor_height), // advisor thread
            Constraint::Length(1),              // input or help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let name = catalog::action(self.action).map_or(self.action.as_str(), |a| a.name.as_str());
        let header = Paragraph::new(Line::from(vec![Span::styled(name, highlight)]))
            .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let content_padding = Block::default().padding(Padding::new(2, 2, 0, 0));
        let inner = content_padding.inner(chunks[1]);

        if !self.is_found() {
            let notice = Paragraph::new(vec![
                Line::from(Span::styled("Roadmap not found", normal)),
                Line::from(Span::styled(
                    "There is no step-by-step guide for this action yet.",
                    muted,
                )),
            ])
            .block(content_padding);
            frame.render_widget(notice, chunks[1]);

            let help = Paragraph::new(Line::from(vec![Span::styled(" esc back  q quit", muted)]));
            frame.render_widget(help, chunks[3]);
            return;
        }

        let wrapped = wrap(&self.lines, inner.width as usize);
        let visible_height = inner.height as usize;
        let offset = window(wrapped.len(), visible_height, self.scroll_offset.get());
        self.scroll_offset.set(offset);
        let lines: Vec<Line> = wrapped[offset..]
            .iter()
            .take(visible_height)
            .map(|s| Line::from(Span::styled(s.as_str(), normal)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(content_padding), chunks[1]);

        if self.advisor_open {
            let block = Block::default().padding(Padding::new(2, 2, 1, 0));
            let inner = block.inner(chunks[2]);
            let transcript: Vec<String> = self
                .advisor
                .messages()
                .iter()
                .flat_map(render::format_message)
                .collect();
            let wrapped = wrap(&transcript, inner.width as usize);
            let height = inner.height as usize;
            let start = wrapped.len().saturating_sub(height);
            let lines: Vec<Line> = wrapped[start..]
                .iter()
                .map(|s| Line::from(Span::styled(s.as_str(), muted)))
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), chunks[2]);

            let prompt = Paragraph::new(Line::from(vec![
                Span::styled(" ask › ", highlight),
                Span::styled(&self.input, Style::default().fg(Color::White)),
                Span::styled("█", muted),
            ]));
            frame.render_widget(prompt, chunks[3]);
        } else {
            let help = Paragraph::new(Line::from(vec![Span::styled(
                " ↑↓ scroll  c ask a question  esc back  tab assistant  q quit",
                muted,
            )]));
            frame.render_widget(help, chunks[3]);
        }
    }
}
