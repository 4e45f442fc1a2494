//! Assistant screen: the intake conversation.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::conversation::Conversation;
use crate::model::Sender;
use crate::render;
use crate::resolver::TipRotation;

use super::wrap;

pub struct AssistantScreen {
    conversation: Conversation,
    input: String,
    /// Highlighted option of the last message, when it offers any.
    selected: usize,
}

impl AssistantScreen {
    pub fn new(rotation: TipRotation) -> Self {
        Self {
            conversation: Conversation::new(None, rotation),
            input: String::new(),
            selected: 0,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    fn option_count(&self) -> usize {
        self.conversation.last().choices().map_or(0, <[_]>::len)
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.option_count() {
            self.selected += 1;
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the typed text, or the highlighted option when nothing is
    /// typed. Blank input with no options on offer does nothing.
    pub fn on_enter(&mut self) {
        let text = if self.input.trim().is_empty() {
            match self
                .conversation
                .last()
                .choices()
                .and_then(|c| c.get(self.selected))
            {
                Some(option) => option.clone(),
                None => return,
            }
        } else {
            self.input.clone()
        };

        if self.conversation.submit(&text).is_ok() {
            self.input.clear();
            self.selected = 0;
        }
    }

    /// Transcript lines with their styles, newest last.
    fn transcript(&self, width: usize) -> Vec<(String, Style)> {
        let user = Style::default().fg(Color::White);
        let system = Style::default().fg(Color::Gray);
        let option = Style::default().fg(Color::DarkGray);
        let picked = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let messages = self.conversation.messages();
        let mut out = Vec::new();
        for (i, message) in messages.iter().enumerate() {
            let mut lines = render::format_message(message);
            let style = match message.sender {
                Sender::User => user,
                Sender::System => system,
            };

            // Options come last in a message's lines; only the newest
            // message's options are pickable.
            let options = message.choices().map_or(0, <[_]>::len);
            let pickable = i + 1 == messages.len();
            let first_option = lines.len() - options;

            for (j, line) in lines.drain(..).enumerate() {
                let style = if j < first_option {
                    style
                } else if pickable && j - first_option == self.selected {
                    picked
                } else {
                    option
                };
                let line = if pickable && j >= first_option && j - first_option == self.selected {
                    line.replacen("  ", "› ", 1)
                } else {
                    line
                };
                for wrapped in wrap(&[line], width) {
                    out.push((wrapped, style));
                }
            }
            out.push((String::new(), system));
        }
        out
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Min(0),    // transcript
            Constraint::Length(1), // input
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Legal Assistant", highlight),
            Span::styled("  general guidance, not legal advice", muted),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let content_padding = Block::default().padding(Padding::new(2, 2, 0, 0));
        let inner = content_padding.inner(chunks[1]);

        // Keep the newest lines in view.
        let transcript = self.transcript(inner.width as usize);
        let start = transcript.len().saturating_sub(inner.height as usize);
        let lines: Vec<Line> = transcript[start..]
            .iter()
            .map(|(s, style)| Line::from(Span::styled(s.as_str(), *style)))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(content_padding), chunks[1]);

        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(" › ", highlight),
            Span::styled(&self.input, Style::default().fg(Color::White)),
            Span::styled("█", muted),
        ]));
        frame.render_widget(prompt, chunks[2]);

        let help = if self.option_count() > 0 {
            " ↑↓ pick option  ⏎ send  esc back  tab roadmaps"
        } else {
            " ⏎ send  esc back  tab roadmaps"
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(help, muted)])),
            chunks[3],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::intake::{ISSUE_CATEGORIES, IntakeState};
    use crate::model::MessageKind;

    fn type_str(screen: &mut AssistantScreen, s: &str) {
        for c in s.chars() {
            screen.on_char(c);
        }
    }

    #[test]
    fn enter_on_empty_input_picks_highlighted_option() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        screen.move_down();
        screen.move_down();
        screen.on_enter();

        let c = screen.conversation();
        assert_eq!(c.state(), IntakeState::Details);
        assert_eq!(c.context().issue_type.as_deref(), Some(ISSUE_CATEGORIES[2]));
    }

    #[test]
    fn typed_text_wins_over_selection() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        screen.move_down();
        type_str(&mut screen, "Neighbour dispute");
        screen.on_enter();
        assert_eq!(
            screen.conversation().context().issue_type.as_deref(),
            Some("Neighbour dispute")
        );
    }

    #[test]
    fn blank_enter_without_options_does_nothing() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        screen.on_enter();
        assert_eq!(screen.conversation().messages().len(), 3);

        // Details prompt offers no options.
        type_str(&mut screen, "  ");
        screen.on_enter();
        assert_eq!(screen.conversation().messages().len(), 3);
    }

    #[test]
    fn selection_is_bounded_and_reset_after_submit() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        for _ in 0..20 {
            screen.move_down();
        }
        assert_eq!(screen.selected, ISSUE_CATEGORIES.len() - 1);

        screen.on_enter();
        assert_eq!(screen.selected, 0);
        screen.move_down();
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn full_flow_through_picker_reaches_roadmap() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        screen.on_enter();
        type_str(&mut screen, "Landlord kept my deposit");
        screen.on_enter();
        screen.on_enter();

        let c = screen.conversation();
        assert_eq!(c.state(), IntakeState::Roadmap);
        assert_eq!(c.last().kind(), MessageKind::Roadmap);
    }

    #[test]
    fn transcript_marks_only_the_highlighted_option() {
        let mut screen = AssistantScreen::new(TipRotation::RoundRobin);
        screen.move_down();
        let lines = screen.transcript(200);
        let marked: Vec<&str> = lines
            .iter()
            .map(|(s, _)| s.as_str())
            .filter(|s| s.starts_with("› "))
            .collect();
        assert_eq!(marked, [format!("› [2] {}", ISSUE_CATEGORIES[1])]);
    }
}
