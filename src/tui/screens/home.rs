//! Home screen: the legal categories.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::catalog;
use crate::model::{Category, CategoryId};

pub struct HomeScreen {
    categories: &'static [Category],
    selected: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            categories: catalog::categories(),
            selected: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.categories.len() {
            self.selected += 1;
        }
    }

    pub fn select(&self) -> Option<CategoryId> {
        self.categories.get(self.selected).map(|c| c.id)
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(4), // title
            Constraint::Min(0),    // list
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let title = Paragraph::new(vec![
            Line::from(Span::styled("Legal Guide", highlight)),
            Line::from(Span::styled(
                "Pick the area your issue falls under.",
                muted,
            )),
        ])
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let list_items: Vec<ListItem> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let style = if i == self.selected {
                    highlight
                } else {
                    normal
                };
                let pointer = if i == self.selected { "› " } else { "  " };
                let count = match category.actions.len() {
                    0 => "  coming soon".to_string(),
                    n => format!("  [{n}]"),
                };

                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(category.display_name.as_str(), style),
                    Span::styled(count, muted),
                ]))
            })
            .collect();

        let list = List::new(list_items).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ navigate  ⏎ select  tab assistant  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::draw;

    #[test]
    fn selection_stays_in_bounds() {
        let mut home = HomeScreen::new();
        home.move_up();
        assert_eq!(home.select(), Some(CategoryId::ALL[0]));

        for _ in 0..20 {
            home.move_down();
        }
        assert_eq!(home.select(), Some(CategoryId::ALL[7]));
    }

    #[test]
    fn list_follows_selection_on_short_terminal() {
        let mut home = HomeScreen::default();
        for _ in 0..7 {
            home.move_down();
        }

        // Four title rows and a help row leave three for the list.
        let rows = draw(60, 8, |frame| home.render(frame));
        let employment = &catalog::category(CategoryId::Employment).unwrap().display_name;
        assert!(
            rows.iter().any(|r| r.contains(&format!("› {employment}"))),
            "{employment} not on screen: {rows:#?}"
        );
    }
}
