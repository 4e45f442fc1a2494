//! Category screen: the actions available in one category.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::catalog;
use crate::model::{ActionId, ActionSummary, CategoryId};

pub struct CategoryScreen {
    id: CategoryId,
    /// `None` when the category has no actions to offer.
    actions: Option<&'static [ActionSummary]>,
    selected: usize,
}

impl CategoryScreen {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            actions: catalog::actions_for(id.as_str()).ok(),
            selected: 0,
        }
    }

    pub fn is_found(&self) -> bool {
        self.actions.is_some()
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.actions.map_or(0, <[_]>::len);
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select(&self) -> Option<ActionId> {
        self.actions?.get(self.selected).map(|a| a.id)
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Min(0),    // list
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let name = catalog::category(self.id).map_or(self.id.as_str(), |c| c.display_name.as_str());
        let header = Paragraph::new(Line::from(vec![Span::styled(name, highlight)]))
            .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let content_padding = Block::default().padding(Padding::new(2, 2, 0, 0));

        let Some(actions) = self.actions else {
            let notice = Paragraph::new(vec![
                Line::from(Span::styled("Category not found", normal)),
                Line::from(Span::styled(
                    "No step-by-step guides are listed here yet.",
                    muted,
                )),
            ])
            .block(content_padding);
            frame.render_widget(notice, chunks[1]);

            let help = Paragraph::new(Line::from(vec![Span::styled(" esc back  q quit", muted)]));
            frame.render_widget(help, chunks[2]);
            return;
        };

        let list_items: Vec<ListItem> = actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let style = if i == self.selected {
                    highlight
                } else {
                    normal
                };
                let pointer = if i == self.selected { "› " } else { "  " };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(pointer, style),
                        Span::styled(action.name.as_str(), style),
                        Span::styled(format!("  [{}]", action.difficulty.label()), muted),
                    ]),
                    Line::from(Span::styled(format!("  {}", action.description), muted)),
                ])
            })
            .collect();

        let list = List::new(list_items).block(content_padding);
        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ navigate  ⏎ open roadmap  esc back  tab assistant  q quit",
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
    fn lists_category_actions() {
        let mut screen = CategoryScreen::new(CategoryId::Criminal);
        assert!(screen.is_found());
        assert_eq!(screen.select(), Some(ActionId::FileFir));

        screen.move_down();
        let second = catalog::actions_for("criminal").unwrap()[1].id;
        assert_eq!(screen.select(), Some(second));
    }

    #[test]
    fn list_follows_selection_past_the_fold() {
        let mut screen = CategoryScreen::new(CategoryId::Employment);
        let actions = catalog::actions_for("employment").unwrap();
        for _ in 1..actions.len() {
            screen.move_down();
        }

        let rows = draw(80, 24, |frame| screen.render(frame));
        let last = &actions[actions.len() - 1].name;
        assert!(
            rows.iter().any(|r| r.contains(&format!("› {last}"))),
            "{last} not on screen: {rows:#?}"
        );
    }

    #[test]
    fn empty_category_is_not_found() {
        let mut screen = CategoryScreen::new(CategoryId::Motor);
        assert!(!screen.is_found());
        screen.move_down();
        assert_eq!(screen.select(), None);
    }
}
