//! Application loop and screen routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

use crate::config::Config;
use crate::navigation::{NavEvent, Screen};
use crate::resolver::TipRotation;

use super::screens::{AssistantScreen, CategoryScreen, HomeScreen, RoadmapScreen};

/// The live state behind the current [`Screen`].
enum View {
    Home(HomeScreen),
    Category(CategoryScreen),
    Roadmap(RoadmapScreen),
    Assistant(AssistantScreen),
}

impl View {
    fn for_screen(screen: Screen, rotation: TipRotation) -> Self {
        match screen {
            Screen::Home => Self::Home(HomeScreen::new()),
            Screen::Category(id) => Self::Category(CategoryScreen::new(id)),
            Screen::Roadmap { action, .. } => Self::Roadmap(RoadmapScreen::new(action, rotation)),
            Screen::Assistant => Self::Assistant(AssistantScreen::new(rotation)),
        }
    }

    fn render(&self, frame: &mut Frame) {
        match self {
            Self::Home(s) => s.render(frame),
            Self::Category(s) => s.render(frame),
            Self::Roadmap(s) => s.render(frame),
            Self::Assistant(s) => s.render(frame),
        }
    }

    /// Whether plain keys are text input rather than commands.
    fn is_typing(&self) -> bool {
        match self {
            Self::Roadmap(s) => s.is_typing(),
            Self::Assistant(_) => true,
            Self::Home(_) | Self::Category(_) => false,
        }
    }
}

struct App {
    screen: Screen,
    view: View,
    rotation: TipRotation,
}

impl App {
    fn new(rotation: TipRotation) -> Self {
        let screen = Screen::default();
        Self {
            screen,
            view: View::for_screen(screen, rotation),
            rotation,
        }
    }

    /// Apply a navigation event. The view is rebuilt, so leaving the
    /// assistant drops its conversation.
    fn navigate(&mut self, event: NavEvent) {
        let next = self.screen.next(event);
        debug!(from = ?self.screen, to = ?next, event = ?event, "Navigate");
        self.screen = next;
        self.view = View::for_screen(next, self.rotation);
    }

    /// Handle one key press. Returns `false` when the user quits.
    fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Tab => {
                let event = if self.screen.is_assistant() {
                    NavEvent::OpenRoadmaps
                } else {
                    NavEvent::OpenAssistant
                };
                self.navigate(event);
                return true;
            }
            KeyCode::Esc => {
                // Esc first closes an open advisor thread.
                if let View::Roadmap(r) = &mut self.view {
                    if r.is_typing() {
                        r.toggle_advisor();
                        return true;
                    }
                }
                self.navigate(NavEvent::Back);
                return true;
            }
            KeyCode::Char('q') if !self.view.is_typing() => return false,
            _ => {}
        }

        match &mut self.view {
            View::Home(home) => match code {
                KeyCode::Up | KeyCode::Char('k') => home.move_up(),
                KeyCode::Down | KeyCode::Char('j') => home.move_down(),
                KeyCode::Enter => {
                    if let Some(id) = home.select() {
                        self.navigate(NavEvent::SelectCategory(id));
                    }
                }
                _ => {}
            },
            View::Category(category) => match code {
                KeyCode::Up | KeyCode::Char('k') => category.move_up(),
                KeyCode::Down | KeyCode::Char('j') => category.move_down(),
                KeyCode::Enter => {
                    if let Some(action) = category.select() {
                        self.navigate(NavEvent::SelectAction(action));
                    }
                }
                _ => {}
            },
            View::Roadmap(roadmap) if roadmap.is_typing() => match code {
                KeyCode::Enter => roadmap.on_enter(),
                KeyCode::Backspace => roadmap.on_backspace(),
                KeyCode::Up => roadmap.on_scroll_up(),
                KeyCode::Down => roadmap.on_scroll_down(),
                KeyCode::Char(c) => roadmap.on_char(c),
                _ => {}
            },
            View::Roadmap(roadmap) => match code {
                KeyCode::Up | KeyCode::Char('k') => roadmap.on_scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => roadmap.on_scroll_down(),
                KeyCode::Char('c') => roadmap.toggle_advisor(),
                _ => {}
            },
            View::Assistant(assistant) => match code {
                KeyCode::Enter => assistant.on_enter(),
                KeyCode::Backspace => assistant.on_backspace(),
                KeyCode::Up => assistant.move_up(),
                KeyCode::Down => assistant.move_down(),
                KeyCode::Char(c) => assistant.on_char(c),
                _ => {}
            },
        }
        true
    }
}

/// Runs the TUI event loop until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &Config) -> io::Result<()> {
    let mut app = App::new(config.tip_rotation);

    loop {
        terminal.draw(|frame| app.view.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }
            if !app.on_key(key.code) {
                return Ok(());
            }
        }
    }
}
