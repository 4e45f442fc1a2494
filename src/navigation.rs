//! Screen navigation as a pure transition function.
//!
//! The front end owns one [`Screen`] and replaces it with
//! `screen.next(event)` on every navigation event. Screens for unknown
//! categories or actions are still valid; they render a not-found notice
//! with a way back.

use crate::model::{ActionId, CategoryId};

/// What the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The category picker.
    #[default]
    Home,

    /// A category's action list.
    Category(CategoryId),

    /// One action's roadmap.
    Roadmap {
        category: CategoryId,
        action: ActionId,
    },

    /// The intake assistant.
    Assistant,
}

/// Something the user did that may change the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    SelectCategory(CategoryId),
    SelectAction(ActionId),
    Back,

    /// Switch to the roadmap browser; always lands on home.
    OpenRoadmaps,

    /// Switch to the assistant; always a fresh conversation.
    OpenAssistant,
}

impl Screen {
    /// The screen after `event`. Events that make no sense where the user
    /// is leave the screen unchanged.
    #[must_use]
    pub fn next(self, event: NavEvent) -> Self {
        match (self, event) {
            (_, NavEvent::OpenRoadmaps) => Self::Home,
            (_, NavEvent::OpenAssistant) => Self::Assistant,

            (Self::Home, NavEvent::SelectCategory(id)) => Self::Category(id),
            (Self::Category(category), NavEvent::SelectAction(action)) => {
                Self::Roadmap { category, action }
            }

            (Self::Roadmap { category, .. }, NavEvent::Back) => Self::Category(category),
            (Self::Category(_) | Self::Assistant | Self::Home, NavEvent::Back) => Self::Home,

            (screen, _) => screen,
        }
    }

    pub fn is_assistant(self) -> bool {
        matches!(self, Self::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drill_down_and_back_out() {
        let s = Screen::Home
            .next(NavEvent::SelectCategory(CategoryId::Criminal))
            .next(NavEvent::SelectAction(ActionId::FileFir));
        assert_eq!(
            s,
            Screen::Roadmap {
                category: CategoryId::Criminal,
                action: ActionId::FileFir
            }
        );

        let s = s.next(NavEvent::Back);
        assert_eq!(s, Screen::Category(CategoryId::Criminal));
        assert_eq!(s.next(NavEvent::Back), Screen::Home);
        assert_eq!(Screen::Home.next(NavEvent::Back), Screen::Home);
    }

    #[test]
    fn open_roadmaps_always_resets_to_home() {
        let deep = Screen::Roadmap {
            category: CategoryId::Business,
            action: ActionId::RegisterCompany,
        };
        assert_eq!(deep.next(NavEvent::OpenRoadmaps), Screen::Home);
        assert_eq!(Screen::Assistant.next(NavEvent::OpenRoadmaps), Screen::Home);
    }

    #[test]
    fn assistant_reachable_from_anywhere_and_back_goes_home() {
        let s = Screen::Category(CategoryId::Family).next(NavEvent::OpenAssistant);
        assert!(s.is_assistant());
        assert_eq!(s.next(NavEvent::Back), Screen::Home);
    }

    #[test]
    fn misplaced_selections_are_ignored() {
        assert_eq!(
            Screen::Home.next(NavEvent::SelectAction(ActionId::Divorce)),
            Screen::Home
        );
        assert_eq!(
            Screen::Assistant.next(NavEvent::SelectCategory(CategoryId::Motor)),
            Screen::Assistant
        );
        let c = Screen::Category(CategoryId::Family);
        assert_eq!(c.next(NavEvent::SelectCategory(CategoryId::Motor)), c);
    }

    #[test]
    fn unknown_category_is_still_a_screen() {
        // Motor has no actions; the screen renders a not-found notice.
        let s = Screen::Home.next(NavEvent::SelectCategory(CategoryId::Motor));
        assert_eq!(s, Screen::Category(CategoryId::Motor));
        assert_eq!(s.next(NavEvent::Back), Screen::Home);
    }
}
