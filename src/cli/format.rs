//! Output formatting for CLI display.

use crate::model::{ActionSummary, Category};

/// One line per category: id, name, and how many actions it offers.
pub(super) fn format_category(category: &Category) -> String {
    let count = match category.actions.len() {
        0 => "no actions yet".to_string(),
        1 => "1 action".to_string(),
        n => format!("{n} actions"),
    };
    format!(
        "{:<12} {}  ({count})",
        category.id.as_str(),
        category.display_name
    )
}

/// An action's id and name, then its description and difficulty indented.
pub(super) fn format_action(action: &ActionSummary) -> String {
    format!(
        "{:<24} {}\n{:<24} {} [{}]",
        action.id.as_str(),
        action.name,
        "",
        action.description,
        action.difficulty.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog;
    use crate::model::{ActionId, CategoryId};

    #[test]
    fn category_line_counts_actions() {
        let employment = catalog::category(CategoryId::Employment).unwrap();
        let line = format_category(employment);
        assert!(line.starts_with("employment   "));
        assert!(line.ends_with(&format!("({} actions)", employment.actions.len())));

        let motor = catalog::category(CategoryId::Motor).unwrap();
        assert!(format_category(motor).ends_with("(no actions yet)"));
    }

    #[test]
    fn action_shows_difficulty() {
        let fir = catalog::action(ActionId::FileFir).unwrap();
        let text = format_action(fir);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("file-fir "));
        let detail = lines.next().unwrap();
        assert!(detail.ends_with(&format!("[{}]", fir.difficulty.label())));
    }
}
