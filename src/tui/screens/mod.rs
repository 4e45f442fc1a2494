//! Screen rendering and input handling.

mod assistant;
mod category;
mod home;
mod roadmap;

pub use assistant::AssistantScreen;
pub use category::CategoryScreen;
pub use home::HomeScreen;
pub use roadmap::RoadmapScreen;

/// Break lines at word boundaries so none is wider than `width` columns.
///
/// Continuation lines keep the leading indent of the line they came from.
fn wrap(lines: &[String], width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        if line.chars().count() <= width || width == 0 {
            out.push(line.clone());
            continue;
        }

        let indent: String = line.chars().take_while(|c| *c == ' ').collect();
        let indent_len = indent.chars().count();
        let mut current = indent.clone();
        let mut current_len = indent_len;
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            if current_len > indent_len && current_len + 1 + word_len > width {
                out.push(std::mem::replace(&mut current, indent.clone()));
                current_len = indent_len;
            }
            if current_len > indent_len {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        out.push(current);
    }
    out
}

/// The start of the window of `height` lines, clamped so it never runs
/// past the end of `total`.
fn window(total: usize, height: usize, offset: usize) -> usize {
    offset.min(total.saturating_sub(height))
}

/// Draw once on a `width` x `height` test terminal and return its rows.
#[cfg(test)]
fn draw(width: u16, height: u16, render: impl FnOnce(&mut ratatui::Frame)) -> Vec<String> {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .map(|row| row.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_lines() {
        let lines = vec!["short".to_string(), String::new()];
        assert_eq!(wrap(&lines, 10), lines);
    }

    #[test]
    fn wrap_breaks_on_words_and_keeps_indent() {
        let lines = vec!["   one two three four".to_string()];
        assert_eq!(
            wrap(&lines, 12),
            ["   one two", "   three", "   four"].map(String::from)
        );
    }

    #[test]
    fn long_word_gets_its_own_line() {
        let lines = vec!["a supercalifragilistic b".to_string()];
        assert_eq!(
            wrap(&lines, 8),
            ["a", "supercalifragilistic", "b"].map(String::from)
        );
    }

    #[test]
    fn window_is_clamped() {
        assert_eq!(window(10, 4, 0), 0);
        assert_eq!(window(10, 4, 3), 3);
        assert_eq!(window(10, 4, 50), 6);
        assert_eq!(window(3, 4, 2), 0);
    }
}
