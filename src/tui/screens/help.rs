//! Help screen — keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Alt+p", "next position"),
    ("Shift+Alt+P", "prev position"),
    ("Alt+1 / Alt+2 / Alt+3", "toggle Javascript / HTML / CSS"),
    ("Enter", "submit application"),
    ("Esc", "quit"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("q / Esc", "back to the form")];

/// State for the help screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpState;

impl HelpState {
    /// Handles a key event: any dismiss key returns to the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Application),
            _ => Action::None,
        }
    }
}

fn key_lines(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, description) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<24}"), Style::default().fg(Color::Yellow)),
            Span::raw(*description),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let mut lines = key_lines("Application Form", FORM_KEYS);
    lines.extend(key_lines("Help", HELP_KEYS));
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer =
        Paragraph::new(Line::from("q / Esc: back")).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn q_navigates_back() {
        let mut state = HelpState;
        assert_eq!(
            state.handle_key(press(KeyCode::Char('q'))),
            Action::Navigate(Screen::Application)
        );
    }

    #[test]
    fn esc_navigates_back() {
        let mut state = HelpState;
        assert_eq!(
            state.handle_key(press(KeyCode::Esc)),
            Action::Navigate(Screen::Application)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = HelpState;
        assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        #[test]
        fn renders_key_tables() {
            let backend = TestBackend::new(60, 20);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_help(frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut output = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                output.push('\n');
            }
            assert!(output.contains("Help"));
            assert!(output.contains("Application Form"));
            assert!(output.contains("Alt+p"));
            assert!(output.contains("submit application"));
        }
    }
}
