use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::model::Application;

use super::action::Action;
use super::error::AppError;
use super::screens::{ApplicationFormState, HelpState, draw_application, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The job application form with its submission summary.
    Application,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    form: ApplicationFormState,
    help: HelpState,
    submitted: Option<Application>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Application`] screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Application,
            form: ApplicationFormState::new(),
            help: HelpState,
            submitted: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Application => {
                draw_application(&self.form, self.submitted.as_ref(), frame, area);
            }
            Screen::Help => draw_help(frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Application => self.form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(application) => self.submitted = Some(application),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the form screen state.
    pub fn form(&self) -> &ApplicationFormState {
        &self.form
    }

    /// Returns the latest accepted submission, if any.
    pub fn submitted(&self) -> Option<&Application> {
        self.submitted.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{Position, Skill};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn alt_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    /// Drives a complete valid Developer application through the app.
    fn fill_valid_developer(app: &mut App) {
        type_string(app, "Harsh");
        app.handle_key(press(KeyCode::Tab));
        type_string(app, "9520691965");
        app.handle_key(press(KeyCode::Tab));
        type_string(app, "harsh@example.com");
        app.handle_key(alt_press(KeyCode::Char('p')));
        app.handle_key(press(KeyCode::Tab));
        type_string(app, "3");
        app.handle_key(press(KeyCode::Tab));
        type_string(app, "2024-05-01T10:00");
        app.handle_key(alt_press(KeyCode::Char('1')));
    }

    #[test]
    fn new_starts_on_application_screen() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Application);
        assert!(!app.should_quit());
        assert!(app.submitted().is_none());
    }

    #[test]
    fn esc_on_form_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn f1_navigates_to_help() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        assert!(!app.should_quit());
    }

    #[test]
    fn f1_on_help_stays_on_help() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
    }

    #[test]
    fn q_on_help_returns_to_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::Application);
        assert!(!app.should_quit());
    }

    #[test]
    fn esc_on_help_returns_to_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Application);
        assert!(!app.should_quit());
    }

    #[test]
    fn typing_on_help_does_not_touch_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.form().draft().name, "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[test]
    fn successful_submission_is_stored() {
        let mut app = App::new();
        fill_valid_developer(&mut app);
        app.handle_key(press(KeyCode::Enter));

        let submitted = app.submitted().expect("submission should be stored");
        assert_eq!(submitted.name, "Harsh");
        assert_eq!(submitted.position, Position::Developer);
        assert_eq!(submitted.portfolio, "N/A");
        assert_eq!(submitted.skills, vec![Skill::Javascript]);
    }

    #[test]
    fn failed_submission_stores_nothing() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Enter));
        assert!(app.submitted().is_none());
        assert!(app.form().form().has_errors());
    }

    #[test]
    fn failed_attempt_keeps_previous_submission() {
        let mut app = App::new();
        fill_valid_developer(&mut app);
        app.handle_key(press(KeyCode::Enter));
        let before = app.submitted().cloned();

        // Break the email, then try again
        app.handle_key(press(KeyCode::Tab)); // name
        app.handle_key(press(KeyCode::Tab)); // phone
        app.handle_key(press(KeyCode::Tab)); // email
        type_string(&mut app, "!!");
        app.handle_key(press(KeyCode::Enter));

        assert!(app.form().form().has_errors());
        assert_eq!(app.submitted().cloned(), before);
    }

    #[test]
    fn resubmission_replaces_snapshot_wholesale() {
        let mut app = App::new();
        fill_valid_developer(&mut app);
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.submitted().unwrap().position, Position::Developer);

        // Switch to Manager and submit again
        app.handle_key(alt_press(KeyCode::Char('p'))); // Designer
        app.handle_key(alt_press(KeyCode::Char('p'))); // Manager
        app.handle_key(press(KeyCode::Enter));

        let submitted = app.submitted().unwrap();
        assert_eq!(submitted.position, Position::Manager);
        assert_eq!(submitted.experience, "3");
    }

    #[test]
    fn resubmitting_unchanged_form_is_idempotent() {
        let mut app = App::new();
        fill_valid_developer(&mut app);
        app.handle_key(press(KeyCode::Enter));
        let first = app.submitted().cloned();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.submitted().cloned(), first);
        assert!(!app.form().form().has_errors());
    }
}
