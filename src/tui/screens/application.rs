//! Application form screen — the data entry form for one job application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::info;

use crate::model::{Application, ApplicationDraft, ErrorField, Position, Skill, validate_draft};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::summary::draw_summary;

/// Field index for the applicant's full name.
const NAME: usize = 0;
/// Field index for the phone number.
const PHONE: usize = 1;
/// Field index for the email address.
const EMAIL: usize = 2;
/// Field index for relevant experience (Developer/Designer only).
const EXPERIENCE: usize = 3;
/// Field index for the portfolio URL (Designer only).
const PORTFOLIO: usize = 4;
/// Field index for the preferred interview time.
const INTERVIEW_TIME: usize = 5;

/// State for the application form screen.
#[derive(Debug, Clone)]
pub struct ApplicationFormState {
    form: Form,
    position: Option<Position>,
    skills: Vec<Skill>,
    position_error: Option<String>,
    skills_error: Option<String>,
}

impl Default for ApplicationFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationFormState {
    /// Creates a new form state with every field empty and no position
    /// selected. Experience and portfolio stay hidden until a position that
    /// needs them is chosen.
    pub fn new() -> Self {
        let form = Form::new(vec![
            FormField::new("Your full Name", true),
            FormField::new("Your Phone Number", true),
            FormField::new("Your email", true),
            FormField::hidden("Relevant Experience", true),
            FormField::hidden("Portfolio URL", true),
            FormField::new("Preferred Interview Time", true),
        ]);
        let state = Self {
            form,
            position: None,
            skills: Vec::new(),
            position_error: None,
            skills_error: None,
        };
        state.log_position();
        state
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Alt+p cycles the position; Alt+1/2/3 toggle skills.
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('p') => {
                    self.cycle_position(true);
                    return Action::None;
                }
                KeyCode::Char('1') => {
                    self.toggle_skill(Skill::Javascript);
                    return Action::None;
                }
                KeyCode::Char('2') => {
                    self.toggle_skill(Skill::Html);
                    return Action::None;
                }
                KeyCode::Char('3') => {
                    self.toggle_skill(Skill::Css);
                    return Action::None;
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT && key.code == KeyCode::Char('P') {
            self.cycle_position(false);
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the currently selected position, if any.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the selected skills, in selection order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Returns the position presence error, if any.
    pub fn position_error(&self) -> Option<&str> {
        self.position_error.as_deref()
    }

    /// Returns the skill selection error, if any.
    pub fn skills_error(&self) -> Option<&str> {
        self.skills_error.as_deref()
    }

    /// Assembles the current field values into a draft record.
    pub fn draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            name: self.form.value(NAME).to_string(),
            phone: self.form.value(PHONE).to_string(),
            email: self.form.value(EMAIL).to_string(),
            position: self.position,
            experience: self.form.value(EXPERIENCE).to_string(),
            portfolio: self.form.value(PORTFOLIO).to_string(),
            skills: self.skills.clone(),
            interview_time: self.form.value(INTERVIEW_TIME).to_string(),
        }
    }

    /// Cycles the position forward or backward, wrapping around.
    ///
    /// The first selection starts the cycle at Developer (or Manager when
    /// cycling backward); after that there is no way back to "unselected",
    /// matching a selector whose empty entry is disabled.
    fn cycle_position(&mut self, forward: bool) {
        let next = match self.position {
            None if forward => Position::Developer,
            None => Position::Manager,
            Some(current) => cycle(Position::all(), current, forward),
        };
        self.position = Some(next);
        self.sync_visibility();
        self.log_position();
    }

    /// Emits the diagnostic line for the current selection.
    fn log_position(&self) {
        info!(
            "Selected option: {}",
            self.position.map(|p| p.label()).unwrap_or("")
        );
    }

    /// Shows or hides the conditional fields for the current position.
    ///
    /// Hidden fields keep their values; if focus was on a field that just
    /// disappeared it falls back to the name field.
    fn sync_visibility(&mut self) {
        let experience = self.position.is_some_and(|p| p.requires_experience());
        let portfolio = self.position.is_some_and(|p| p.requires_portfolio());
        self.form.set_visible(EXPERIENCE, experience);
        self.form.set_visible(PORTFOLIO, portfolio);
        if !self.form.fields()[self.form.focus()].visible {
            self.form.set_focus(NAME);
        }
    }

    /// Toggles a skill tag: append if absent, remove all occurrences if present.
    fn toggle_skill(&mut self, skill: Skill) {
        if self.skills.contains(&skill) {
            self.skills.retain(|s| *s != skill);
        } else {
            self.skills.push(skill);
        }
    }

    /// Validates the form and constructs an [`Application`] on success.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.position_error = None;
        self.skills_error = None;

        let draft = self.draft();

        // Presence checks for the fields the validator has no rule for;
        // a terminal has no `required` attribute to lean on.
        if draft.name.is_empty() {
            self.form
                .set_error(NAME, "Please enter your full name.".into());
        }
        if draft.position.is_none() {
            self.position_error = Some("Please select a position.".into());
        }
        if draft.position.is_some_and(|p| p.requires_portfolio()) && draft.portfolio.is_empty() {
            self.form
                .set_error(PORTFOLIO, "Please enter your portfolio URL.".into());
        }

        for (field, error) in validate_draft(&draft) {
            match field {
                ErrorField::Email => self.form.set_error(EMAIL, error.to_string()),
                ErrorField::Phone => self.form.set_error(PHONE, error.to_string()),
                ErrorField::Experience => self.form.set_error(EXPERIENCE, error.to_string()),
                ErrorField::InterviewTime => {
                    self.form.set_error(INTERVIEW_TIME, error.to_string());
                }
                ErrorField::AdditionalInfo => self.skills_error = Some(error.to_string()),
            }
        }

        if self.form.has_errors() || self.position_error.is_some() || self.skills_error.is_some() {
            return Action::None;
        }

        let Some(position) = draft.position else {
            return Action::None;
        };

        Action::Submit(Application::new(
            draft.name,
            draft.phone,
            draft.email,
            position,
            draft.experience,
            draft.portfolio,
            draft.skills,
            draft.interview_time,
        ))
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the application form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_application(
    state: &ApplicationFormState,
    submitted: Option<&Application>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Job Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = state.form().visible_count() as u16 * 3;
    let [position_area, form_area, skills_area, summary_area, footer_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(form_height),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    // Position selector row
    let position_label = state
        .position()
        .map(|p| p.label())
        .unwrap_or("Select a position");
    let selector = Line::from(vec![
        Span::raw("Applying for Position * : "),
        Span::styled(position_label, Style::default().fg(Color::Yellow)),
    ]);
    let mut position_lines = vec![selector];
    if let Some(err) = state.position_error() {
        position_lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(position_lines), position_area);

    // Form fields
    draw_form(state.form(), frame, form_area);

    // Skill checkboxes
    let mut skill_spans = vec![Span::raw("Additional information * : ")];
    for skill in Skill::all() {
        let mark = if state.skills().contains(skill) {
            "[x] "
        } else {
            "[ ] "
        };
        skill_spans.push(Span::raw(mark));
        skill_spans.push(Span::raw(skill.label()));
        skill_spans.push(Span::raw("  "));
    }
    let mut skill_lines = vec![Line::from(skill_spans)];
    if let Some(err) = state.skills_error() {
        skill_lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(Paragraph::new(skill_lines), skills_area);

    // Submission summary, only once something was accepted
    if let Some(application) = submitted {
        draw_summary(application, frame, summary_area);
    }

    // Footer
    let footer = Paragraph::new(Line::from(
        "Tab: next  Alt+p: position  Alt+1/2/3: skills  Enter: submit  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
