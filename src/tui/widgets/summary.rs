//! Submission summary widget — read-only view of the last accepted application.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Application, join_skills};

fn summary_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

/// Renders the submission summary block.
///
/// The portfolio line only appears for Designer submissions; everything else
/// is shown unconditionally, including an empty experience value.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_summary(application: &Application, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Submission Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        summary_line("Name: ", application.name.clone()),
        summary_line("Phone: ", application.phone.clone()),
        summary_line("Email: ", application.email.clone()),
        summary_line("Position: ", application.position.to_string()),
        summary_line("Experience: ", application.experience.clone()),
    ];
    if application.position.requires_portfolio() {
        lines.push(summary_line(
            "Portfolio URL: ",
            application.portfolio.clone(),
        ));
    }
    lines.push(summary_line(
        "Additional Skills: ",
        join_skills(&application.skills),
    ));
    lines.push(summary_line(
        "Preferred Interview Time: ",
        application.interview_time.clone(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
