//! UI module for the borang-sewa wizard.
//!
//! Contains all screen renderers and shared widgets.

pub mod screens;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::theme::{FORM_TITLE, ORGANIZATION};

/// Main UI renderer
pub fn render(frame: &mut Frame, app: &App) {
    if app.screen() == Screen::Complete {
        // The success screen replaces the whole form, tabs included.
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());
        screens::complete::render(frame, app, chunks[0]);
        widgets::status_bar::render(frame, app, chunks[1]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Form title
            Constraint::Length(2), // Step tabs
            Constraint::Min(3),    // Current step
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {FORM_TITLE} "), app.theme.title()),
        Span::styled(format!("— {ORGANIZATION}"), app.theme.muted()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    widgets::step_tabs::render(frame, app, chunks[1]);

    match app.screen() {
        Screen::Unit => screens::unit::render(frame, app, chunks[2]),
        Screen::Applicant => screens::person::render(
            frame,
            app,
            chunks[2],
            Screen::Applicant,
            " Butiran Pemohon ",
            "Sila isikan maklumat peribadi pemohon utama.",
        ),
        Screen::Spouse => screens::person::render(
            frame,
            app,
            chunks[2],
            Screen::Spouse,
            " Butiran Pasangan ",
            "Sila isikan maklumat peribadi pasangan (jika berkenaan).",
        ),
        Screen::Additional => screens::additional::render(frame, app, chunks[2]),
        Screen::Documents => screens::documents::render(frame, app, chunks[2]),
        Screen::Complete => unreachable!("handled above"),
    }

    widgets::status_bar::render(frame, app, chunks[3]);
}

/// Helper to create centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
