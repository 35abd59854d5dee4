//! Status bar widget.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::{PRODUCT_NAME, VERSION};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let steps = app.wizard.steps();

    let (screen_name, position) = if app.wizard.submitted() {
        ("Selesai".to_string(), "✓".to_string())
    } else {
        let step = app.wizard.current_step();
        (
            step.title.to_string(),
            format!("{} / {}", step.id, steps.len()),
        )
    };

    let status_line = Line::from(vec![
        Span::styled(format!(" {} ", PRODUCT_NAME), theme.primary()),
        Span::styled("│", theme.border()),
        Span::styled(format!(" {} ", screen_name), theme.text()),
        Span::styled("│", theme.border()),
        Span::styled(format!(" {} ", position), theme.muted()),
        Span::styled("│", theme.border()),
        Span::styled(format!(" v{} ", VERSION), theme.muted()),
    ]);

    let status_bar = Paragraph::new(status_line);
    frame.render_widget(status_bar, area);
}
