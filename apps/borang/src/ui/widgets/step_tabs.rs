//! Step progress tabs: one cell per step, completed steps ticked.
//!
//! Digit keys 1-5 jump back to a visited step; the tabs show which of those
//! jumps are available.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::symbols;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let current = app.wizard.current_step_id();

    let mut spans = Vec::new();
    for step in app.wizard.steps() {
        let done = step.id < current;
        let active = step.id == current;

        let marker = if done {
            symbols::CHECK.to_string()
        } else {
            step.id.to_string()
        };
        let style = if active {
            theme.primary_bold()
        } else if done {
            theme.done()
        } else {
            theme.muted()
        };

        spans.push(Span::styled(
            format!(" {} {} ", marker, step.short_title),
            style,
        ));
        if step.id != app.wizard.steps().len() as u8 {
            let connector = if done { theme.done() } else { theme.border() };
            spans.push(Span::styled("──", connector));
        }
    }

    let tabs = Paragraph::new(vec![Line::from(spans), Line::from("")])
        .alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}
