//! Additional details screen: background, current residence, and the
//! applicant's declaration.

use borang_core::BagName;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Screen};
use crate::forms::DECLARATION;
use crate::theme::symbols;

use super::person;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_active())
        .title(" Maklumat Tambahan ")
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // Field rows
            Constraint::Length(1), // Field hint
            Constraint::Length(4), // Declaration
            Constraint::Length(2), // Key hints
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "Maklumat latar belakang dan status semasa.",
        theme.muted(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let fields = app.form_fields(Screen::Additional);
    let cursor = app.form_cursor(Screen::Additional);
    let lines = person::field_lines(
        app,
        &fields,
        BagName::Additional,
        cursor,
        chunks[1].height as usize,
    );
    frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);

    // Per-field hint for the focused row (the dependents list carries a
    // format example).
    if let Some(hint) = fields.get(cursor).and_then(|spec| spec.hint) {
        let hint_para = Paragraph::new(Line::from(Span::styled(hint, theme.muted())))
            .alignment(Alignment::Center);
        frame.render_widget(hint_para, chunks[2]);
    }

    // Declaration box, always visible on this step.
    let acknowledged = app.wizard.fields().flag(BagName::Additional, "akuan");
    let mark = if acknowledged {
        format!("[{}]", symbols::CHECK)
    } else {
        "[ ]".to_string()
    };
    let declaration_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.warning())
        .title(" ⚠ Akuan Pemohon ")
        .title_style(theme.warning());
    let declaration = Paragraph::new(vec![
        Line::from(Span::styled(DECLARATION, theme.text())),
        Line::from(Span::styled(
            format!("{mark} Ya, saya bersetuju dengan akuan di atas"),
            if acknowledged {
                theme.primary()
            } else {
                theme.warning()
            },
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(declaration_block);
    frame.render_widget(declaration, chunks[3]);

    person::render_form_hints(frame, app, chunks[4]);
}
