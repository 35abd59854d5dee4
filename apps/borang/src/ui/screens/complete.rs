//! Success screen shown after submission.

use borang_core::BagName;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::{symbols, ORGANIZATION};
use crate::ui::centered_rect;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let card = centered_rect(70, 80, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_active())
        .title(" Permohonan Berjaya Dihantar! ")
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Check mark
            Constraint::Length(3), // Thanks
            Constraint::Length(7), // Summary
            Constraint::Min(0),    // Spacer
            Constraint::Length(2), // Key hints
        ])
        .split(inner);

    let check = Paragraph::new(Line::from(Span::styled(
        symbols::CHECK,
        theme.primary_bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(check, chunks[0]);

    let thanks = Paragraph::new(Text::from(vec![Line::from(Span::styled(
        "Terima kasih atas permohonan anda. Pihak kami akan menghubungi anda \
         dalam masa terdekat untuk tindakan lanjut.",
        theme.text(),
    ))]))
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center);
    frame.render_widget(thanks, chunks[1]);

    // Application summary
    let fields = app.wizard.fields();
    let applicant_name = {
        let name = fields.text(BagName::Applicant, "nama");
        if name.is_empty() {
            "—".to_string()
        } else {
            name.to_string()
        }
    };
    let submitted_at = app
        .wizard
        .submitted_at()
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    let summary_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(format!(" {} ", ORGANIZATION))
        .title_style(theme.label());
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Unit:    ", theme.muted()),
            Span::styled(format!("Rumah {}", fields.unit_type), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("  Tingkat: ", theme.muted()),
            Span::styled(fields.unit_level.clone(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("  Pemohon: ", theme.muted()),
            Span::styled(applicant_name, theme.text()),
        ]),
        Line::from(vec![
            Span::styled("  Tarikh:  ", theme.muted()),
            Span::styled(submitted_at, theme.text()),
        ]),
    ])
    .block(summary_block);
    frame.render_widget(summary, chunks[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("n", theme.key_hint()),
        Span::styled(" Permohonan Baru  ", theme.muted()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" Keluar", theme.muted()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[4]);
}
