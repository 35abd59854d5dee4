//! Documents screen: the required-attachments list and the single document
//! reference. Only a name is recorded; nothing is read from disk.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::forms::REQUIRED_DOCUMENTS;
use crate::theme::symbols;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_active())
        .title(" Muat Naik Dokumen ")
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                            // Header
            Constraint::Length(REQUIRED_DOCUMENTS.len() as u16 + 3), // Checklist
            Constraint::Length(5),                            // Attachment
            Constraint::Min(0),                               // Spacer
            Constraint::Length(2),                            // Key hints
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "Sila muat naik semua dokumen yang diperlukan.",
        theme.muted(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    // Required documents checklist
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(" Senarai Dokumen Wajib ")
        .title_style(theme.done());
    let mut doc_lines = vec![Line::from("")];
    for (i, doc) in REQUIRED_DOCUMENTS.iter().enumerate() {
        doc_lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), theme.primary()),
            Span::styled(*doc, theme.text()),
        ]));
    }
    frame.render_widget(Paragraph::new(doc_lines).block(list_block), chunks[1]);

    // Attachment panel
    let document = &app.wizard.fields().document;
    let attach_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if document.is_some() {
            theme.border_active()
        } else {
            theme.border()
        })
        .title(" Dokumen ")
        .title_style(theme.label());

    let attach_lines = if app.editing {
        vec![
            Line::from(Span::styled(
                format!("  Nama fail: {}_", app.input_buffer),
                theme.primary(),
            )),
            Line::from(Span::styled(
                "  Kosongkan nama untuk membuang fail",
                theme.muted(),
            )),
        ]
    } else if let Some(doc) = document {
        vec![
            Line::from(vec![
                Span::styled(format!("  {} ", symbols::CHECK), theme.primary()),
                Span::styled(doc.name.clone(), theme.primary_bold()),
            ]),
            Line::from(Span::styled("  Enter untuk tukar fail", theme.muted())),
        ]
    } else {
        vec![
            Line::from(vec![
                Span::styled(format!("  {} ", symbols::ATTACH), theme.text()),
                Span::styled("Tiada fail dipilih", theme.text()),
            ]),
            Line::from(Span::styled(
                "  PDF, dokumen, atau imej — Maks 100 MB",
                theme.muted(),
            )),
        ]
    };
    frame.render_widget(Paragraph::new(attach_lines).block(attach_block), chunks[2]);

    // Key hints
    let hints = if app.editing {
        Line::from(vec![
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" Simpan  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" Batal", theme.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" Pilih fail  ", theme.muted()),
            Span::styled("x", theme.key_hint()),
            Span::styled(" Buang  ", theme.muted()),
            Span::styled("Tab", theme.key_hint()),
            Span::styled(" Hantar Permohonan  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" Kembali  ", theme.muted()),
            Span::styled("1-5", theme.key_hint()),
            Span::styled(" Langkah lepas  ", theme.muted()),
            Span::styled("q", theme.key_hint()),
            Span::styled(" Keluar", theme.muted()),
        ])
    };
    let hints_para = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(hints_para, chunks[4]);
}
