//! Unit selection screen: house type, then the level within that type.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, UnitRow};
use crate::theme::symbols;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_active())
        .title(" Kategori Pilihan Unit Rumah ")
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // Type/level rows
            Constraint::Length(2), // Key hints
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "Sila pilih jenis rumah dan tingkat yang dikehendaki.",
        theme.muted(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let fields = app.wizard.fields();
    let mut lines = Vec::new();
    for (i, row) in app.unit_rows().iter().enumerate() {
        let focused = i == app.unit_cursor;
        let cursor = if focused {
            format!("{} ", symbols::ARROW_RIGHT)
        } else {
            "  ".to_string()
        };

        let line = match *row {
            UnitRow::House(hi) => {
                let house = &app.catalog.houses[hi];
                let chosen = fields.unit_type == house.name;
                let radio = if chosen {
                    symbols::RADIO_ON
                } else {
                    symbols::RADIO_OFF
                };
                let name_style = if chosen {
                    theme.primary_bold()
                } else if focused {
                    theme.text()
                } else {
                    theme.label()
                };
                Line::from(vec![
                    Span::styled(cursor, theme.primary()),
                    Span::styled(format!("{radio} "), name_style),
                    Span::styled(format!("Rumah {}", house.name), name_style),
                    Span::styled(format!("  {}", house.price_range()), theme.muted()),
                ])
            }
            UnitRow::Level(hi, li) => {
                let level = &app.catalog.houses[hi].levels[li];
                let chosen = fields.unit_level == level.label;
                let mark = if chosen { symbols::CHECK } else { " " };
                let label_style = if chosen {
                    theme.primary_bold()
                } else if focused {
                    theme.text()
                } else {
                    theme.label()
                };
                Line::from(vec![
                    Span::styled(cursor, theme.primary()),
                    Span::styled(format!("    {mark} "), theme.primary()),
                    Span::styled(format!("{:<16}", level.label), label_style),
                    Span::styled(level.price.clone(), theme.done()),
                ])
            }
        };
        lines.push(line);
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);

    let can_advance = app.wizard.can_advance();
    let mut hint_spans = vec![
        Span::styled("↑/↓", theme.key_hint()),
        Span::styled(" Gerak  ", theme.muted()),
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" Pilih  ", theme.muted()),
    ];
    if can_advance {
        hint_spans.push(Span::styled("Tab", theme.key_hint()));
        hint_spans.push(Span::styled(" Seterusnya  ", theme.muted()));
    } else {
        hint_spans.push(Span::styled(
            "Pilih jenis rumah dan tingkat untuk seterusnya  ",
            theme.error(),
        ));
    }
    hint_spans.push(Span::styled("q", theme.key_hint()));
    hint_spans.push(Span::styled(" Keluar", theme.muted()));

    let hints = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    frame.render_widget(hints, chunks[2]);
}
