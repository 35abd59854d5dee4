//! Applicant / spouse details screens.
//!
//! Both steps render the same field table into different bags, so this one
//! renderer serves steps 2 and 3.

use borang_core::BagName;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::forms::{FieldKind, FieldSpec};
use crate::theme::symbols;

pub fn render(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    screen: Screen,
    title: &str,
    subtitle: &str,
) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_active())
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // Field rows
            Constraint::Length(2), // Key hints
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(subtitle, theme.muted())))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let bag = App::bag_for(screen).expect("person screen is bag-backed");
    let fields = app.form_fields(screen);
    let cursor = app.form_cursor(screen);
    let lines = field_lines(app, &fields, bag, cursor, chunks[1].height as usize);
    frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);

    render_form_hints(frame, app, chunks[2]);
}

/// Render the form rows as one line each, windowed around the cursor so long
/// forms fit small terminals.
pub fn field_lines<'a>(
    app: &'a App,
    fields: &[&'static FieldSpec],
    bag: BagName,
    cursor: usize,
    visible: usize,
) -> Vec<Line<'a>> {
    let offset = (cursor + 1).saturating_sub(visible.max(1));
    fields
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(i, spec)| field_line(app, spec, bag, i == cursor))
        .collect()
}

fn field_line<'a>(app: &'a App, spec: &'static FieldSpec, bag: BagName, focused: bool) -> Line<'a> {
    let theme = &app.theme;
    let store = app.wizard.fields();

    let cursor = if focused {
        format!("{} ", symbols::ARROW_RIGHT)
    } else {
        "  ".to_string()
    };
    let label_style = if focused { theme.primary() } else { theme.label() };
    let marker = if spec.required { "*" } else { " " };

    let mut spans = vec![
        Span::styled(cursor, theme.primary()),
        Span::styled(format!("{:<30}", spec.label), label_style),
        Span::styled(format!("{marker} "), theme.error()),
    ];

    match spec.kind {
        FieldKind::Text => {
            if focused && app.editing {
                spans.push(Span::styled(
                    format!("{}_", app.input_buffer),
                    theme.primary(),
                ));
            } else {
                let value = store.text(bag, spec.key);
                if value.is_empty() {
                    spans.push(Span::styled(spec.placeholder, theme.muted()));
                } else {
                    spans.push(Span::styled(value, theme.text()));
                }
            }
        }
        FieldKind::Radio(_) => {
            let value = store.text(bag, spec.key);
            if value.is_empty() {
                spans.push(Span::styled(
                    format!("{} belum dipilih", symbols::RADIO_OFF),
                    theme.muted(),
                ));
            } else {
                spans.push(Span::styled(
                    format!("{} {}", symbols::RADIO_ON, value),
                    theme.primary(),
                ));
            }
        }
        FieldKind::Checkbox => {
            let checked = store.flag(bag, spec.key);
            let mark = if checked {
                format!("[{}]", symbols::CHECK)
            } else {
                "[ ]".to_string()
            };
            let style = if checked { theme.primary() } else { theme.text() };
            spans.push(Span::styled(
                format!("{mark} {}", spec.hint.unwrap_or(spec.label)),
                style,
            ));
        }
    }

    Line::from(spans)
}

/// Key hints shared by the form steps.
pub fn render_form_hints(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.editing {
        Line::from(vec![
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" Simpan  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" Batal", theme.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("↑/↓", theme.key_hint()),
            Span::styled(" Gerak  ", theme.muted()),
            Span::styled("Enter", theme.key_hint()),
            Span::styled(" Isi / Tukar  ", theme.muted()),
            Span::styled("Tab", theme.key_hint()),
            Span::styled(" Seterusnya  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" Kembali  ", theme.muted()),
            Span::styled("1-5", theme.key_hint()),
            Span::styled(" Langkah lepas  ", theme.muted()),
            Span::styled("q", theme.key_hint()),
            Span::styled(" Keluar", theme.muted()),
        ])
    };
    let hints_para = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(hints_para, area);
}
