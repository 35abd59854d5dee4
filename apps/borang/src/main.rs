//! Borang Sewa
//!
//! Terminal wizard for the Iskandar Malaysia housing-rental application form.

mod app;
mod forms;
mod theme;
mod ui;

use std::{
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use borang_core::Catalog;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Screen};
use crate::forms::FieldKind;
use crate::theme::Theme;

/// Borang Permohonan Penyewaan Rumah - Iskandar Malaysia
#[derive(Parser)]
#[command(name = "borang-sewa")]
#[command(version)]
#[command(about = "Borang Permohonan Penyewaan Rumah - Iskandar Malaysia", long_about = None)]
struct Cli {
    /// Visual theme
    #[arg(long, value_enum, default_value = "emerald")]
    theme: CliTheme,

    /// House catalog file (YAML or JSON); the built-in catalog is used if omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write debug logs to the log file
    #[arg(long)]
    debug: bool,

    /// Log file path (the terminal itself belongs to the form)
    #[arg(long, default_value = "borang-sewa.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliTheme {
    Emerald,
    Sapphire,
}

impl From<CliTheme> for Theme {
    fn from(choice: CliTheme) -> Self {
        match choice {
            CliTheme::Emerald => Theme::emerald(),
            CliTheme::Sapphire => Theme::sapphire(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        init_logging(&cli.log_file)?;
    }

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::default(),
    };

    let app = App::new(catalog, cli.theme.into());
    run_tui(app)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let catalog = parse_catalog(&raw, path.extension().and_then(|e| e.to_str()))
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    anyhow::ensure!(
        !catalog.houses.is_empty(),
        "catalog {} defines no house types",
        path.display()
    );
    Ok(catalog)
}

fn parse_catalog(raw: &str, extension: Option<&str>) -> Result<Catalog> {
    let catalog = match extension {
        Some("json") => serde_json::from_str(raw)?,
        _ => serde_yaml::from_str(raw)?,
    };
    Ok(catalog)
}

/// Run the TUI wizard
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Global quit
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            // Handle input based on current screen
            match app.screen() {
                Screen::Unit => handle_unit_input(app, key.code),
                Screen::Applicant => handle_form_input(app, key.code, Screen::Applicant),
                Screen::Spouse => handle_form_input(app, key.code, Screen::Spouse),
                Screen::Additional => handle_form_input(app, key.code, Screen::Additional),
                Screen::Documents => handle_documents_input(app, key.code),
                Screen::Complete => handle_complete_input(app, key.code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_unit_input(app: &mut App, key: KeyCode) {
    let rows = app.unit_rows().len();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.unit_cursor > 0 {
                app.unit_cursor -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.unit_cursor + 1 < rows {
                app.unit_cursor += 1;
            }
        }
        KeyCode::Enter => {
            app.select_unit_row();
            // Selecting a type changes how many rows exist.
            app.unit_cursor = app.unit_cursor.min(app.unit_rows().len().saturating_sub(1));
        }
        KeyCode::Tab => {
            if app.wizard.can_advance() {
                debug!(step = app.wizard.current_step_id(), "advance");
                app.wizard.advance();
            }
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_form_input(app: &mut App, key: KeyCode, screen: Screen) {
    let bag = App::bag_for(screen).expect("form screens are bag-backed");
    let fields = app.form_fields(screen);
    let cursor = app.form_cursor(screen).min(fields.len().saturating_sub(1));
    app.set_form_cursor(screen, cursor);

    if app.editing {
        match key {
            KeyCode::Enter => app.commit_edit(bag, fields[cursor]),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                app.input_buffer.push(c);
            }
            _ => {}
        }
    } else {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if cursor > 0 {
                    app.set_form_cursor(screen, cursor - 1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if cursor + 1 < fields.len() {
                    app.set_form_cursor(screen, cursor + 1);
                }
            }
            KeyCode::Enter => {
                let spec = fields[cursor];
                match spec.kind {
                    FieldKind::Text => app.begin_edit(bag, spec),
                    FieldKind::Radio(_) => app.cycle_radio(bag, spec),
                    FieldKind::Checkbox => app.toggle_checkbox(bag, spec),
                }
                // The conditional home-location row may have appeared or gone.
                let len = app.form_fields(screen).len();
                app.set_form_cursor(screen, app.form_cursor(screen).min(len.saturating_sub(1)));
            }
            KeyCode::Tab => {
                debug!(step = app.wizard.current_step_id(), "advance");
                app.wizard.advance();
            }
            KeyCode::Esc | KeyCode::Left => {
                debug!(step = app.wizard.current_step_id(), "retreat");
                app.wizard.retreat();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => jump_back(app, c),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
    }
}

fn handle_documents_input(app: &mut App, key: KeyCode) {
    if app.editing {
        match key {
            KeyCode::Enter => app.commit_document_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                app.input_buffer.push(c);
            }
            _ => {}
        }
    } else {
        match key {
            KeyCode::Enter => app.begin_document_edit(),
            KeyCode::Char('x') => app.wizard.set_document(None),
            KeyCode::Tab => match app.wizard.submit() {
                Ok(()) => debug!("application submitted"),
                // Submit is only offered here, on the final step; a rejection
                // would mean the screen mapping is broken.
                Err(err) => warn!(%err, "submit rejected"),
            },
            KeyCode::Esc | KeyCode::Left => app.wizard.retreat(),
            KeyCode::Char(c) if c.is_ascii_digit() => jump_back(app, c),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
    }
}

fn handle_complete_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('n') => app.new_application(),
        KeyCode::Enter | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn jump_back(app: &mut App, digit: char) {
    if let Some(target) = digit.to_digit(10) {
        debug!(target, "jump back");
        app.wizard.jump_to(target as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borang_core::BagName;

    #[test]
    fn test_parse_catalog_yaml() {
        let raw = "
houses:
  - name: 2 Bilik Tidur
    levels:
      - label: Tingkat Bawah
        price: RM500/bulan
      - label: Tingkat Satu
        price: RM480/bulan
";
        let catalog = parse_catalog(raw, Some("yaml")).unwrap();
        assert_eq!(catalog.houses.len(), 1);
        assert_eq!(catalog.levels("2 Bilik Tidur").len(), 2);
    }

    #[test]
    fn test_parse_catalog_json() {
        let raw = r#"{ "houses": [ { "name": "Studio", "levels": [] } ] }"#;
        let catalog = parse_catalog(raw, Some("json")).unwrap();
        assert_eq!(catalog.houses[0].name, "Studio");
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(parse_catalog("{ not valid", Some("json")).is_err());
    }

    #[test]
    fn test_digit_keys_jump_backward_only() {
        let mut app = App::new(Catalog::default(), Theme::default());
        app.wizard.set_unit_type("3 Bilik Tidur");
        app.wizard.set_unit_level("Tingkat Satu");
        for _ in 0..3 {
            app.wizard.advance();
        }
        assert_eq!(app.wizard.current_step_id(), 4);

        jump_back(&mut app, '5');
        assert_eq!(app.wizard.current_step_id(), 4);
        jump_back(&mut app, '2');
        assert_eq!(app.wizard.current_step_id(), 2);
    }

    #[test]
    fn test_tab_on_documents_submits() {
        let mut app = App::new(Catalog::default(), Theme::default());
        app.wizard.set_unit_type("3 Bilik Tidur");
        app.wizard.set_unit_level("Tingkat Bawah");
        for _ in 0..4 {
            app.wizard.advance();
        }
        assert_eq!(app.screen(), Screen::Documents);

        handle_documents_input(&mut app, KeyCode::Tab);
        assert!(app.wizard.submitted());
        assert_eq!(app.screen(), Screen::Complete);
    }

    #[test]
    fn test_editing_captures_navigation_keys() {
        let mut app = App::new(Catalog::default(), Theme::default());
        app.wizard.set_unit_type("3 Bilik Tidur");
        app.wizard.set_unit_level("Tingkat Bawah");
        app.wizard.advance();

        handle_form_input(&mut app, KeyCode::Enter, Screen::Applicant);
        assert!(app.editing);

        // While editing, q and digits are text, not commands.
        for c in ['S', 'i', 't', 'i', ' ', 'q', '1'] {
            handle_form_input(&mut app, KeyCode::Char(c), Screen::Applicant);
        }
        assert!(!app.should_quit);
        assert_eq!(app.wizard.current_step_id(), 2);
        assert_eq!(app.input_buffer, "Siti q1");

        handle_form_input(&mut app, KeyCode::Enter, Screen::Applicant);
        assert!(!app.editing);
        assert_eq!(
            app.wizard.fields().text(BagName::Applicant, "nama"),
            "Siti q1"
        );
    }
}
