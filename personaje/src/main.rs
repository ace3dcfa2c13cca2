//! Terminal character sheet wizard.
//!
//! Nine labeled steps collect the sheet's 22 fields, validating each step
//! before advancing. The in-progress draft is saved on every keystroke and
//! restored on the next launch; finishing shows an editable summary.

mod app;
mod events;
mod ui;

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use personaje_core::{FileStore, Wizard};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::new(data_dir());
    let app = App::new(Wizard::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result.map_err(Into::into)
}

/// Where the draft lives: the platform data directory, falling back to the
/// working directory.
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("personaje")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<FileStore>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev) == EventResult::Quit {
                return Ok(());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
