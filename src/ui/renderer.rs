//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{CityPickerDialog, DeleteConfirmationDialog, ErrorDialog, TimeEditDialog},
    ClockList, HelpPanel, StatusBar,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(&config);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &config).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    // Polling with a timeout doubles as the refresh tick: rows without a
    // stored time render "now" and stay live across redraws.
    let poll_timeout = Duration::from_millis(config.sync.refresh_interval_ms);

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app)?;
                }
                Event::Resize(_, _) => {
                    // Next draw picks up the new dimensions
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    ClockList::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    if app.show_picker {
        CityPickerDialog::render(f, app);
    }

    if app.editing_time {
        TimeEditDialog::render(f, app);
    }

    if app.delete_confirmation.is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    // Error messages sit above whichever dialog produced them
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
