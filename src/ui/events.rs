//! Event handling and key bindings

use super::app::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle error message dialog
            if app.error_message.is_some() {
                return Ok(handle_message_dialog(key, app));
            }

            // Handle delete confirmation dialog
            if app.delete_confirmation.is_some() {
                return Ok(handle_delete_confirmation(key, app));
            }

            // Handle time editor dialog
            if app.editing_time {
                return Ok(handle_time_editing(key, app));
            }

            // Handle city picker dialog
            if app.show_picker {
                return Ok(handle_city_picker(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle normal navigation and actions
            return Ok(handle_normal_mode(key, app));
        }
    }
    Ok(false)
}

/// Handle events when an error message dialog is shown
fn handle_message_dialog(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.error_message = None;
            true
        }
        _ => false, // Ignore other keys while the message is shown
    }
}

/// Handle events when the delete confirmation dialog is open
fn handle_delete_confirmation(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            app.delete_city();
            true
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.cancel_delete_city();
            true
        }
        _ => false, // Ignore other keys during confirmation
    }
}

/// Handle events when the time editor dialog is open
fn handle_time_editing(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
            app.add_char_to_edit_buffer(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_edit_buffer();
            true
        }
        KeyCode::Enter => {
            app.commit_edit_time();
            true
        }
        KeyCode::Esc => {
            app.cancel_edit_time();
            true
        }
        _ => false,
    }
}

/// Handle events when the city picker dialog is open. Printable keys feed
/// the search field, so navigation uses arrows and selection uses Enter.
fn handle_city_picker(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Down => {
            app.picker_next();
            true
        }
        KeyCode::Up => {
            app.picker_previous();
            true
        }
        KeyCode::Enter => {
            app.toggle_picker_selection();
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_picker_query();
            true
        }
        KeyCode::Esc => {
            app.close_picker();
            true
        }
        KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
            app.add_char_to_picker_query(c);
            true
        }
        _ => false,
    }
}

/// Handle events when the help panel is open
fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        _ => false,
    }
}

/// Handle normal mode navigation and actions
fn handle_normal_mode(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.next_city();
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.previous_city();
            true
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            app.start_edit_time();
            true
        }
        KeyCode::Char('a') => {
            app.open_picker();
            true
        }
        KeyCode::Char('f') => {
            app.toggle_format();
            true
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.start_delete_city();
            true
        }
        _ => false,
    }
}
