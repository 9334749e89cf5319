//! Time edit dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    widgets::Clear,
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::TIME_EDIT_TITLE;

/// Wall-clock editor for one city. The committed reading propagates to
/// every displayed city as the same moment.
pub struct TimeEditDialog;

impl TimeEditDialog {
    /// Render the time edit dialog
    pub fn render(f: &mut Frame, app: &App) {
        let dialog_area = LayoutManager::centered_rect_lines(50, 7, f.area());
        f.render_widget(Clear, dialog_area);

        let city_name = app
            .edit_identifier
            .as_deref()
            .map(|identifier| app.registry.lookup(identifier).unwrap_or(identifier).to_string())
            .unwrap_or_default();
        let title = format!("{TIME_EDIT_TITLE}- {city_name} ");

        let dialog_block = create_dialog_block(&title, Color::Cyan);
        let inner_area = dialog_block.inner(dialog_area);
        f.render_widget(dialog_block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        // Input field with the naive wall-clock reading
        let input = create_input_paragraph(&app.edit_buffer, "Local time (YYYY-MM-DD HH:MM)");
        f.render_widget(input, chunks[0]);

        // Instructions
        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
