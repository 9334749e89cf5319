//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::STATUS_SHORTCUTS;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.show_picker {
            "Type to search • ↑↓: navigate • Enter: toggle city • Esc: done".to_string()
        } else if app.editing_time {
            "Enter: save time • Esc: cancel".to_string()
        } else {
            STATUS_SHORTCUTS.to_string()
        };

        let status_color = if app.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
