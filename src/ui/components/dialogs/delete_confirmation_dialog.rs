//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(identifier) = &app.delete_confirmation {
            let city_name = app.registry.lookup(identifier).unwrap_or(identifier);

            let confirmation_area = LayoutManager::centered_rect_lines(50, 5, f.area());
            f.render_widget(Clear, confirmation_area);

            let confirmation_text = format!("Remove {city_name}?\n\ny: confirm • n/Esc: cancel");
            let confirmation_paragraph = Paragraph::new(confirmation_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Confirm Delete ")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(confirmation_paragraph, confirmation_area);
        }
    }
}
