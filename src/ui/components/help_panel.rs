//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &mut App) {
        // Adaptive help panel size based on terminal size
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
HOROLOGIST - Terminal World Clock
=================================

NAVIGATION
----------
j/k or ↑↓   Navigate cities (down/up)
Enter / e   Edit the selected city's time
Esc         Cancel action or close dialogs

CITY MANAGEMENT
---------------
a           Add cities (searchable picker)
d           Delete selected city (with confirmation)

DISPLAY
-------
f           Toggle 12/24-hour format

GENERAL CONTROLS
----------------
?           Toggle help panel
q           Quit application

TIME EDITING
------------
The editor takes the city's local wall-clock reading as
YYYY-MM-DD HH:MM. Saving re-expresses the reading as one
shared moment and every city shows it in its own timezone.
Cities without an edited time always show the current time.

Press 'Esc' or '?' to close this help panel
";

        // Apply scroll offset to the content
        let lines: Vec<&str> = help_content.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize; // Account for borders

        // Clamp scroll offset to valid range
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = app.help_scroll_offset.min(max_scroll);

        // Extract visible portion of content
        let visible_lines: Vec<&str> = lines.iter().skip(scroll_offset).take(visible_height).copied().collect();

        let help_paragraph = Paragraph::new(visible_lines.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help_paragraph, help_area);
    }
}
