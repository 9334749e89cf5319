//! City picker dialog component

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::PICKER_TITLE;

/// Searchable city picker dialog. Already-selected cities carry a checkmark;
/// toggling a city adds or removes its timezone entry.
pub struct CityPickerDialog;

impl CityPickerDialog {
    /// Render the city picker dialog
    pub fn render(f: &mut Frame, app: &App) {
        let picker_area = LayoutManager::centered_rect(60, 70, f.area());
        f.render_widget(Clear, picker_area);

        let dialog_block = create_dialog_block(PICKER_TITLE, Color::Cyan);
        let inner_area = dialog_block.inner(picker_area);
        f.render_widget(dialog_block, picker_area);

        let chunks = LayoutManager::picker_layout(inner_area);

        // Search input
        let search_input = create_input_paragraph(&app.picker_query, "Search Cities");
        f.render_widget(search_input, chunks[0]);

        // Filtered city rows
        let matches = app.picker_matches();
        let items: Vec<ListItem> = matches
            .iter()
            .map(|city| {
                let selected = app.engine.contains(&city.timezone);
                let marker = if selected { "✔ " } else { "  " };
                let marker_style = Style::default().fg(Color::Blue);
                let name_style = if selected {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::styled(city.name.clone(), name_style),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !matches.is_empty() {
            list_state.select(Some(app.picker_index.min(matches.len() - 1)));
        }

        let city_list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(city_list, chunks[1], &mut list_state);

        // Instructions
        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_TOGGLE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_DONE,
        ]);
        f.render_widget(instructions, chunks[2]);
    }
}
