//! Clock list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::constants::{CLOCK_LIST_TITLE, EMPTY_LIST_MESSAGE};

/// Clock list component: one row per selected city, alphabetical by
/// timezone identifier.
pub struct ClockList;

impl ClockList {
    /// Render the clock list
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let format_marker = if app.engine.use_24_hour() { "24h" } else { "12h" };
        let title = format!("{CLOCK_LIST_TITLE} ({format_marker})");

        let rows = app.rows();
        if rows.is_empty() {
            let empty_list = List::new(vec![ListItem::new(EMPTY_LIST_MESSAGE)]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );

            f.render_stateful_widget(empty_list, area, &mut app.list_state.clone());
        } else {
            let items: Vec<ListItem> = rows
                .iter()
                .map(|(_, name, time)| Self::create_city_item(name, time))
                .collect();

            let clock_list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title)
                        .title_alignment(Alignment::Center),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );

            f.render_stateful_widget(clock_list, area, &mut app.list_state.clone());
        }
    }

    /// Create a single city row: name on the left, formatted time in blue
    fn create_city_item<'a>(name: &'a str, time: &'a str) -> ListItem<'a> {
        let line = Line::from(vec![
            Span::styled(
                format!("{name:<16}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(time, Style::default().fg(Color::Blue)),
        ]);

        ListItem::new(line)
    }
}
