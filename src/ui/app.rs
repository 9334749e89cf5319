//! Application state and business logic

use crate::config::Config;
use crate::constants::{ERROR_INVALID_TIME, TIME_EDIT_FORMAT};
use crate::registry::{City, CityRegistry};
use crate::sync::TimeSyncEngine;
use chrono::NaiveDateTime;
use ratatui::widgets::ListState;

/// Application state
pub struct App {
    pub should_quit: bool,
    pub engine: TimeSyncEngine,
    pub registry: CityRegistry,
    pub selected_index: usize,
    pub list_state: ListState,
    pub error_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
    // City picker
    pub show_picker: bool,
    pub picker_query: String,
    pub picker_index: usize,
    // Time editor
    pub editing_time: bool,
    pub edit_identifier: Option<String>,
    pub edit_buffer: String,
    // Identifier to delete if confirmed
    pub delete_confirmation: Option<String>,
}

impl App {
    /// Create application state from the configuration, seeding the engine
    /// with the configured default cities (each set to "now").
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let registry = CityRegistry::new();
        let mut engine = TimeSyncEngine::new(config.ui.use_24_hour_format);

        for name in &config.ui.default_cities {
            match registry.cities().iter().find(|city| city.name == *name) {
                Some(city) => engine.add_city(&city.timezone),
                None => log::warn!("default city {name:?} not found in catalog, skipping"),
            }
        }

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            engine,
            registry,
            selected_index: 0,
            list_state,
            error_message: None,
            show_help: false,
            help_scroll_offset: 0,
            show_picker: false,
            picker_query: String::new(),
            picker_index: 0,
            editing_time: false,
            edit_identifier: None,
            edit_buffer: String::new(),
            delete_confirmation: None,
        }
    }

    /// Displayed rows in alphabetical identifier order: (identifier, city
    /// name, formatted time). Identifiers without a catalog entry show the
    /// identifier itself.
    #[must_use]
    pub fn rows(&self) -> Vec<(String, String, String)> {
        self.engine
            .identifiers()
            .map(|identifier| {
                let name = self.registry.lookup(identifier).unwrap_or(identifier).to_string();
                let time = self.engine.format_time(identifier);
                (identifier.to_string(), name, time)
            })
            .collect()
    }

    /// Identifier of the currently selected row, if any.
    #[must_use]
    pub fn selected_identifier(&self) -> Option<String> {
        self.engine.identifiers().nth(self.selected_index).map(str::to_string)
    }

    pub fn next_city(&mut self) {
        if !self.engine.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.engine.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_city(&mut self) {
        if !self.engine.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.engine.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Keep the selection valid after entries were added or removed.
    fn clamp_selection(&mut self) {
        if self.selected_index >= self.engine.len() {
            self.selected_index = self.engine.len().saturating_sub(1);
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn toggle_format(&mut self) {
        self.engine.toggle_format();
    }

    // --- City picker ---

    /// Open the city picker with a fresh search
    pub fn open_picker(&mut self) {
        self.show_picker = true;
        self.picker_query.clear();
        self.picker_index = 0;
    }

    pub fn close_picker(&mut self) {
        self.show_picker = false;
        self.picker_query.clear();
        self.picker_index = 0;
        self.clamp_selection();
    }

    /// Catalog rows matching the current picker search
    #[must_use]
    pub fn picker_matches(&self) -> Vec<&City> {
        self.registry.search(&self.picker_query).collect()
    }

    pub fn picker_next(&mut self) {
        let count = self.picker_matches().len();
        if count > 0 {
            self.picker_index = (self.picker_index + 1) % count;
        }
    }

    pub fn picker_previous(&mut self) {
        let count = self.picker_matches().len();
        if count > 0 {
            self.picker_index = if self.picker_index == 0 { count - 1 } else { self.picker_index - 1 };
        }
    }

    /// Add a character to the picker search query
    pub fn add_char_to_picker_query(&mut self, c: char) {
        self.picker_query.push(c);
        self.picker_index = 0;
    }

    /// Remove the last character from the picker search query
    pub fn remove_char_from_picker_query(&mut self) {
        self.picker_query.pop();
        self.picker_index = 0;
    }

    /// Toggle the highlighted picker row: selected cities are removed,
    /// unselected ones are added with their time defaulting to "now".
    /// Cities sharing a timezone identifier toggle the same single entry.
    pub fn toggle_picker_selection(&mut self) {
        let identifier = match self.picker_matches().get(self.picker_index) {
            Some(city) => city.timezone.clone(),
            None => return,
        };

        if self.engine.contains(&identifier) {
            self.engine.remove_city(&identifier);
        } else {
            self.engine.add_city(&identifier);
        }
        self.clamp_selection();
    }

    // --- Time editor ---

    /// Open the time editor for the selected row, prefilled with that
    /// city's current wall-clock reading.
    pub fn start_edit_time(&mut self) {
        if let Some(identifier) = self.selected_identifier() {
            self.edit_buffer = self.engine.wall_clock(&identifier).format(TIME_EDIT_FORMAT).to_string();
            self.edit_identifier = Some(identifier);
            self.editing_time = true;
        }
    }

    pub fn cancel_edit_time(&mut self) {
        self.editing_time = false;
        self.edit_identifier = None;
        self.edit_buffer.clear();
    }

    /// Add a character to the time editor buffer
    pub fn add_char_to_edit_buffer(&mut self, c: char) {
        if self.editing_time {
            self.edit_buffer.push(c);
        }
    }

    /// Remove the last character from the time editor buffer
    pub fn remove_char_from_edit_buffer(&mut self) {
        if self.editing_time {
            self.edit_buffer.pop();
        }
    }

    /// Commit the edited wall-clock reading; propagates the moment to all
    /// rows. Invalid input leaves the editor open behind an error dialog.
    pub fn commit_edit_time(&mut self) {
        let Some(identifier) = self.edit_identifier.clone() else {
            return;
        };

        match NaiveDateTime::parse_from_str(self.edit_buffer.trim(), TIME_EDIT_FORMAT) {
            Ok(wall_clock) => {
                self.engine.update_time(&identifier, wall_clock);
                self.cancel_edit_time();
            }
            Err(e) => {
                log::debug!("rejected time input {:?}: {e}", self.edit_buffer);
                self.error_message = Some(ERROR_INVALID_TIME.to_string());
            }
        }
    }

    // --- Deletion ---

    /// Ask for confirmation before removing the selected city
    pub fn start_delete_city(&mut self) {
        self.delete_confirmation = self.selected_identifier();
    }

    pub fn cancel_delete_city(&mut self) {
        self.delete_confirmation = None;
    }

    /// Remove the confirmed city
    pub fn delete_city(&mut self) {
        if let Some(identifier) = self.delete_confirmation.take() {
            self.engine.remove_city(&identifier);
            self.clamp_selection();
        }
    }
}
