//! Reusable UI components

pub mod clock_list;
pub mod dialogs;
pub mod help_panel;
pub mod status_bar;

// Component exports
pub use clock_list::ClockList;
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
