//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application
pub const APP_TITLE: &str = "World Clocks";

// Time rendering patterns (24-hour and 12-hour with AM/PM marker)
pub const TIME_FORMAT_24H: &str = "%H:%M, %b %-d, %Y";
pub const TIME_FORMAT_12H: &str = "%-I:%M %p, %b %-d, %Y";

// Wall-clock pattern accepted by the time editor
pub const TIME_EDIT_FORMAT: &str = "%Y-%m-%d %H:%M";

// UI text
pub const CLOCK_LIST_TITLE: &str = "🕐 Cities";
pub const PICKER_TITLE: &str = " Select Cities ";
pub const TIME_EDIT_TITLE: &str = " Select Time ";
pub const EMPTY_LIST_MESSAGE: &str = "No cities selected. Press 'a' to add a city.";
pub const STATUS_SHORTCUTS: &str = "a: add city • Enter: edit time • f: 12/24h • d: delete • ?: help • q: quit";

// Error messages
pub const ERROR_INVALID_TIME: &str = "❌ Invalid time, expected YYYY-MM-DD HH:MM";

// Refresh interval bounds (milliseconds)
pub const REFRESH_INTERVAL_MIN_MS: u64 = 50;
pub const REFRESH_INTERVAL_MAX_MS: u64 = 10_000;
pub const REFRESH_INTERVAL_DEFAULT_MS: u64 = 250;

// Config generation
pub const CONFIG_GENERATED: &str = "✅ Default configuration written to";
