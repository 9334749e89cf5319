//! Horologist - A Terminal User Interface (TUI) world clock
//!
//! This library provides a terminal-based world clock: a list of cities with
//! their current (or user-chosen) times, a 12/24-hour format toggle, a
//! searchable city picker, and a per-city time editor that propagates the
//! picked moment to every other displayed city.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`registry`] - Embedded city catalog with lookup and search
//! * [`sync`] - Time synchronization engine and timezone conversion
//! * [`ui`] - Terminal user interface components
//!
//! All mutable state (selected times, format preference) lives in an
//! explicit engine owned by the top-level [`ui::App`]; there are no global
//! singletons.

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// City catalog with display-name lookup and search
pub mod registry;

/// Time synchronization engine for cross-timezone conversion
pub mod sync;

/// Terminal user interface components and rendering
pub mod ui;

pub use registry::CityRegistry;
pub use sync::TimeSyncEngine;
