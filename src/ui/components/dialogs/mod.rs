//! Modal dialog components

pub mod city_picker_dialog;
pub mod common;
pub mod delete_confirmation_dialog;
pub mod error_dialog;
pub mod time_edit_dialog;

pub use city_picker_dialog::CityPickerDialog;
pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_dialog::ErrorDialog;
pub use time_edit_dialog::TimeEditDialog;
