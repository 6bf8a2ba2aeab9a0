//! Preferences dialog implementation following GNOME HIG guidelines.
//!
//! This module provides the preferences dialog hosting the Tools page and
//! the widget bindings it is built from.

#[cfg(test)]
mod tests;

pub mod dialog;
pub mod tools_page;
pub mod utils;

pub use {dialog::PreferencesDialog, tools_page::ToolsPreferencesPage};
