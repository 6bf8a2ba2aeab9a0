//! GNOME HIG-compliant user interface built entirely with Libadwaita.
//!
//! This module provides the application window and the preferences dialog
//! bound to the `prefs` model.

pub mod application;
pub mod preferences;

pub use {
    application::NotaprefsApplication,
    preferences::{PreferencesDialog, ToolsPreferencesPage},
};
