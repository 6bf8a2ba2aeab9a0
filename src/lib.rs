//! Notaprefs - Tools preferences for a music notation editor
//!
//! Log appearance and music view magnifier preferences, persisted in a
//! hierarchical settings store. The `prefs` module models the page
//! independently of any toolkit; the `ui` module presents it with
//! Libadwaita.

pub mod config;
pub mod error;
pub mod i18n;
pub mod prefs;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{FontDescriptor, SettingValue, SettingsStore},
    error::{SettingsError, UiError},
    i18n::{Catalog, Translator, Untranslated},
    prefs::{LogTool, MusicView, PageEvent, ToolsPage},
    ui::NotaprefsApplication,
};
