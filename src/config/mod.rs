//! Persistent settings storage and the value types read from it.
//!
//! This module provides the hierarchical settings store with XDG Base
//! Directory compliance and the font descriptor built from stored values.

pub mod font;
pub mod store;

pub use {
    font::FontDescriptor,
    store::{
        SettingValue, SettingsError, SettingsGroup, SettingsStore, get_config_dir,
        get_config_path,
    },
};
