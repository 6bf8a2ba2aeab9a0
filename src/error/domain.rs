//! Domain-specific error types using `thiserror`.

use thiserror::Error;

pub use crate::{config::SettingsError, i18n::CatalogError};

/// UI-related errors.
#[derive(Error, Debug)]
pub enum UiError {
    /// GTK/Libadwaita initialization error.
    #[error("UI initialization error: {0}")]
    InitializationError(String),
    /// The application exited with a failure status.
    #[error("Application exited with status {0}")]
    ExitStatus(i32),
}
