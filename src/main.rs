//! Notaprefs - Tools preferences for a music notation editor
//!
//! Entry point: sets up logging, opens the settings store and runs the
//! Libadwaita application.

use std::sync::Arc;

use {
    anyhow::Result,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt},
};

use notaprefs::{NotaprefsApplication, SettingsStore, UiError, error::ResultExt};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    libadwaita::init().map_err(|e| UiError::InitializationError(e.to_string()))?;

    let store = Arc::new(SettingsStore::new().add_context("Failed to open settings store")?);
    info!("Using settings file {:?}", store.config_path());

    let status = NotaprefsApplication::new(store).run();
    if status.get() != 0 {
        return Err(UiError::ExitStatus(i32::from(status.get())).into());
    }

    Ok(())
}
