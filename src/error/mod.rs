//! Error handling using `thiserror` and `anyhow`.
//!
//! Domain-specific error types live next to the code that raises them and
//! are re-exported here. Operational errors are propagated with `anyhow`
//! context and reported through `tracing`.

pub mod domain;
pub mod operational;

pub use {
    domain::{CatalogError, SettingsError, UiError},
    operational::{ErrorReporter, ResultExt},
};
