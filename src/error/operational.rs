//! Error context and reporting for failures outside the preferences model.

use std::error::Error as StdError;

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::error,
};

/// Attaches a human-readable step to an error before it leaves the binary.
pub trait ResultExt<T> {
    /// Wraps the error with `context`. The original error stays in the
    /// cause chain.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn add_context(self, context: &'static str) -> AnyhowResult<T> {
        self.context(context)
    }
}

/// Logs failures that are handled where they occur instead of propagated.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Logs a failed operation with its full cause chain.
    pub fn error(error: impl Into<Error>, context: &str) {
        let error = error.into();
        error!(context = context, error = %format!("{error:#}"), "Operation failed");
    }
}
