//! Message translation for display strings.
//!
//! Catalogs are JSON objects mapping message ids to translations. Messages
//! with a disambiguating context are keyed as `context\u{4}msgid`, the
//! same convention gettext uses in compiled catalogs.

use std::{
    collections::HashMap,
    env::var,
    fs::read_to_string,
    io::Error as StdError,
    path::{Path, PathBuf},
};

use {
    serde_json::{Error as SerdeJsonError, from_str},
    thiserror::Error,
    tracing::{debug, warn},
};

use crate::config::get_config_dir;

/// Separator between context and message id in catalog keys.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// Error type for catalog loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// The catalog is not a JSON object of strings.
    #[error("Invalid catalog: {0}")]
    ParseError(#[from] SerdeJsonError),
}

/// Translates display strings.
pub trait Translator {
    /// Translates `msgid`.
    fn gettext(&self, msgid: &str) -> String;

    /// Translates `msgid` within a disambiguating `context`.
    fn pgettext(&self, context: &str, msgid: &str) -> String;
}

/// Returns every message unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }

    fn pgettext(&self, _context: &str, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// A message catalog for one language.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the text is not a JSON object
    /// of strings.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            messages: from_str(json)?,
        })
    }

    /// Reads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("Loading translation catalog: {:?}", path);
        Self::from_json(&read_to_string(path)?)
    }

    /// Number of translated messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        self.messages
            .get(msgid)
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    fn pgettext(&self, context: &str, msgid: &str) -> String {
        let key = format!("{context}{CONTEXT_SEPARATOR}{msgid}");
        self.messages
            .get(&key)
            .filter(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}

/// Returns the user's language code from `LANGUAGE`, `LC_ALL` or `LANG`.
///
/// `de_DE.UTF-8` yields `de`. `C` and `POSIX` yield `None`.
#[must_use]
pub fn current_language() -> Option<String> {
    ["LANGUAGE", "LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|name| var(name).ok())
        .find_map(|value| language_code(&value))
}

fn language_code(value: &str) -> Option<String> {
    let first = value.split(':').next()?;
    let code = first.split(['_', '.', '@']).next()?.trim();

    if code.is_empty() || code == "C" || code == "POSIX" {
        None
    } else {
        Some(code.to_ascii_lowercase())
    }
}

/// Path of the catalog for `language` in the config directory.
#[must_use]
pub fn catalog_path(language: &str) -> PathBuf {
    let mut path = get_config_dir();
    path.push("translations");
    path.push(format!("{language}.json"));
    path
}

/// Loads the translator for the user's language.
///
/// Falls back to [`Untranslated`] when no language is set, no catalog is
/// installed, or the catalog is unreadable.
#[must_use]
pub fn active_translator() -> Box<dyn Translator> {
    let Some(language) = current_language() else {
        return Box::new(Untranslated);
    };

    let path = catalog_path(&language);
    if !path.exists() {
        debug!("No translation catalog for {}", language);
        return Box::new(Untranslated);
    }

    match Catalog::load(&path) {
        Ok(catalog) if catalog.is_empty() => {
            debug!("Translation catalog {:?} has no messages", path);
            Box::new(Untranslated)
        }
        Ok(catalog) => {
            debug!("Loaded {} translated messages for {}", catalog.len(), language);
            Box::new(catalog)
        }
        Err(e) => {
            warn!("Ignoring translation catalog {:?}: {}", path, e);
            Box::new(Untranslated)
        }
    }
}
