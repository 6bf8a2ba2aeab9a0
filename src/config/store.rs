//! Hierarchical settings persistence with XDG Base Directory compliance.
//!
//! Settings are stored as a flat JSON object whose keys are `/`-separated
//! paths such as `log/fontsize`. Values keep the type they were written
//! with, but readers must be prepared to coerce text into numbers or
//! booleans, since hand-edited files and older versions store everything
//! as strings.

use std::{
    collections::BTreeMap,
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    num::IntErrorKind::{NegOverflow, PosOverflow},
    path::{Path, PathBuf},
};

use {
    parking_lot::RwLock,
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, Value, from_str, to_string_pretty},
    thiserror::Error,
    tracing::{debug, warn},
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// A single stored value.
///
/// Deserialization tries the variants in declaration order, so `300`
/// becomes `Int`, `9.0` becomes `Float` and `"300"` stays `Text`. Anything
/// else (`null`, arrays, objects) is kept as `Other` so one odd entry never
/// makes the whole file unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl SettingValue {
    /// Coerces the value to an integer.
    ///
    /// Floats are truncated toward zero. Text must parse as an integer;
    /// integer text beyond the `i64` range saturates so range clamping
    /// still applies to it.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for booleans, non-scalar values
    /// and text that is not an integer.
    pub fn to_int(&self) -> Result<i64, SettingsError> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Float(value) if value.is_finite() => Ok(value.trunc() as i64),
            Self::Text(text) => match text.trim().parse::<i64>() {
                Ok(value) => Ok(value),
                Err(error) if *error.kind() == PosOverflow => Ok(i64::MAX),
                Err(error) if *error.kind() == NegOverflow => Ok(i64::MIN),
                Err(_) => Err(SettingsError::InvalidValue {
                    reason: format!("{text:?} is not an integer"),
                }),
            },
            other => Err(SettingsError::InvalidValue {
                reason: format!("{other:?} is not an integer"),
            }),
        }
    }

    /// Coerces the value to a float.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for booleans, non-scalar values
    /// and text that is not a finite number.
    pub fn to_float(&self) -> Result<f64, SettingsError> {
        let parsed = match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Bool(_) | Self::Other(_) => None,
        };

        parsed
            .filter(|value| value.is_finite())
            .ok_or_else(|| SettingsError::InvalidValue {
                reason: format!("{self:?} is not a number"),
            })
    }

    /// Returns the value as display text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Other(value) => value.to_string(),
        }
    }

    /// Whether this value is one of the stored representations of "false".
    ///
    /// Only boolean `false` and the exact text `"false"` qualify.
    #[must_use]
    pub fn is_false_marker(&self) -> bool {
        matches!(self, Self::Bool(false)) || matches!(self, Self::Text(text) if text == "false")
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Handles loading and saving of the settings file.
#[derive(Debug)]
pub struct SettingsStore {
    /// Thread-safe key/value storage, keyed by full path.
    values: RwLock<BTreeMap<String, SettingValue>>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsStore {
    /// Opens the store at the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings file exists but cannot be read.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Opens the store at a custom config path (for testing).
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the config directory cannot be created or
    /// the existing file cannot be read. A file that is not a JSON object is
    /// logged and treated as empty.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let values = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents).unwrap_or_else(|e| {
                warn!(
                    "Unreadable settings file {:?}, starting empty: {}",
                    config_path, e
                );
                BTreeMap::new()
            })
        } else {
            debug!("No settings file yet, starting empty: {:?}", config_path);
            BTreeMap::new()
        };

        Ok(Self {
            values: RwLock::new(values),
            config_path,
        })
    }

    /// Gets the configuration file path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns a handle scoped to `prefix`.
    ///
    /// Prefixes may themselves contain `/`, e.g. `musicview/magnifier`.
    #[must_use]
    pub fn group(&self, prefix: &str) -> SettingsGroup<'_> {
        SettingsGroup {
            store: self,
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    /// Reads the value stored under a full key path.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.read().get(key).cloned()
    }

    /// Stores a value under a full key path. The change is kept in memory
    /// until [`SettingsStore::sync`] is called.
    pub fn set_value(&self, key: &str, value: impl Into<SettingValue>) {
        self.values.write().insert(key.to_string(), value.into());
    }

    /// Writes all settings to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings cannot be serialized or written.
    pub fn sync(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.values.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// A view of the store restricted to one namespace.
#[derive(Debug, Clone)]
pub struct SettingsGroup<'a> {
    store: &'a SettingsStore,
    prefix: String,
}

impl<'a> SettingsGroup<'a> {
    /// The namespace this group is scoped to.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns a nested group below this one.
    #[must_use]
    pub fn group(&self, prefix: &str) -> SettingsGroup<'a> {
        SettingsGroup {
            store: self.store,
            prefix: self.key(prefix.trim_matches('/')),
        }
    }

    /// Reads `key` within this group.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<SettingValue> {
        self.store.value(&self.key(key))
    }

    /// Stores `value` under `key` within this group.
    pub fn set_value(&self, key: &str, value: impl Into<SettingValue>) {
        self.store.set_value(&self.key(key), value);
    }

    fn key(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}/{key}", self.prefix)
        }
    }
}

/// Ensures proper XDG directory usage for the config file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut path = get_config_dir();
    path.push("settings.json");
    path
}

/// Gets the application's config directory.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("notaprefs");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::{
        fs::write,
        io::{Error, ErrorKind::NotFound},
    };

    use {
        serde_json::{Value, from_str, json},
        tempfile::TempDir,
    };

    use crate::config::store::{SettingValue, SettingsError, SettingsStore};

    #[test]
    fn test_setting_value_untagged_deserialization() {
        let value: SettingValue = from_str("300").unwrap();
        assert_eq!(value, SettingValue::Int(300));

        let value: SettingValue = from_str("9.0").unwrap();
        assert_eq!(value, SettingValue::Float(9.0));

        let value: SettingValue = from_str("false").unwrap();
        assert_eq!(value, SettingValue::Bool(false));

        let value: SettingValue = from_str("\"300\"").unwrap();
        assert_eq!(value, SettingValue::Text("300".to_string()));

        let value: SettingValue = from_str("null").unwrap();
        assert_eq!(value, SettingValue::Other(Value::Null));

        let value: SettingValue = from_str("[1]").unwrap();
        assert_eq!(value, SettingValue::Other(json!([1])));
    }

    #[test]
    fn test_non_scalar_values_never_coerce() {
        let null = SettingValue::Other(Value::Null);
        assert!(null.to_int().is_err());
        assert!(null.to_float().is_err());
        assert!(!null.is_false_marker());
        assert_eq!(null.to_text(), "null");

        let list = SettingValue::Other(json!([1, "a"]));
        assert!(list.to_int().is_err());
        assert_eq!(list.to_text(), r#"[1,"a"]"#);
    }

    #[test]
    fn test_non_scalar_entries_do_not_spoil_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        write(
            &path,
            r#"{"musicview/magnifier/size": null, "log/rawview": [1], "musicview/magnifier/scale": 400}"#,
        )
        .unwrap();

        let store = SettingsStore::with_config_path(path).unwrap();

        assert_eq!(
            store.value("musicview/magnifier/scale"),
            Some(SettingValue::Int(400))
        );
        assert_eq!(
            store.value("musicview/magnifier/size"),
            Some(SettingValue::Other(Value::Null))
        );
        assert_eq!(
            store.value("log/rawview"),
            Some(SettingValue::Other(json!([1])))
        );
    }

    #[test]
    fn test_unparseable_file_opens_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        write(&path, "{ not json").unwrap();

        let store = SettingsStore::with_config_path(path.clone()).unwrap();
        assert_eq!(store.value("log/fontsize"), None);

        // The next save replaces the broken file.
        store.set_value("log/fontsize", 10.0);
        store.sync().unwrap();
        let reopened = SettingsStore::with_config_path(path).unwrap();
        assert_eq!(reopened.value("log/fontsize"), Some(SettingValue::Float(10.0)));
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(SettingValue::Int(450).to_int().unwrap(), 450);
        assert_eq!(SettingValue::from(" 600 ").to_int().unwrap(), 600);
        assert_eq!(SettingValue::Float(350.9).to_int().unwrap(), 350);
        assert!(SettingValue::from("bogus").to_int().is_err());
        assert!(SettingValue::from("12.5").to_int().is_err());
        assert!(SettingValue::Bool(true).to_int().is_err());
    }

    #[test]
    fn test_integer_text_beyond_i64_saturates() {
        assert_eq!(
            SettingValue::from("99999999999999999999").to_int().unwrap(),
            i64::MAX
        );
        assert_eq!(
            SettingValue::from("-99999999999999999999").to_int().unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(SettingValue::from("12.5").to_float().unwrap(), 12.5);
        assert_eq!(SettingValue::Int(10).to_float().unwrap(), 10.0);
        assert!(SettingValue::from("NaN").to_float().is_err());
        assert!(SettingValue::from("large").to_float().is_err());
    }

    #[test]
    fn test_false_markers() {
        assert!(SettingValue::Bool(false).is_false_marker());
        assert!(SettingValue::from("false").is_false_marker());
        assert!(!SettingValue::from("False").is_false_marker());
        assert!(!SettingValue::from("0").is_false_marker());
        assert!(!SettingValue::Bool(true).is_false_marker());
    }

    #[test]
    fn test_group_scoping() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::with_config_path(temp_dir.path().join("settings.json")).unwrap();

        let magnifier = store.group("musicview").group("magnifier");
        assert_eq!(magnifier.prefix(), "musicview/magnifier");
        magnifier.set_value("size", 450_i64);

        assert_eq!(
            store.value("musicview/magnifier/size"),
            Some(SettingValue::Int(450))
        );
        assert_eq!(
            store.group("musicview/magnifier/").value("size"),
            Some(SettingValue::Int(450))
        );
        assert_eq!(store.group("log").value("size"), None);
    }

    #[test]
    fn test_sync_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let store = SettingsStore::with_config_path(path.clone()).unwrap();
        let log = store.group("log");
        log.set_value("fontfamily", "Serif");
        log.set_value("fontsize", 12.5);
        log.set_value("rawview", false);
        store.sync().unwrap();

        let reopened = SettingsStore::with_config_path(path).unwrap();
        let log = reopened.group("log");
        assert_eq!(log.value("fontfamily"), Some(SettingValue::from("Serif")));
        assert_eq!(log.value("fontsize"), Some(SettingValue::Float(12.5)));
        assert_eq!(log.value("rawview"), Some(SettingValue::Bool(false)));
    }

    #[test]
    fn test_unsynced_changes_are_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let store = SettingsStore::with_config_path(path.clone()).unwrap();
        store.set_value("log/fontsize", 20.0);

        let reopened = SettingsStore::with_config_path(path).unwrap();
        assert_eq!(reopened.value("log/fontsize"), None);
    }

    #[test]
    fn test_settings_error_display() {
        let io_error = Error::new(NotFound, "File not found");
        let settings_error = SettingsError::IoError(io_error);
        assert!(settings_error.to_string().contains("IO error"));

        let invalid_value_error = SettingsError::InvalidValue {
            reason: "test reason".to_string(),
        };
        assert_eq!(
            invalid_value_error.to_string(),
            "Invalid settings value: test reason"
        );
    }
}
