//! JSON settings store.
//!
//! # Responsibility
//! - Persist small key/value settings (screenshot save directory, window
//!   options) for the UI shell and collaborators.
//!
//! # Invariants
//! - Opening a missing file creates it with an empty settings object.
//! - A malformed file loads as empty settings; the next `set` rewrites it.
//! - Every `set` is persisted immediately.

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from settings persistence.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings file error: {err}"),
            Self::Json(err) => write!(f, "settings encoding error: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Key/value settings backed by one JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Opens the settings file, creating it when missing.
    pub fn open(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&path, "{}\n")?;
        }

        let values = load_values(&path)?;
        Ok(Self { path, values })
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the string value stored under `key`, if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Stores `value` under `key` and persists the file.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> ConfigResult<()> {
        self.values.insert(key.into(), value);
        self.save()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> ConfigResult<()> {
        let rendered = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}

fn load_values(path: &Path) -> ConfigResult<Map<String, Value>> {
    let raw = fs::read_to_string(path)?;
    // A corrupt file degrades to empty settings instead of blocking startup.
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Ok(Map::new()),
    }
}
