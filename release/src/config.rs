//! Instance configuration
//!
//! Configuration is an ordered map of option names to values. Two keys are
//! understood by the library:
//!
//! - `search_path`: list of directories to search, replacing
//!   [`DEFAULT_SEARCH_PATH`]
//! - `osr_path`: the located file, written once when the instance is built
//!
//! Every other key is kept as-is so callers can stash their own metadata.

use crate::paths::DEFAULT_SEARCH_PATH;
use crate::{OsReleaseError, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Key holding the directory search list
pub const SEARCH_PATH_KEY: &str = "search_path";

/// Key holding the resolved os-release file path
pub const OSR_PATH_KEY: &str = "osr_path";

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::List(_) => None,
        }
    }

    /// List content, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::Text(_) => None,
            ConfigValue::List(items) => Some(items),
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Text(s) => write!(f, "{}", s),
            ConfigValue::List(items) => write!(f, "{}", items.join(":")),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

impl From<&[&str]> for ConfigValue {
    fn from(items: &[&str]) -> Self {
        ConfigValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// Configuration map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    values: IndexMap<String, ConfigValue>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the search path
    pub fn with_search_path<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            SEARCH_PATH_KEY.to_string(),
            ConfigValue::List(dirs.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Set a caller-defined option
    ///
    /// Fails with a usage error for the same keys as [`Config::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Get an option
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Set an option, returning the previous value.
    ///
    /// `osr_path` belongs to the library and cannot be written, and
    /// `search_path` only accepts a list.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<Option<ConfigValue>> {
        let key = key.into();
        let value = value.into();
        validate_write(&key, &value)?;
        Ok(self.values.insert(key, value))
    }

    /// Effective search path: the configured list, or the defaults
    pub fn search_path(&self) -> Vec<String> {
        match self.values.get(SEARCH_PATH_KEY).and_then(ConfigValue::as_list) {
            Some(dirs) => dirs.to_vec(),
            None => DEFAULT_SEARCH_PATH.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Iterate over all options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn record_osr_path(&mut self, path: String) {
        self.values
            .insert(OSR_PATH_KEY.to_string(), ConfigValue::Text(path));
    }
}

/// Check a caller write against the keys the library owns
fn validate_write(key: &str, value: &ConfigValue) -> Result<()> {
    match key {
        OSR_PATH_KEY => Err(OsReleaseError::Usage(format!(
            "'{}' is set by the library and is read-only",
            OSR_PATH_KEY
        ))),
        SEARCH_PATH_KEY if value.as_list().is_none() => Err(OsReleaseError::Usage(format!(
            "'{}' must be a list of directories",
            SEARCH_PATH_KEY
        ))),
        _ => Ok(()),
    }
}
