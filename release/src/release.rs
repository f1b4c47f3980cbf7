//! Query surface over loaded os-release data

use crate::attrs::{fold_case, is_standard, STANDARD_ATTRS};
use crate::config::{Config, ConfigValue};
use crate::paths::{self, DEFAULT_SEARCH_PATH};
use crate::store::{AttributeSet, AttributeStore};
use crate::{OsReleaseError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Loaded os-release data.
///
/// Attributes are fixed once loaded. Every standardized attribute has a
/// typed accessor (`id()`, `version_id()`, ...) returning `None` when the
/// file does not set it; any other key is reachable through [`get`].
///
/// Use [`OsRelease::instance`] for the process-wide copy, or
/// [`OsRelease::load`] for a standalone one.
///
/// [`get`]: OsRelease::get
#[derive(Debug, Serialize)]
pub struct OsRelease {
    /// Located file, if any
    #[serde(rename = "osr_path")]
    path: Option<PathBuf>,
    /// Folded name to value
    attrs: AttributeSet,
    #[serde(skip)]
    warnings: Vec<OsReleaseError>,
    #[serde(skip)]
    config: RwLock<Config>,
}

impl OsRelease {
    /// Locate and read os-release using `config`.
    ///
    /// Not finding a file is not an error; the result simply has no
    /// attributes.
    pub fn load(mut config: Config) -> Self {
        let path = paths::resolve(&config.search_path());

        let store = match &path {
            Some(path) => {
                tracing::debug!("Using os-release at {}", path.display());
                config.record_osr_path(path.display().to_string());
                AttributeStore::build(path)
            }
            None => {
                tracing::debug!(
                    "No os-release found in search path: {:?}",
                    config.search_path()
                );
                AttributeStore::default()
            }
        };

        Self {
            path,
            attrs: store.attrs,
            warnings: store.warnings,
            config: RwLock::new(config),
        }
    }

    /// Build from in-memory os-release content, without touching the
    /// filesystem
    pub fn parse_str(text: &str) -> Self {
        let store = AttributeStore::parse_str(text);
        Self {
            path: None,
            attrs: store.attrs,
            warnings: store.warnings,
            config: RwLock::new(Config::default()),
        }
    }

    /// Value of attribute `name`, matched case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(&fold_case(name)).map(String::as_str)
    }

    /// Like [`get`](OsRelease::get), but rejects names that are neither in
    /// the file nor standardized.
    pub fn get_strict(&self, name: &str) -> Result<Option<&str>> {
        match self.get(name) {
            Some(value) => Ok(Some(value)),
            None if is_standard(name) => Ok(None),
            None => Err(OsReleaseError::UnknownAttribute(name.to_string())),
        }
    }

    /// Whether the file sets attribute `name`
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(&fold_case(name))
    }

    /// Folded names of every attribute in the file, in file order
    pub fn found_attrs(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// All attributes in file order
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Path of the file the attributes came from
    pub fn osrelease_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether an os-release file was found
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Malformed lines skipped while reading
    pub fn warnings(&self) -> &[OsReleaseError] {
        &self.warnings
    }

    /// Distribution family: the first `ID_LIKE` entry, else `ID`
    pub fn platform(&self) -> Option<&str> {
        self.id_like_list()
            .into_iter()
            .next()
            .or_else(|| self.id())
    }

    /// `ID_LIKE` split into its identifiers
    pub fn id_like_list(&self) -> Vec<&str> {
        self.id_like()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Read a configuration option
    pub fn config(&self, key: &str) -> Option<ConfigValue> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Write a configuration option, returning the previous value.
    ///
    /// Parsed attributes are unaffected. Writing `search_path` after load
    /// only changes what is recorded; the instance is never re-read.
    pub fn set_config(
        &self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Result<Option<ConfigValue>> {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, value)
    }

    /// Snapshot of the whole configuration
    pub fn config_snapshot(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Standardized attribute names
    pub fn standard_attr_names() -> &'static [&'static str] {
        STANDARD_ATTRS
    }

    /// Compiled-in search directories
    pub fn default_search_path() -> &'static [&'static str] {
        DEFAULT_SEARCH_PATH
    }
}
