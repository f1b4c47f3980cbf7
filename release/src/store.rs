//! Attribute storage built from os-release content

use crate::parser::{parse_line, ParsedLine};
use crate::{OsReleaseError, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Folded attribute name to raw value, in file order
pub type AttributeSet = IndexMap<String, String>;

/// Attributes read from one source together with the lines that were skipped
/// as malformed
#[derive(Debug, Default)]
pub struct AttributeStore {
    pub attrs: AttributeSet,
    pub warnings: Vec<OsReleaseError>,
}

impl AttributeStore {
    /// Read attributes from the file at `path`.
    ///
    /// An open or read failure yields an empty store: the file was located a
    /// moment ago, so losing it now is treated like finding nothing.
    pub fn build(path: &Path) -> Self {
        match Self::read(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read attributes from the file at `path`, propagating I/O errors
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Parse attributes from in-memory content
    pub fn parse_str(text: &str) -> Self {
        // Reading from a byte slice of valid UTF-8 cannot fail.
        Self::from_reader(text.as_bytes(), "<memory>").unwrap_or_default()
    }

    fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut store = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                ParsedLine::Skip => {}
                ParsedLine::Assignment { key, value } => {
                    store.attrs.insert(key, value);
                }
                ParsedLine::Malformed => {
                    tracing::warn!("{}:{}: ignoring malformed line: {}", origin, idx + 1, line);
                    store.warnings.push(OsReleaseError::MalformedLine {
                        line: idx + 1,
                        text: line,
                    });
                }
            }
        }

        Ok(store)
    }
}
