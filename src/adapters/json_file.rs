// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file feeder.
//!
//! This module provides a feeder that reads a nested configuration tree from a
//! JSON document.

use crate::adapters::file::{default_location, read_config_file};
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::{ConfigParser, Feeder};
use std::path::{Path, PathBuf};

/// JSON parser implementation.
///
/// Integers that fit an `i64` are kept as integers, all other numbers become
/// floats. The document root must be an object.
///
/// # Examples
///
/// ```rust
/// use feedcfg::adapters::JsonParser;
/// use feedcfg::domain::ConfigValue;
/// use feedcfg::ports::ConfigParser;
///
/// let parser = JsonParser::new();
/// let map = parser.parse(r#"{"numbers": [1, 2, 3]}"#).unwrap();
/// assert_eq!(map["numbers"], ConfigValue::from(vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<ConfigMap> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        match ConfigValue::from(value) {
            ConfigValue::Mapping(map) => Ok(map),
            other => Err(ConfigError::ParseError {
                message: format!("JSON root must be an object, found {}", other.kind()),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Feeder for JSON files.
///
/// The file is read when the store is built, not when the feeder is created,
/// so a missing or malformed file surfaces as a `FeedError` from the store.
///
/// # Examples
///
/// ```rust,no_run
/// use feedcfg::adapters::JsonFileFeeder;
/// use feedcfg::ports::Feeder;
///
/// let feeder = JsonFileFeeder::new("/etc/myapp/config.json");
/// let map = feeder.feed().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileFeeder {
    /// Path to the JSON file
    file_path: PathBuf,
    parser: JsonParser,
}

impl JsonFileFeeder {
    /// Creates a feeder for the JSON file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser: JsonParser::new(),
        }
    }

    /// Creates a feeder for `config.json` in the OS-appropriate config directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let path = default_location(app_name, qualifier, "config.json", "json-file")?;
        Ok(Self::new(path))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Feeder for JsonFileFeeder {
    fn name(&self) -> &str {
        "json-file"
    }

    fn feed(&self) -> Result<ConfigMap> {
        let content = read_config_file(&self.file_path, self.name())?;
        self.parser.parse(&content)
    }
}
