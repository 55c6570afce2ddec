// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file feeder.
//!
//! This module provides a feeder that reads a nested configuration tree from a
//! YAML document.

use crate::adapters::file::{default_location, read_config_file};
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::{ConfigParser, Feeder};
use std::path::{Path, PathBuf};

/// YAML parser implementation.
///
/// Mapping keys that are numbers or booleans are converted to their string form.
/// Other non-string keys are skipped. YAML tags are dropped and the tagged value
/// is kept.
///
/// # Examples
///
/// ```rust
/// use feedcfg::adapters::YamlParser;
/// use feedcfg::domain::ConfigValue;
/// use feedcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let map = parser.parse(yaml_content).unwrap();
/// let database = map["database"].as_mapping().unwrap();
/// assert_eq!(database["port"], ConfigValue::from(5432));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML mapping key to a string key.
    fn key_string(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ConfigValue::null(),
            serde_yaml::Value::Bool(b) => b.into(),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => n.as_f64().map(ConfigValue::from).unwrap_or_default(),
            },
            serde_yaml::Value::String(s) => s.into(),
            serde_yaml::Value::Sequence(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut result = ConfigMap::new();
                for (key, val) in map {
                    match YamlParser::key_string(&key) {
                        Some(key) => {
                            result.insert(key, ConfigValue::from(val));
                        }
                        None => tracing::debug!("Skipping YAML mapping entry with non-scalar key"),
                    }
                }
                ConfigValue::Mapping(result)
            }
            serde_yaml::Value::Tagged(tagged) => ConfigValue::from(tagged.value),
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigMap> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match ConfigValue::from(value) {
            ConfigValue::Mapping(map) => Ok(map),
            // An empty document is an empty configuration
            ConfigValue::Scalar(crate::domain::Scalar::Null) => Ok(ConfigMap::new()),
            other => Err(ConfigError::ParseError {
                message: format!("YAML root must be a mapping, found {}", other.kind()),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Feeder for YAML files.
///
/// The file is read when the store is built, so a missing or malformed file
/// surfaces as a `FeedError` from the store.
///
/// # Examples
///
/// ```rust,no_run
/// use feedcfg::adapters::YamlFileFeeder;
///
/// // Load from a specific file
/// let feeder = YamlFileFeeder::new("/path/to/config.yaml");
///
/// // Load from default OS location
/// let feeder = YamlFileFeeder::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileFeeder {
    /// Path to the YAML file
    file_path: PathBuf,
    parser: YamlParser,
}

impl YamlFileFeeder {
    /// Creates a feeder for the YAML file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser: YamlParser::new(),
        }
    }

    /// Creates a feeder for `config.yaml` in the OS-appropriate config directory.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates a feeder for a custom file name in the default location.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use feedcfg::adapters::YamlFileFeeder;
    ///
    /// let feeder = YamlFileFeeder::with_filename("myapp", "com.example", "settings.yaml").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let path = default_location(app_name, qualifier, filename, "yaml-file")?;
        Ok(Self::new(path))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl Feeder for YamlFileFeeder {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn feed(&self) -> Result<ConfigMap> {
        let content = read_config_file(&self.file_path, self.name())?;
        self.parser.parse(&content)
    }
}
