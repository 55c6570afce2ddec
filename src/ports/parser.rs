// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning configuration file content (JSON, YAML, ...) into a value tree.

use crate::domain::{ConfigMap, Result};

/// A trait for parsing configuration files.
///
/// Parsers keep the nesting of the source document: a JSON object becomes a
/// mapping, an array becomes a sequence. The document root must be a mapping.
///
/// File-based feeders select a parser by extension through
/// [`supported_extensions`](ConfigParser::supported_extensions).
///
/// # Examples
///
/// ```rust
/// use feedcfg::ports::ConfigParser;
/// use feedcfg::domain::{ConfigMap, ConfigValue, Result};
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<ConfigMap> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim().to_string(), ConfigValue::from(v.trim())))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let map = KeyValueParser.parse("host = localhost").unwrap();
/// assert_eq!(map["host"], ConfigValue::from("localhost"));
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses configuration content into a nested mapping.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigMap)` - The parsed document
    /// * `Err(ConfigError)` - The content is malformed or its root is not a mapping
    fn parse(&self, content: &str) -> Result<ConfigMap>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if this parser handles files with the given extension.
    ///
    /// The comparison is case-insensitive.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
