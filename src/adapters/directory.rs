// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory feeder.
//!
//! Every supported file in a directory becomes one top-level key named after
//! the file stem. `app.json` and `db.yaml` produce the keys `app` and `db`.

use crate::adapters::file::{file_name, read_config_file};
use crate::adapters::JsonParser;
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::{ConfigParser, Feeder};
use std::fs;
use std::path::{Path, PathBuf};

/// Feeder that loads every configuration file in a directory.
///
/// Files are read in file-name order. Files without a registered parser for
/// their extension, and subdirectories, are skipped. When two files share a
/// stem (`app.json` and `app.yaml`) the later one in name order wins.
///
/// # Examples
///
/// ```rust,no_run
/// use feedcfg::adapters::DirectoryFeeder;
/// use feedcfg::ports::Feeder;
///
/// let feeder = DirectoryFeeder::new("/etc/myapp/conf.d");
/// let map = feeder.feed().unwrap();
/// ```
pub struct DirectoryFeeder {
    dir_path: PathBuf,
    parsers: Vec<Box<dyn ConfigParser>>,
}

impl DirectoryFeeder {
    /// Creates a feeder for `path` with the JSON parser and, when the `yaml`
    /// feature is enabled, the YAML parser.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let mut parsers: Vec<Box<dyn ConfigParser>> = vec![Box::new(JsonParser::new())];
        #[cfg(feature = "yaml")]
        parsers.push(Box::new(crate::adapters::YamlParser::new()));

        Self {
            dir_path: path.as_ref().to_path_buf(),
            parsers,
        }
    }

    /// Registers an additional parser.
    ///
    /// Parsers registered later take precedence for shared extensions.
    pub fn with_parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parsers.insert(0, parser);
        self
    }

    /// Returns the directory this feeder reads.
    pub fn dir_path(&self) -> &Path {
        &self.dir_path
    }

    fn parser_for(&self, path: &Path) -> Option<&dyn ConfigParser> {
        let extension = path.extension()?.to_str()?;
        self.parsers
            .iter()
            .find(|parser| parser.supports(extension))
            .map(|parser| parser.as_ref())
    }
}

impl Feeder for DirectoryFeeder {
    fn name(&self) -> &str {
        "directory"
    }

    fn feed(&self) -> Result<ConfigMap> {
        let entries = fs::read_dir(&self.dir_path).map_err(|e| ConfigError::SourceError {
            source_name: self.name().to_string(),
            message: format!("Failed to read directory: {}", file_name(&self.dir_path)),
            source: Some(Box::new(e)),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            // `is_file` follows symlinks.
            if path.is_file() {
                paths.push(path);
            } else {
                tracing::debug!("Skipping non-file directory entry: {}", file_name(&path));
            }
        }
        paths.sort();

        let mut result = ConfigMap::new();
        for path in paths {
            let Some(parser) = self.parser_for(&path) else {
                tracing::debug!("Skipping unsupported configuration file: {}", file_name(&path));
                continue;
            };
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = read_config_file(&path, self.name())?;
            let map = parser.parse(&content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse {}: {}", file_name(&path), e),
                source: Some(Box::new(e)),
            })?;
            result.insert(stem.to_string(), ConfigValue::Mapping(map));
        }

        tracing::debug!(
            "Loaded {} configuration files from {}",
            result.len(),
            file_name(&self.dir_path)
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_feeder_keys_by_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.json"), r#"{"name": "demo", "port": 8080}"#).unwrap();
        fs::write(dir.path().join("db.json"), r#"{"hosts": ["a", "b"]}"#).unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let feeder = DirectoryFeeder::new(dir.path());
        assert_eq!(feeder.name(), "directory");
        assert_eq!(feeder.dir_path(), dir.path());

        let map = feeder.feed().unwrap();
        assert_eq!(map.len(), 2);
        let app = map["app"].as_mapping().unwrap();
        assert_eq!(app["port"], ConfigValue::from(8080));
        assert_eq!(
            map["db"].as_mapping().unwrap()["hosts"],
            ConfigValue::from(vec!["a", "b"])
        );
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_directory_feeder_mixed_formats() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cache.yml"), "ttl: 30\n").unwrap();
        fs::write(dir.path().join("app.json"), r#"{"debug": true}"#).unwrap();

        let map = DirectoryFeeder::new(dir.path()).feed().unwrap();
        assert_eq!(map["cache"].as_mapping().unwrap()["ttl"], ConfigValue::from(30));
        assert_eq!(map["app"].as_mapping().unwrap()["debug"], ConfigValue::from(true));
    }

    #[test]
    fn test_directory_feeder_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let result = DirectoryFeeder::new(dir.path()).feed();
        match result {
            Err(ConfigError::ParseError { message, source }) => {
                assert!(message.contains("bad.json"), "message: {}", message);
                assert!(source.is_some());
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_directory_feeder_follows_symlinks() {
        let data = TempDir::new().unwrap();
        let conf = TempDir::new().unwrap();
        fs::write(data.path().join("app.json"), r#"{"name": "linked"}"#).unwrap();
        std::os::unix::fs::symlink(data.path().join("app.json"), conf.path().join("app.json"))
            .unwrap();
        std::os::unix::fs::symlink(data.path(), conf.path().join("subdir.json")).unwrap();

        let map = DirectoryFeeder::new(conf.path()).feed().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map["app"].as_mapping().unwrap()["name"],
            ConfigValue::from("linked")
        );
    }

    #[test]
    fn test_directory_feeder_missing_directory() {
        let result = DirectoryFeeder::new("/nonexistent/conf.d").feed();
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_directory_feeder_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(DirectoryFeeder::new(dir.path()).feed().unwrap().is_empty());
    }

    struct UpperParser;

    impl ConfigParser for UpperParser {
        fn parse(&self, content: &str) -> Result<ConfigMap> {
            let mut map = ConfigMap::new();
            map.insert("text".to_string(), ConfigValue::from(content.to_uppercase()));
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["txt"]
        }
    }

    #[test]
    fn test_directory_feeder_custom_parser() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("motd.txt"), "hello").unwrap();

        let map = DirectoryFeeder::new(dir.path())
            .with_parser(Box::new(UpperParser))
            .feed()
            .unwrap();
        assert_eq!(
            map["motd"].as_mapping().unwrap()["text"],
            ConfigValue::from("HELLO")
        );
    }
}
