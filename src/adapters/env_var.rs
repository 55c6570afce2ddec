// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable feeder.
//!
//! This module provides a feeder that turns environment variables into a
//! nested configuration tree.

use crate::domain::{tree, ConfigMap, ConfigPath, ConfigValue, Result};
use crate::ports::Feeder;
use std::collections::BTreeMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Feeder for environment variables.
///
/// Supports optional prefix filtering (e.g., only read variables starting with
/// "APP_"), lowercasing, and nesting on underscores: with the default settings
/// `APP_DATABASE_HOST=db` under prefix `APP_` becomes `DATABASE.HOST = "db"`.
///
/// Variables are inserted in name order. When one variable names a prefix of
/// another (`DB` and `DB_HOST`), the longer one replaces the shorter value with
/// a mapping.
///
/// All values are strings; typed getters parse them on lookup.
///
/// # Examples
///
/// ```rust
/// use feedcfg::adapters::EnvVarFeeder;
///
/// // Read all environment variables
/// let feeder = EnvVarFeeder::new();
///
/// // Read only variables with a specific prefix, lowercased
/// let feeder = EnvVarFeeder::with_prefix("APP_").lowercase_keys(true);
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarFeeder {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to nest on underscores
    replace_underscores: bool,
    /// Fixed variables used instead of the process environment
    values: Option<BTreeMap<String, String>>,
}

impl EnvVarFeeder {
    /// Creates a feeder over all process environment variables.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            values: None,
        }
    }

    /// Creates a feeder that only reads variables starting with `prefix`.
    ///
    /// The prefix is stripped from the key.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether underscores in names split them into nested keys.
    ///
    /// Enabled by default.
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Uses fixed variables instead of the process environment.
    ///
    /// **Note**: This method is primarily intended for testing. Prefix filtering
    /// and key transformations still apply.
    pub fn with_values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values = Some(
            values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Applies prefix filtering and key transformations to one variable name.
    fn transform_key(&self, key: &str) -> Option<String> {
        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?,
            None => key,
        };
        if key.is_empty() {
            return None;
        }

        let mut transformed_key = key.to_string();
        if self.lowercase_keys {
            transformed_key = transformed_key.to_lowercase();
        }
        if self.replace_underscores {
            transformed_key = transformed_key.replace('_', ".");
        }
        Some(transformed_key)
    }

    /// Collects the variables this feeder reads, keyed by transformed name.
    fn load(&self) -> BTreeMap<String, String> {
        let vars: Box<dyn Iterator<Item = (String, String)>> = match &self.values {
            Some(values) => Box::new(values.clone().into_iter()),
            None => Box::new(env::vars_os().filter_map(|(k, v)| {
                Some((k.into_string().ok()?, v.into_string().ok()?))
            })),
        };

        let mut loaded = BTreeMap::new();
        for (key, value) in vars {
            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            if let Some(transformed_key) = self.transform_key(&key) {
                loaded.insert(transformed_key, value);
            }
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            loaded.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        loaded
    }
}

impl Default for EnvVarFeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Feeder for EnvVarFeeder {
    fn name(&self) -> &str {
        "env"
    }

    fn feed(&self) -> Result<ConfigMap> {
        let mut result = ConfigMap::new();
        for (key, value) in self.load() {
            let path = ConfigPath::from(key);
            if let Err(e) = tree::insert(&mut result, &path, ConfigValue::from(value)) {
                tracing::debug!("Skipping environment variable '{}': {}", path, e);
            }
        }
        Ok(result)
    }
}
