// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the main interface for
//! interacting with a configuration store. It provides raw and typed lookups by
//! dotted path, existence checks, defaults, and in-place writes.

use crate::domain::{ConfigValue, Result};

/// The main configuration service trait.
///
/// Implementors provide [`get`](ConfigurationService::get) and
/// [`set`](ConfigurationService::set); the typed getters are derived from `get`
/// and the coercion methods on [`ConfigValue`]. Navigation errors and coercion
/// errors stay distinguishable by their `ConfigError` variant.
///
/// # Examples
///
/// ```rust
/// use feedcfg::domain::{ConfigError, ConfigurationService, ConfigValue, Result};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn get(&self, path: &str) -> Result<ConfigValue> {
///         match path {
///             "port" => Ok(ConfigValue::from(8080)),
///             _ => Err(ConfigError::NotFound { path: path.to_string() }),
///         }
///     }
///
///     fn set(&self, _path: &str, _value: ConfigValue) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let service = Fixed;
/// assert_eq!(service.get_int("port").unwrap(), 8080);
/// assert!(!service.has("host"));
/// ```
pub trait ConfigurationService {
    /// Retrieves the value at a dotted path.
    ///
    /// The returned value keeps its dynamic kind: it may be a scalar, a mapping,
    /// or a sequence.
    ///
    /// # Errors
    ///
    /// `NotFound`, `InvalidPath`, or `IndexOutOfRange` from path navigation.
    fn get(&self, path: &str) -> Result<ConfigValue>;

    /// Writes a value at a dotted path, creating intermediate mappings.
    ///
    /// Values written this way are stored exactly as given; placeholders inside
    /// them are not interpolated.
    fn set(&self, path: &str, value: ConfigValue) -> Result<()>;

    /// Retrieves the value at `path` as a string.
    fn get_string(&self, path: &str) -> Result<String> {
        self.get(path)?.as_string(path)
    }

    /// Retrieves the value at `path` as an integer.
    ///
    /// Integral floats and numeric strings are accepted.
    fn get_int(&self, path: &str) -> Result<i64> {
        self.get(path)?.as_i64(path)
    }

    /// Retrieves the value at `path` as a float.
    ///
    /// Integers are widened without error.
    fn get_float(&self, path: &str) -> Result<f64> {
        self.get(path)?.as_f64(path)
    }

    /// Retrieves the value at `path` as a boolean.
    fn get_bool(&self, path: &str) -> Result<bool> {
        self.get(path)?.as_bool(path)
    }

    /// Retrieves a value or returns `default` when the path cannot be resolved.
    fn get_or_default(&self, path: &str, default: ConfigValue) -> ConfigValue {
        self.get(path).unwrap_or(default)
    }

    /// Checks whether a value exists at `path`.
    fn has(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }
}
