// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feeder trait definition.
//!
//! This module defines the `Feeder` trait, the primary port (interface) for
//! supplying configuration data. Any data source (in-memory maps, files,
//! directories, the process environment) implements this trait.

use crate::domain::{ConfigMap, Result};

/// A trait for configuration feeders.
///
/// A feeder produces a nested mapping that the store merges into its tree.
/// The store calls [`feed`](Feeder::feed) exactly once per feeder, during
/// construction, in the order the feeders were given. Later feeders overwrite
/// keys produced by earlier ones.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that option sets can be assembled
/// on one thread and consumed on another.
///
/// # Examples
///
/// ```rust
/// use feedcfg::ports::Feeder;
/// use feedcfg::domain::{ConfigMap, ConfigValue, Result};
///
/// struct Defaults;
///
/// impl Feeder for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn feed(&self) -> Result<ConfigMap> {
///         let mut map = ConfigMap::new();
///         map.insert("port".to_string(), ConfigValue::from(8080));
///         Ok(map)
///     }
/// }
///
/// let map = Defaults.feed().unwrap();
/// assert_eq!(map["port"], ConfigValue::from(8080));
/// ```
pub trait Feeder: Send + Sync {
    /// Returns the name of this feeder.
    ///
    /// This name is used for logging and is recorded in `FeedError` when the
    /// feeder fails. It should be a short identifier like "map", "json-file",
    /// or "env".
    fn name(&self) -> &str;

    /// Produces the feeder's configuration data.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigMap)` - The data to merge into the store
    /// * `Err(ConfigError)` - The source could not be read or parsed
    fn feed(&self) -> Result<ConfigMap>;
}

impl<F: Feeder + ?Sized> Feeder for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn feed(&self) -> Result<ConfigMap> {
        (**self).feed()
    }
}
