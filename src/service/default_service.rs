// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration store implementation.
//!
//! This module provides [`Config`], the store that runs a list of feeders once,
//! deep-merges their output into a single tree, resolves environment
//! placeholders, and then serves dotted-path lookups and writes.

use crate::adapters::{DirectoryFeeder, JsonFileFeeder, MapFeeder, OsEnv};
use crate::domain::{
    placeholder, tree, ConfigError, ConfigMap, ConfigPath, ConfigValue, ConfigurationService,
    Result,
};
use crate::ports::{EnvLookup, Feeder};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Construction options for a [`Config`].
///
/// Feeders run in the order they appear in `feeders`; later feeders win on
/// conflicting keys. When `env` is `None`, placeholders are resolved against
/// the process environment.
#[derive(Default)]
pub struct Options {
    /// Feeders to run, in order.
    pub feeders: Vec<Box<dyn Feeder>>,
    /// Variable lookup used for placeholder interpolation.
    pub env: Option<Arc<dyn EnvLookup>>,
}

impl Options {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feeder.
    pub fn with_feeder(mut self, feeder: impl Feeder + 'static) -> Self {
        self.feeders.push(Box::new(feeder));
        self
    }

    /// Sets the variable lookup used for placeholder interpolation.
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Some(Arc::new(env));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.feeders.iter().map(|feeder| feeder.name()).collect();
        f.debug_struct("Options")
            .field("feeders", &names)
            .field("env", &self.env.is_some())
            .finish()
    }
}

/// The configuration store.
///
/// Built once from a set of feeders; afterwards every read and write happens
/// against the in-memory tree. Reads take a shared lock and writes take an
/// exclusive one, so a `Config` can be shared between threads behind an `Arc`.
///
/// # Examples
///
/// ```rust
/// use feedcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::builder()
///     .with_map(MapFeeder::new().with_value("year", 1979))
///     .build()?;
///
/// assert_eq!(config.get_int("year")?, 1979);
/// assert_eq!(config.get_float("year")?, 1979.0);
///
/// config.set("server.port", ConfigValue::from(8080))?;
/// assert_eq!(config.get_int("server.port")?, 8080);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Config {
    tree: RwLock<ConfigMap>,
}

impl Config {
    /// Builds a store by running every feeder in `options`.
    ///
    /// # Errors
    ///
    /// Returns `FeedError` naming the first feeder that failed. No partially
    /// built store is returned.
    pub fn new(options: Options) -> Result<Self> {
        let mut root = ConfigMap::new();

        for feeder in &options.feeders {
            let data = feeder.feed().map_err(|e| {
                tracing::debug!("Feeder '{}' failed: {}", feeder.name(), e);
                ConfigError::FeedError {
                    feeder: feeder.name().to_string(),
                    source: Box::new(e),
                }
            })?;

            let top_level = data.len();
            let overwritten = tree::merge(&mut root, data);
            tracing::debug!(
                "Merged feeder '{}': {} top-level keys, {} values overwritten",
                feeder.name(),
                top_level,
                overwritten
            );
        }

        let interpolated = match &options.env {
            Some(env) => placeholder::interpolate_map(&mut root, &**env),
            None => placeholder::interpolate_map(&mut root, &OsEnv),
        };
        tracing::debug!(
            "Configuration built from {} feeders, {} values interpolated",
            options.feeders.len(),
            interpolated
        );

        Ok(Self {
            tree: RwLock::new(root),
        })
    }

    /// Creates a new store builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Deserializes the subtree at `path` into `T`.
    ///
    /// # Errors
    ///
    /// Navigation errors are returned as-is; a subtree that does not fit `T`
    /// is a `TypeMismatch` carrying the serde error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use feedcfg::prelude::*;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// # fn main() -> Result<()> {
    /// let config = Config::builder()
    ///     .with_map(MapFeeder::new().with_value(
    ///         "server",
    ///         ConfigValue::from(serde_json::json!({"host": "localhost", "port": 8080})),
    ///     ))
    ///     .build()?;
    ///
    /// let server: Server = config.get_as("server")?;
    /// assert_eq!(server.host, "localhost");
    /// assert_eq!(server.port, 8080);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.get(path)?;
        let found = value.kind();
        serde_json::to_value(&value)
            .and_then(serde_json::from_value::<T>)
            .map_err(|e| ConfigError::mismatch_with(path, std::any::type_name::<T>(), found, e))
    }

    /// Returns a copy of the whole tree.
    pub fn snapshot(&self) -> ConfigMap {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, ConfigMap> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigMap> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigurationService for Config {
    fn get(&self, path: &str) -> Result<ConfigValue> {
        let path = ConfigPath::from(path);
        let root = self.read();
        tree::navigate(&root, &path).cloned()
    }

    fn set(&self, path: &str, value: ConfigValue) -> Result<()> {
        let path = ConfigPath::from(path);
        let mut root = self.write();
        tree::insert(&mut root, &path, value)?;
        tracing::debug!("Set configuration value at '{}'", path);
        Ok(())
    }
}

/// Builder for constructing a [`Config`].
///
/// Feeders are run in the order they are added.
///
/// # Examples
///
/// ```rust,no_run
/// use feedcfg::service::ConfigBuilder;
///
/// # fn main() -> feedcfg::domain::Result<()> {
/// let config = ConfigBuilder::new()
///     .with_json_file("/etc/myapp/config.json")
///     .with_directory("/etc/myapp/conf.d")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    options: Options,
}

impl ConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feeder.
    pub fn with_feeder(mut self, feeder: impl Feeder + 'static) -> Self {
        self.options = self.options.with_feeder(feeder);
        self
    }

    /// Adds an in-memory map feeder.
    pub fn with_map(self, feeder: MapFeeder) -> Self {
        self.with_feeder(feeder)
    }

    /// Adds a JSON file feeder. The file is read by [`build`](Self::build).
    pub fn with_json_file(self, path: impl AsRef<Path>) -> Self {
        self.with_feeder(JsonFileFeeder::new(path))
    }

    /// Adds a YAML file feeder. The file is read by [`build`](Self::build).
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<Path>) -> Self {
        use crate::adapters::YamlFileFeeder;
        self.with_feeder(YamlFileFeeder::new(path))
    }

    /// Adds a feeder over every supported file in a directory.
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        self.with_feeder(DirectoryFeeder::new(path))
    }

    /// Adds environment variables with a prefix, lowercased and nested on
    /// underscores.
    ///
    /// `MYAPP_SERVER_PORT` under prefix `MYAPP_` becomes `server.port`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use feedcfg::service::ConfigBuilder;
    ///
    /// # fn main() -> feedcfg::domain::Result<()> {
    /// let config = ConfigBuilder::new()
    ///     .with_env_vars("FEEDCFG_DOC_UNSET_")
    ///     .build()?;
    /// assert!(config.snapshot().is_empty());
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "env")]
    pub fn with_env_vars(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarFeeder;
        self.with_feeder(EnvVarFeeder::with_prefix(prefix).lowercase_keys(true))
    }

    /// Sets the variable lookup used for placeholder interpolation.
    pub fn with_env_lookup(mut self, env: impl EnvLookup + 'static) -> Self {
        self.options = self.options.with_env(env);
        self
    }

    /// Runs the feeders and builds the store.
    pub fn build(self) -> Result<Config> {
        Config::new(self.options)
    }
}
