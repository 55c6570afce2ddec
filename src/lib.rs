// SPDX-License-Identifier: MIT OR Apache-2.0

//! A feeder-based configuration store with dotted-path lookups.
//!
//! This crate builds one nested configuration tree from several data sources
//! ("feeders"), resolves `${ NAME | default }` environment placeholders inside
//! string values, and serves typed lookups such as `get_int("server.port")` or
//! `get_string("users.0.address.city")`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`ConfigPath`, `ConfigValue`,
//!   tree navigation, placeholder interpolation, errors)
//! - **Ports**: Trait definitions that define interfaces (`Feeder`, `EnvLookup`,
//!   `ConfigParser`)
//! - **Adapters**: Implementations for specific sources (maps, JSON and YAML
//!   files, directories, environment variables)
//! - **Service**: The `Config` store that orchestrates everything
//!
//! # Features
//!
//! - **Nested values**: mappings and sequences, addressed by `a.b.0.c` paths
//! - **Deep merge**: later feeders override earlier ones key by key
//! - **Interpolation**: `${ URL | http://localhost }` resolved once, at build time
//! - **Type coercion**: integral floats read as integers, numeric strings parsed
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `env`: Enable the environment variable feeder (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use feedcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = Config::builder()
//!     .with_map(
//!         MapFeeder::new()
//!             .with_value("url", "${ URL | http://localhost }")
//!             .with_value("year", 1979),
//!     )
//!     .with_env_lookup(MapEnv::new())
//!     .build()?;
//!
//! assert_eq!(config.get_string("url")?, "http://localhost");
//! assert_eq!(config.get_int("year")?, 1979);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DirectoryFeeder, JsonFileFeeder, MapEnv, MapFeeder, OsEnv};
    pub use crate::domain::{
        ConfigError, ConfigMap, ConfigPath, ConfigValue, ConfigurationService, Result, Scalar,
    };
    pub use crate::ports::{ConfigParser, EnvLookup, Feeder};
    pub use crate::service::{Config, ConfigBuilder, Options};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarFeeder;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFileFeeder;
}
