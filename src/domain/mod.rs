// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the value tree, path handling, placeholder interpolation,
//! and error types. It is independent of any particular data source and defines
//! the fundamental concepts used throughout the library.

pub mod config_path;
pub mod config_value;
pub mod errors;
pub mod placeholder;
pub mod service;
pub mod tree;

// Re-export commonly used types
pub use config_path::ConfigPath;
pub use config_value::{ConfigMap, ConfigValue, Scalar};
pub use errors::{ConfigError, Result};
pub use service::ConfigurationService;
