// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing feeder and environment implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer. Each feeder implements the `Feeder` trait to supply configuration
//! from a specific source.

pub mod directory;
pub mod env_lookup;
#[cfg(feature = "env")]
pub mod env_var;
mod file;
pub mod json_file;
pub mod map;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use directory::DirectoryFeeder;
pub use env_lookup::{MapEnv, OsEnv};
pub use json_file::{JsonFileFeeder, JsonParser};
pub use map::MapFeeder;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarFeeder;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileFeeder, YamlParser};
