// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the store and its collaborators. These traits are implemented by
//! adapters in the adapters layer.

pub mod env;
pub mod feeder;
pub mod parser;

// Re-export commonly used types
pub use env::EnvLookup;
pub use feeder::Feeder;
pub use parser::ConfigParser;
