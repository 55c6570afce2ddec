// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.
//!
//! Placeholder interpolation reads variables through this port so that the host
//! process environment can be swapped for a fixed map in tests.

/// A trait for looking up environment variables by name.
///
/// Returning `Some("")` (set but empty) and `None` (unset) are both treated
/// as "no value" by placeholder interpolation, which then uses the default.
///
/// # Examples
///
/// ```rust
/// use feedcfg::ports::EnvLookup;
///
/// struct Fixed;
///
/// impl EnvLookup for Fixed {
///     fn lookup(&self, name: &str) -> Option<String> {
///         (name == "HOME").then(|| "/home/app".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.lookup("HOME").as_deref(), Some("/home/app"));
/// assert_eq!(Fixed.lookup("PATH"), None);
/// ```
pub trait EnvLookup: Send + Sync {
    /// Returns the value of the variable, or `None` when it is not set.
    fn lookup(&self, name: &str) -> Option<String>;
}
