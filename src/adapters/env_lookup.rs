// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup adapters used for placeholder interpolation.

use crate::ports::EnvLookup;
use std::collections::HashMap;
use std::env;

/// Looks variables up in the host process environment.
///
/// This is the lookup a store uses when no other one is configured. Variables
/// whose value is not valid Unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl EnvLookup for OsEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return None;
        }
        env::var(name).ok()
    }
}

/// Looks variables up in a fixed map.
///
/// Useful in tests, or to interpolate against a curated set of variables
/// instead of the whole process environment.
///
/// # Examples
///
/// ```rust
/// use feedcfg::adapters::MapEnv;
/// use feedcfg::ports::EnvLookup;
///
/// let env = MapEnv::new().with_var("URL", "https://example.com");
/// assert_eq!(env.lookup("URL").as_deref(), Some("https://example.com"));
/// assert_eq!(env.lookup("OTHER"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl EnvLookup for MapEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_env_reads_process_environment() {
        env::set_var("FEEDCFG_OS_ENV_TEST", "present");
        assert_eq!(
            OsEnv.lookup("FEEDCFG_OS_ENV_TEST").as_deref(),
            Some("present")
        );
        env::remove_var("FEEDCFG_OS_ENV_TEST");
        assert_eq!(OsEnv.lookup("FEEDCFG_OS_ENV_TEST"), None);
    }

    #[test]
    fn test_os_env_rejects_unusable_names() {
        assert_eq!(OsEnv.lookup(""), None);
        assert_eq!(OsEnv.lookup("A=B"), None);
        assert_eq!(OsEnv.lookup("A\0B"), None);
    }

    #[test]
    fn test_map_env_set_but_empty() {
        let env = MapEnv::new().with_var("EMPTY", "");
        assert_eq!(env.lookup("EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn test_map_env_from_hash_map() {
        let mut vars = HashMap::new();
        vars.insert("A".to_string(), "1".to_string());
        let env = MapEnv::from(vars);
        assert_eq!(env.lookup("A").as_deref(), Some("1"));
        assert_eq!(env.lookup("a"), None);
    }
}
