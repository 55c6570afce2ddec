// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration path newtype for dotted-path lookups.
//!
//! This module provides the `ConfigPath` type, a wrapper around the dotted path
//! string (e.g. `users.0.address.city`) that knows how to split itself into
//! segments for the tree navigator.

use std::fmt;

/// A dot-separated location inside the configuration tree.
///
/// Each segment is either a mapping key or, when the node being addressed is a
/// sequence, a base-10 index. The empty string is the empty path and has no
/// segments.
///
/// # Examples
///
/// ```
/// use feedcfg::domain::config_path::ConfigPath;
///
/// let path = ConfigPath::from("users.0.address.city");
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["users", "0", "address", "city"]);
/// assert_eq!(path.as_str(), "users.0.address.city");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigPath(String);

impl ConfigPath {
    /// Creates a new `ConfigPath` from a `String`.
    pub fn new(path: String) -> Self {
        ConfigPath(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the path has no segments.
    ///
    /// ```
    /// use feedcfg::domain::config_path::ConfigPath;
    ///
    /// assert!(ConfigPath::from("").is_empty());
    /// assert!(!ConfigPath::from("a").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the segments of the path.
    ///
    /// An empty path yields nothing. Empty segments inside a non-empty path
    /// (as in `a..b`) are kept and looked up as empty keys.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        let mut segments = self.0.split('.');
        if self.0.is_empty() {
            segments.next();
        }
        segments
    }

    /// Returns the number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Parses a segment as a sequence index.
    ///
    /// Only plain ASCII digits are accepted, so `+1` and ` 1` are rejected even
    /// though `usize::from_str` would take the former.
    pub fn parse_index(segment: &str) -> Option<usize> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse::<usize>().ok()
    }

    /// Converts the `ConfigPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigPath {
    fn from(s: String) -> Self {
        ConfigPath(s)
    }
}

impl From<&str> for ConfigPath {
    fn from(s: &str) -> Self {
        ConfigPath(s.to_string())
    }
}

impl From<ConfigPath> for String {
    fn from(path: ConfigPath) -> Self {
        path.0
    }
}

impl AsRef<str> for ConfigPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
