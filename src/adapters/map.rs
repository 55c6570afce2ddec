// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map feeder.

use crate::domain::{ConfigMap, ConfigValue, Result};
use crate::ports::Feeder;

/// Feeds a fixed in-memory mapping.
///
/// Keys are stored literally: a key containing dots is a single top-level key,
/// not a nested path.
///
/// # Examples
///
/// ```rust
/// use feedcfg::adapters::MapFeeder;
/// use feedcfg::domain::ConfigValue;
/// use feedcfg::ports::Feeder;
///
/// let feeder = MapFeeder::new()
///     .with_value("name", "Hey You")
///     .with_value("year", 1979);
///
/// let map = feeder.feed().unwrap();
/// assert_eq!(map["year"], ConfigValue::from(1979));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapFeeder {
    values: ConfigMap,
}

impl MapFeeder {
    /// Creates an empty map feeder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the feeder holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<ConfigMap> for MapFeeder {
    fn from(values: ConfigMap) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for MapFeeder
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Feeder for MapFeeder {
    fn name(&self) -> &str {
        "map"
    }

    fn feed(&self) -> Result<ConfigMap> {
        Ok(self.values.clone())
    }
}
