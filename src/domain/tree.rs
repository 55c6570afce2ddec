// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted-path navigation, insertion, and merging over the configuration tree.
//!
//! Lookups walk the tree one segment at a time. A mapping consumes the segment as
//! a key and a sequence consumes it as an index. A scalar cannot be descended.

use crate::domain::config_path::ConfigPath;
use crate::domain::config_value::{ConfigMap, ConfigValue};
use crate::domain::errors::{ConfigError, Result};

/// Locates the node at `path` below `root`.
///
/// # Errors
///
/// - `NotFound` for an empty path, a missing key, or an attempt to descend
///   into a scalar.
/// - `InvalidPath` when a sequence is addressed with a non-numeric segment.
/// - `IndexOutOfRange` when a sequence index is past the end.
///
/// # Examples
///
/// ```
/// use feedcfg::domain::{tree, ConfigMap, ConfigPath, ConfigValue};
///
/// let mut root = ConfigMap::new();
/// root.insert("numbers".to_string(), ConfigValue::from(vec![1, 2, 3]));
///
/// let value = tree::navigate(&root, &ConfigPath::from("numbers.2")).unwrap();
/// assert_eq!(value, &ConfigValue::from(3));
/// ```
pub fn navigate<'a>(root: &'a ConfigMap, path: &ConfigPath) -> Result<&'a ConfigValue> {
    let mut segments = path.segments();
    let first = segments.next().ok_or_else(|| not_found(path))?;
    let mut current = root.get(first).ok_or_else(|| not_found(path))?;

    for segment in segments {
        current = match current {
            ConfigValue::Mapping(map) => map.get(segment).ok_or_else(|| not_found(path))?,
            ConfigValue::Sequence(items) => {
                let index = sequence_index(path, segment)?;
                items.get(index).ok_or_else(|| ConfigError::IndexOutOfRange {
                    path: path.to_string(),
                    index,
                    len: items.len(),
                })?
            }
            ConfigValue::Scalar(_) => return Err(not_found(path)),
        };
    }

    Ok(current)
}

/// Writes `value` at `path`, creating intermediate mappings as needed.
///
/// Sequences are never created or grown: writing through a sequence requires
/// an existing index. An intermediate scalar is replaced by a new mapping.
///
/// # Errors
///
/// - `InvalidPath` for an empty path or a non-numeric segment against a sequence.
/// - `IndexOutOfRange` when a sequence index is past the end.
pub fn insert(root: &mut ConfigMap, path: &ConfigPath, value: ConfigValue) -> Result<()> {
    let segments: Vec<&str> = path.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return Err(ConfigError::InvalidPath {
            path: path.to_string(),
            segment: String::new(),
        });
    };

    let Some((first, rest)) = parents.split_first() else {
        root.insert((*last).to_string(), value);
        return Ok(());
    };

    let mut current = root
        .entry((*first).to_string())
        .or_insert_with(|| ConfigValue::Mapping(ConfigMap::new()));

    for segment in rest {
        current = child_mut(current, path, segment)?;
    }

    match current {
        ConfigValue::Sequence(items) => {
            let index = sequence_index(path, last)?;
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or_else(|| ConfigError::IndexOutOfRange {
                    path: path.to_string(),
                    index,
                    len,
                })?;
            *slot = value;
        }
        other => {
            as_mapping_mut(other).insert((*last).to_string(), value);
        }
    }

    Ok(())
}

/// Deep-merges `incoming` into `base`.
///
/// When both sides hold a mapping under the same key the mappings are merged
/// recursively. Otherwise the incoming value replaces the existing one.
/// Returns the number of keys that overwrote an existing non-mapping value.
pub fn merge(base: &mut ConfigMap, incoming: ConfigMap) -> usize {
    let mut overwritten = 0;
    for (key, value) in incoming {
        if let Some(existing) = base.get_mut(&key) {
            match (existing, value) {
                (ConfigValue::Mapping(existing), ConfigValue::Mapping(next)) => {
                    overwritten += merge(existing, next);
                }
                (slot, value) => {
                    *slot = value;
                    overwritten += 1;
                }
            }
        } else {
            base.insert(key, value);
        }
    }
    overwritten
}

/// Steps into the child named by `segment`, creating a mapping if it is missing.
fn child_mut<'a>(
    node: &'a mut ConfigValue,
    path: &ConfigPath,
    segment: &str,
) -> Result<&'a mut ConfigValue> {
    match node {
        ConfigValue::Sequence(items) => {
            let index = sequence_index(path, segment)?;
            let len = items.len();
            items
                .get_mut(index)
                .ok_or_else(|| ConfigError::IndexOutOfRange {
                    path: path.to_string(),
                    index,
                    len,
                })
        }
        other => Ok(as_mapping_mut(other)
            .entry(segment.to_string())
            .or_insert_with(|| ConfigValue::Mapping(ConfigMap::new()))),
    }
}

/// Returns the node as a mapping, replacing a scalar with an empty mapping first.
///
/// Callers handle sequences before reaching here.
fn as_mapping_mut(node: &mut ConfigValue) -> &mut ConfigMap {
    if !matches!(node, ConfigValue::Mapping(_)) {
        *node = ConfigValue::Mapping(ConfigMap::new());
    }
    match node {
        ConfigValue::Mapping(map) => map,
        _ => unreachable!("node was just replaced with a mapping"),
    }
}

fn sequence_index(path: &ConfigPath, segment: &str) -> Result<usize> {
    ConfigPath::parse_index(segment).ok_or_else(|| ConfigError::InvalidPath {
        path: path.to_string(),
        segment: segment.to_string(),
    })
}

fn not_found(path: &ConfigPath) -> ConfigError {
    ConfigError::NotFound {
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigMap {
        let json = serde_json::json!({
            "name": "Hey You",
            "numbers": [1, 2, 3],
            "users": [
                {"name": "Milad", "address": {"city": "Delfan"}},
                {"name": "Amin", "address": {"city": "Tehran"}}
            ],
            "scores": {"A": 1, "B": 2, "C": 3},
            "matrix": [[1, 2], [3, 4]]
        });
        match ConfigValue::from(json) {
            ConfigValue::Mapping(map) => map,
            other => panic!("expected mapping, got {}", other.kind()),
        }
    }

    fn get<'a>(root: &'a ConfigMap, path: &str) -> Result<&'a ConfigValue> {
        navigate(root, &ConfigPath::from(path))
    }

    #[test]
    fn test_navigate_top_level() {
        let root = sample();
        assert_eq!(get(&root, "name").unwrap(), &ConfigValue::from("Hey You"));
    }

    #[test]
    fn test_navigate_nested_mapping() {
        let root = sample();
        assert_eq!(get(&root, "scores.A").unwrap(), &ConfigValue::from(1));
        assert_eq!(get(&root, "scores.B").unwrap(), &ConfigValue::from(2));
    }

    #[test]
    fn test_navigate_sequence_index() {
        let root = sample();
        assert_eq!(get(&root, "numbers.2").unwrap(), &ConfigValue::from(3));
        assert_eq!(
            get(&root, "users.0.address.city").unwrap(),
            &ConfigValue::from("Delfan")
        );
        assert_eq!(get(&root, "matrix.1.0").unwrap(), &ConfigValue::from(3));
    }

    #[test]
    fn test_navigate_returns_containers() {
        let root = sample();
        assert_eq!(get(&root, "numbers").unwrap().kind(), "sequence");
        assert_eq!(get(&root, "users.1").unwrap().kind(), "mapping");
    }

    #[test]
    fn test_navigate_missing_key() {
        let root = sample();
        assert!(matches!(
            get(&root, "scores.Z"),
            Err(ConfigError::NotFound { .. })
        ));
        assert!(matches!(
            get(&root, "wrong.nested"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_navigate_empty_path() {
        let root = sample();
        assert!(matches!(get(&root, ""), Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_navigate_through_scalar() {
        let root = sample();
        assert!(matches!(
            get(&root, "name.first"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_navigate_invalid_index() {
        let root = sample();
        match get(&root, "numbers.two") {
            Err(ConfigError::InvalidPath { segment, .. }) => assert_eq!(segment, "two"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            get(&root, "numbers.-1"),
            Err(ConfigError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_navigate_index_out_of_range() {
        let root = sample();
        match get(&root, "numbers.3") {
            Err(ConfigError::IndexOutOfRange { index, len, .. }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_insert_top_level() {
        let mut root = ConfigMap::new();
        insert(&mut root, &ConfigPath::from("k"), ConfigValue::from("v")).unwrap();
        assert_eq!(get(&root, "k").unwrap(), &ConfigValue::from("v"));
    }

    #[test]
    fn test_insert_creates_intermediate_mappings() {
        let mut root = ConfigMap::new();
        insert(
            &mut root,
            &ConfigPath::from("database.primary.host"),
            ConfigValue::from("localhost"),
        )
        .unwrap();
        assert_eq!(
            get(&root, "database.primary.host").unwrap(),
            &ConfigValue::from("localhost")
        );
        assert_eq!(get(&root, "database").unwrap().kind(), "mapping");
    }

    #[test]
    fn test_insert_overwrites_intermediate_scalar() {
        let mut root = sample();
        insert(&mut root, &ConfigPath::from("name.first"), ConfigValue::from("Hey")).unwrap();
        assert_eq!(get(&root, "name.first").unwrap(), &ConfigValue::from("Hey"));
        assert_eq!(get(&root, "name").unwrap().kind(), "mapping");
    }

    #[test]
    fn test_insert_into_existing_sequence() {
        let mut root = sample();
        insert(&mut root, &ConfigPath::from("numbers.1"), ConfigValue::from(20)).unwrap();
        insert(
            &mut root,
            &ConfigPath::from("users.1.address.zip"),
            ConfigValue::from("12345"),
        )
        .unwrap();

        assert_eq!(get(&root, "numbers.1").unwrap(), &ConfigValue::from(20));
        assert_eq!(
            get(&root, "users.1.address.zip").unwrap(),
            &ConfigValue::from("12345")
        );
        assert_eq!(
            get(&root, "users.1.address.city").unwrap(),
            &ConfigValue::from("Tehran")
        );
    }

    #[test]
    fn test_insert_does_not_grow_sequences() {
        let mut root = sample();
        assert!(matches!(
            insert(&mut root, &ConfigPath::from("numbers.3"), ConfigValue::from(4)),
            Err(ConfigError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            insert(&mut root, &ConfigPath::from("users.5.name"), ConfigValue::from("x")),
            Err(ConfigError::IndexOutOfRange { .. })
        ));
        assert_eq!(get(&root, "numbers").unwrap().as_sequence().unwrap().len(), 3);
    }

    #[test]
    fn test_insert_invalid_sequence_segment() {
        let mut root = sample();
        assert!(matches!(
            insert(&mut root, &ConfigPath::from("numbers.x"), ConfigValue::from(1)),
            Err(ConfigError::InvalidPath { .. })
        ));
        assert!(matches!(
            insert(&mut root, &ConfigPath::from("users.first.name"), ConfigValue::from(1)),
            Err(ConfigError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_insert_empty_path() {
        let mut root = ConfigMap::new();
        assert!(matches!(
            insert(&mut root, &ConfigPath::from(""), ConfigValue::from(1)),
            Err(ConfigError::InvalidPath { .. })
        ));
        assert!(root.is_empty());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = sample();
        let mut incoming = ConfigMap::new();
        incoming.insert("name".to_string(), ConfigValue::from("Comfortably Numb"));
        incoming.insert("year".to_string(), ConfigValue::from(1979));

        let overwritten = merge(&mut base, incoming);
        assert_eq!(overwritten, 1);
        assert_eq!(get(&base, "name").unwrap(), &ConfigValue::from("Comfortably Numb"));
        assert_eq!(get(&base, "year").unwrap(), &ConfigValue::from(1979));
    }

    #[test]
    fn test_merge_nested_mappings() {
        let mut base = sample();
        let mut scores = ConfigMap::new();
        scores.insert("B".to_string(), ConfigValue::from(20));
        scores.insert("D".to_string(), ConfigValue::from(4));
        let mut incoming = ConfigMap::new();
        incoming.insert("scores".to_string(), ConfigValue::Mapping(scores));

        merge(&mut base, incoming);
        assert_eq!(get(&base, "scores.A").unwrap(), &ConfigValue::from(1));
        assert_eq!(get(&base, "scores.B").unwrap(), &ConfigValue::from(20));
        assert_eq!(get(&base, "scores.D").unwrap(), &ConfigValue::from(4));
    }

    #[test]
    fn test_merge_replaces_sequences_whole() {
        let mut base = sample();
        let mut incoming = ConfigMap::new();
        incoming.insert("numbers".to_string(), ConfigValue::from(vec![9]));

        merge(&mut base, incoming);
        assert_eq!(get(&base, "numbers").unwrap(), &ConfigValue::from(vec![9]));
    }
}
