// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment placeholder interpolation for string values.
//!
//! Supports `${ NAME }` and `${ NAME | default }` anywhere inside a string.
//! The variable value is used when it is set and non-empty, otherwise the
//! default (or an empty string when no default is given). A `${` without a
//! closing `}` is left untouched.
//!
//! Placeholders do not nest: the first `}` after `${` closes it, so
//! `${ X | ${Y} }` resolves the text `X | ${Y` and keeps the trailing ` }`.

use crate::domain::config_value::{ConfigMap, ConfigValue, Scalar};
use crate::ports::EnvLookup;

const OPEN: &str = "${";
const CLOSE: char = '}';
const DEFAULT_SEPARATOR: char = '|';

/// Replaces every placeholder in `input` using `env`.
///
/// Substituted text is not scanned again, so an environment value containing
/// `${...}` is inserted literally.
///
/// # Examples
///
/// ```
/// use feedcfg::domain::placeholder::interpolate;
/// use feedcfg::adapters::MapEnv;
///
/// let env = MapEnv::new().with_var("HOST", "db.local");
/// assert_eq!(interpolate("tcp://${ HOST }:${ PORT | 5432 }", &env), "tcp://db.local:5432");
/// ```
pub fn interpolate(input: &str, env: &dyn EnvLookup) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            // Unclosed placeholder: keep everything from here verbatim.
            break;
        };

        result.push_str(&rest[..start]);
        result.push_str(&resolve(&after_open[..end], env));
        rest = &after_open[end + CLOSE.len_utf8()..];
    }

    result.push_str(rest);
    result
}

/// Resolves the text between `${` and `}`.
fn resolve(inner: &str, env: &dyn EnvLookup) -> String {
    let (name, default) = match inner.split_once(DEFAULT_SEPARATOR) {
        Some((name, default)) => (name.trim(), default.trim()),
        None => (inner.trim(), ""),
    };

    match env.lookup(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Interpolates every string leaf below `value`.
///
/// Returns the number of strings that changed.
pub fn interpolate_value(value: &mut ConfigValue, env: &dyn EnvLookup) -> usize {
    match value {
        ConfigValue::Scalar(Scalar::String(s)) => {
            if !s.contains(OPEN) {
                return 0;
            }
            let resolved = interpolate(s, env);
            if resolved == *s {
                return 0;
            }
            *s = resolved;
            1
        }
        ConfigValue::Scalar(_) => 0,
        ConfigValue::Mapping(map) => interpolate_map(map, env),
        ConfigValue::Sequence(items) => items
            .iter_mut()
            .map(|item| interpolate_value(item, env))
            .sum(),
    }
}

/// Interpolates every string leaf in a mapping.
///
/// Returns the number of strings that changed.
pub fn interpolate_map(map: &mut ConfigMap, env: &dyn EnvLookup) -> usize {
    map.values_mut()
        .map(|value| interpolate_value(value, env))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnv;

    fn env() -> MapEnv {
        MapEnv::new()
            .with_var("URL", "https://example.com")
            .with_var("EMPTY", "")
            .with_var("user", "lower")
            .with_var("A B", "spaced")
    }

    #[test]
    fn test_simple_placeholder() {
        assert_eq!(interpolate("${ URL }", &env()), "https://example.com");
        assert_eq!(interpolate("${URL}", &env()), "https://example.com");
    }

    #[test]
    fn test_unset_without_default_is_empty() {
        assert_eq!(interpolate("${ MISSING }", &env()), "");
        assert_eq!(interpolate("x${MISSING}y", &env()), "xy");
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            interpolate("${ MISSING | http://localhost }", &env()),
            "http://localhost"
        );
    }

    #[test]
    fn test_default_used_when_empty() {
        assert_eq!(
            interpolate("${ EMPTY | http://localhost }", &env()),
            "http://localhost"
        );
    }

    #[test]
    fn test_value_wins_over_default() {
        assert_eq!(
            interpolate("${ URL | http://localhost }", &env()),
            "https://example.com"
        );
    }

    #[test]
    fn test_default_splits_on_first_separator() {
        assert_eq!(interpolate("${ MISSING | a | b }", &env()), "a | b");
    }

    #[test]
    fn test_empty_default() {
        assert_eq!(interpolate("${ MISSING | }", &env()), "");
    }

    #[test]
    fn test_multiple_placeholders() {
        assert_eq!(
            interpolate("${URL}/${ MISSING | api }/${user}", &env()),
            "https://example.com/api/lower"
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(interpolate("${ USER | none }", &env()), "none");
        assert_eq!(interpolate("${ user | none }", &env()), "lower");
    }

    #[test]
    fn test_inner_whitespace_kept_in_name() {
        assert_eq!(interpolate("${  A B  }", &env()), "spaced");
    }

    #[test]
    fn test_unclosed_placeholder_left_verbatim() {
        assert_eq!(interpolate("${ URL", &env()), "${ URL");
        assert_eq!(
            interpolate("${URL} then ${ broken", &env()),
            "https://example.com then ${ broken"
        );
    }

    #[test]
    fn test_first_closing_brace_ends_placeholder() {
        assert_eq!(interpolate("${ MISSING | ${URL} }", &env()), "${URL }");
        assert_eq!(
            interpolate("${ URL | ${MISSING} }", &env()),
            "https://example.com }"
        );
    }

    #[test]
    fn test_text_without_placeholders() {
        assert_eq!(interpolate("plain $ text {}", &env()), "plain $ text {}");
        assert_eq!(interpolate("", &env()), "");
    }

    #[test]
    fn test_substitution_not_rescanned() {
        let env = MapEnv::new().with_var("OUTER", "${ URL }");
        assert_eq!(interpolate("${OUTER}", &env), "${ URL }");
    }

    #[test]
    fn test_multibyte_text_around_placeholder() {
        assert_eq!(interpolate("héllo ${ URL } ✓", &env()), "héllo https://example.com ✓");
    }

    #[test]
    fn test_interpolate_value_recurses() {
        let mut inner = ConfigMap::new();
        inner.insert("url".to_string(), ConfigValue::from("${ URL }"));
        inner.insert("port".to_string(), ConfigValue::from(8080));
        let mut value = ConfigValue::Sequence(vec![
            ConfigValue::Mapping(inner),
            ConfigValue::from("${ EMPTY | fallback }"),
            ConfigValue::from("untouched"),
        ]);

        let changed = interpolate_value(&mut value, &env());
        assert_eq!(changed, 2);

        let items = value.as_sequence().unwrap();
        assert_eq!(
            items[0].as_mapping().unwrap()["url"],
            ConfigValue::from("https://example.com")
        );
        assert_eq!(items[0].as_mapping().unwrap()["port"], ConfigValue::from(8080));
        assert_eq!(items[1], ConfigValue::from("fallback"));
        assert_eq!(items[2], ConfigValue::from("untouched"));
    }

    #[test]
    fn test_interpolate_map_counts_changes() {
        let mut map = ConfigMap::new();
        map.insert("a".to_string(), ConfigValue::from("${URL}"));
        map.insert("b".to_string(), ConfigValue::from("static"));
        map.insert("c".to_string(), ConfigValue::from("${ NOPE }"));
        assert_eq!(interpolate_map(&mut map, &env()), 2);
        assert_eq!(map["c"], ConfigValue::from(""));
    }
}
