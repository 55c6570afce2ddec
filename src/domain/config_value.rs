// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value tree with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, the recursive node of the merged
//! configuration tree, along with the coercion methods that turn a located node
//! into a concrete Rust type.

use crate::domain::errors::{ConfigError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A mapping node: string keys to nested values, kept in key order.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A leaf value of the configuration tree.
///
/// Numbers keep their integer/float distinction from the feeder that produced
/// them. JSON numbers that fit an `i64` become [`Scalar::Int`], everything else
/// becomes [`Scalar::Float`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string, possibly containing placeholders before interpolation.
    String(String),
}

impl Scalar {
    /// Returns the name of this scalar's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }
}

/// A node of the configuration tree.
///
/// Every node is exactly one of a scalar leaf, a mapping, or a sequence. The
/// navigator matches on this tag at each path segment.
///
/// # Examples
///
/// ```
/// use feedcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64("answer").unwrap(), 42);
/// assert_eq!(value.as_f64("answer").unwrap(), 42.0);
/// assert_eq!(value.as_string("answer").unwrap(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A leaf value.
    Scalar(Scalar),
    /// A nested mapping.
    Mapping(ConfigMap),
    /// An ordered sequence.
    Sequence(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Creates a null value.
    pub fn null() -> Self {
        ConfigValue::Scalar(Scalar::Null)
    }

    /// Returns the name of this value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Scalar(scalar) => scalar.kind(),
            ConfigValue::Mapping(_) => "mapping",
            ConfigValue::Sequence(_) => "sequence",
        }
    }

    /// Returns `true` if the value is a null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Scalar(Scalar::Null))
    }

    /// Returns the string slice if the value is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if the value is one.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the sequence if the value is one.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Converts the value to a `String`.
    ///
    /// Strings are returned as-is. Numbers and booleans are formatted. Nulls,
    /// mappings, and sequences fail with `TypeMismatch`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("hey").as_string("k").unwrap(), "hey");
    /// assert_eq!(ConfigValue::from(4.6).as_string("k").unwrap(), "4.6");
    /// assert!(ConfigValue::null().as_string("k").is_err());
    /// ```
    pub fn as_string(&self, path: &str) -> Result<String> {
        match self {
            ConfigValue::Scalar(Scalar::String(s)) => Ok(s.clone()),
            ConfigValue::Scalar(Scalar::Int(i)) => Ok(i.to_string()),
            ConfigValue::Scalar(Scalar::Float(f)) => Ok(f.to_string()),
            ConfigValue::Scalar(Scalar::Bool(b)) => Ok(b.to_string()),
            other => Err(ConfigError::mismatch(path, "string", other.kind())),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Floats are accepted only when they hold an integral value inside the
    /// `i64` range, which covers sources that decode every number as a float.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedcfg::domain::config_value::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from(3.0).as_i64("k").unwrap(), 3);
    /// assert_eq!(ConfigValue::from("-12").as_i64("k").unwrap(), -12);
    /// assert!(ConfigValue::from(4.6).as_i64("k").is_err());
    /// ```
    pub fn as_i64(&self, path: &str) -> Result<i64> {
        match self {
            ConfigValue::Scalar(Scalar::Int(i)) => Ok(*i),
            ConfigValue::Scalar(Scalar::Float(f)) => integral_float(*f)
                .ok_or_else(|| ConfigError::mismatch(path, "integer", "non-integral float")),
            ConfigValue::Scalar(Scalar::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::mismatch_with(path, "integer", "string", e)),
            other => Err(ConfigError::mismatch(path, "integer", other.kind())),
        }
    }

    /// Converts the value to an `i32`.
    pub fn as_i32(&self, path: &str) -> Result<i32> {
        let value = self.as_i64(path)?;
        i32::try_from(value).map_err(|e| ConfigError::mismatch_with(path, "i32", "int", e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, path: &str) -> Result<u64> {
        let value = self.as_i64(path)?;
        u64::try_from(value).map_err(|e| ConfigError::mismatch_with(path, "u64", "int", e))
    }

    /// Converts the value to an `f64`.
    ///
    /// Integers are widened. Strings are parsed.
    pub fn as_f64(&self, path: &str) -> Result<f64> {
        match self {
            ConfigValue::Scalar(Scalar::Float(f)) => Ok(*f),
            ConfigValue::Scalar(Scalar::Int(i)) => Ok(*i as f64),
            ConfigValue::Scalar(Scalar::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::mismatch_with(path, "float", "string", e)),
            other => Err(ConfigError::mismatch(path, "float", other.kind())),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following strings (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// The integers `1` and `0` are accepted as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedcfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from(true).as_bool("k").unwrap());
    /// assert!(ConfigValue::from("yes").as_bool("k").unwrap());
    /// assert!(!ConfigValue::from(0).as_bool("k").unwrap());
    /// ```
    pub fn as_bool(&self, path: &str) -> Result<bool> {
        match self {
            ConfigValue::Scalar(Scalar::Bool(b)) => Ok(*b),
            ConfigValue::Scalar(Scalar::Int(1)) => Ok(true),
            ConfigValue::Scalar(Scalar::Int(0)) => Ok(false),
            ConfigValue::Scalar(Scalar::String(s)) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => s
                    .parse::<bool>()
                    .map_err(|e| ConfigError::mismatch_with(path, "boolean", "string", e)),
            },
            other => Err(ConfigError::mismatch(path, "boolean", other.kind())),
        }
    }

    /// Parses the string form of the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedcfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.ip").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, path: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let text = self.as_string(path)?;
        text.parse::<T>().map_err(|e| {
            ConfigError::mismatch_with(path, std::any::type_name::<T>(), self.kind(), e)
        })
    }
}

/// Returns the float as an `i64` when the conversion is lossless.
fn integral_float(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::null()
    }
}

impl From<Scalar> for ConfigValue {
    fn from(scalar: Scalar) -> Self {
        ConfigValue::Scalar(scalar)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<u32> for ConfigValue {
    fn from(i: u32) -> Self {
        ConfigValue::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Scalar(Scalar::Float(f))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Scalar(Scalar::String(s))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ConfigValue::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                // u64 beyond i64::MAX and every non-integral number
                None => n.as_f64().map(ConfigValue::from).unwrap_or_default(),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Scalar(Scalar::Null) => write!(f, "null"),
            ConfigValue::Scalar(Scalar::Bool(b)) => write!(f, "{}", b),
            ConfigValue::Scalar(Scalar::Int(i)) => write!(f, "{}", i),
            ConfigValue::Scalar(Scalar::Float(x)) => write!(f, "{}", x),
            ConfigValue::Scalar(Scalar::String(s)) => write!(f, "{}", s),
            ConfigValue::Mapping(_) | ConfigValue::Sequence(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}
