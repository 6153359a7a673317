use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, StewError};

/// Named flag variations with caller-supplied fallbacks.
pub trait FlagSource {
    fn string_variation(&self, key: &str, default: &str) -> String;
    fn bool_variation(&self, key: &str, default: bool) -> bool;
}

/// Source used when no flag service is configured: every read is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFlagSource;

impl FlagSource for OfflineFlagSource {
    fn string_variation(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }

    fn bool_variation(&self, _key: &str, default: bool) -> bool {
        default
    }
}

/// Flags read from a JSON object of `"key": value` pairs.
///
/// Missing keys and values of the wrong type fall back to the default.
#[derive(Debug, Clone, Default)]
pub struct JsonFlagSource {
    values: HashMap<String, Value>,
}

impl JsonFlagSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            other => Err(StewError::FlagSource(format!(
                "expected a JSON object of flags, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl FlagSource for JsonFlagSource {
    fn string_variation(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                tracing::debug!("Flag {} is {}, expected a string", key, json_kind(other));
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    fn bool_variation(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                tracing::debug!("Flag {} is {}, expected a boolean", key, json_kind(other));
                default
            }
            None => default,
        }
    }
}
