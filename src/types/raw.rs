// src/types/raw.rs
//! Tolerant view over upstream job records. A field with an unexpected JSON
//! type reads as absent instead of failing the whole batch.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub jobs: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Copy)]
pub struct RawJob<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawJob<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// Non-empty string value.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// First non-empty string among `keys`.
    pub fn first_text(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// String value, or the first string of an array value (Jobicy sends
    /// `jobType` and `jobIndustry` both ways).
    pub fn text_or_first(&self, key: &str) -> Option<&'a str> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .find(|s| !s.trim().is_empty()),
            _ => None,
        }
    }

    /// Non-zero number, accepting numeric strings.
    pub fn number(&self, key: &str) -> Option<f64> {
        let n = match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
            _ => None,
        }?;
        (n != 0.0 && n.is_finite()).then_some(n)
    }

    /// String or number rendered as text.
    pub fn scalar_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.scalar_text("id")
    }
}
