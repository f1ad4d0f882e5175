//! Typed option values.
//!
//! An option line's value is whatever strict JSON makes of it; anything JSON
//! rejects is kept as the trimmed raw text in [`OptionValue::String`].

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::number::format_canonical_f64;

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::I64(i) => i as f64,
            Number::U64(u) => u as f64,
            Number::F64(f) => f,
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) => f.write_str(&format_canonical_f64(*num)),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else {
            // serde_json only hands out finite floats
            Number::F64(n.as_f64().unwrap_or(0.0))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "serde_json::Value"))]
pub enum OptionValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<OptionValue>),
    Object(Vec<(String, OptionValue)>),
}

impl OptionValue {
    /// Strict JSON first, trimmed raw text otherwise.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(v) => OptionValue::from(v),
            Err(e) => {
                tracing::trace!(raw, error = %e, "option value is not JSON, keeping text");
                OptionValue::String(raw.trim().to_string())
            }
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            OptionValue::Null | OptionValue::Bool(_) | OptionValue::Number(_) | OptionValue::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OptionValue::Null => serde_json::Value::Null,
            OptionValue::Bool(b) => serde_json::Value::Bool(*b),
            OptionValue::Number(Number::I64(i)) => serde_json::Value::from(*i),
            OptionValue::Number(Number::U64(u)) => serde_json::Value::from(*u),
            OptionValue::Number(Number::F64(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            OptionValue::String(s) => serde_json::Value::String(s.clone()),
            OptionValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(OptionValue::to_json).collect())
            }
            OptionValue::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => OptionValue::Null,
            serde_json::Value::Bool(b) => OptionValue::Bool(b),
            serde_json::Value::Number(n) => OptionValue::Number(Number::from(&n)),
            serde_json::Value::String(s) => OptionValue::String(s),
            serde_json::Value::Array(items) => {
                OptionValue::Array(items.into_iter().map(OptionValue::from).collect())
            }
            serde_json::Value::Object(map) => OptionValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, OptionValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        if i >= 0 {
            OptionValue::Number(Number::U64(i as u64))
        } else {
            OptionValue::Number(Number::I64(i))
        }
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        OptionValue::Number(Number::F64(f))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(i) => serializer.serialize_i64(i),
            Number::U64(u) => serializer.serialize_u64(u),
            Number::F64(f) => serializer.serialize_f64(f),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Null => serializer.serialize_unit(),
            OptionValue::Bool(b) => serializer.serialize_bool(*b),
            OptionValue::Number(n) => n.serialize(serializer),
            OptionValue::String(s) => serializer.serialize_str(s),
            OptionValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            OptionValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_numbers_become_numbers() {
        assert_eq!(OptionValue::from_raw(" 700"), OptionValue::Number(Number::U64(700)));
        assert_eq!(OptionValue::from_raw("-3"), OptionValue::Number(Number::I64(-3)));
        assert_eq!(OptionValue::from_raw(" 1.5 "), OptionValue::Number(Number::F64(1.5)));
    }

    #[test]
    fn raw_text_falls_back_to_trimmed_string() {
        assert_eq!(
            OptionValue::from_raw(" Monthly Revenue "),
            OptionValue::String("Monthly Revenue".to_string())
        );
        // leading zeros are not strict JSON
        assert_eq!(OptionValue::from_raw(" 007"), OptionValue::String("007".to_string()));
    }

    #[test]
    fn raw_json_literals_and_containers() {
        assert_eq!(OptionValue::from_raw(" true"), OptionValue::Bool(true));
        assert_eq!(OptionValue::from_raw(" null"), OptionValue::Null);
        assert_eq!(
            OptionValue::from_raw(r#" "quoted""#),
            OptionValue::String("quoted".to_string())
        );
        assert_eq!(
            OptionValue::from_raw(r#" {"b": 1, "a": [2]}"#),
            OptionValue::Object(vec![
                ("b".to_string(), OptionValue::Number(Number::U64(1))),
                (
                    "a".to_string(),
                    OptionValue::Array(vec![OptionValue::Number(Number::U64(2))])
                ),
            ])
        );
    }

    #[test]
    fn to_json_keeps_object_order() {
        let v = OptionValue::from_raw(r#"{"z": 1, "a": 2}"#);
        let json = serde_json::to_string(&v.to_json()).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }
}
