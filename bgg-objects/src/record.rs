//! Read access to decoded response records.
//!
//! The upstream parser hands us `serde_json::Value` trees where every scalar
//! may be a number or a numeric string depending on where it came from.
//! [`Record`] is a borrowed view over one mapping in that tree with typed,
//! lenient readers. It never mutates or validates the data itself; the
//! entity constructors decide which fields are required.

use serde_json::{Map, Value};

use crate::error::InvalidRecordError;
use crate::normalize::{Lenient, fix_unsigned_negative};

/// A borrowed view of one mapping in a decoded response.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    what: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// View `value` as a record. `what` names the record in error messages.
    pub fn new(value: &'a Value, what: &'static str) -> Result<Self, InvalidRecordError> {
        value
            .as_object()
            .map(|fields| Self { what, fields })
            .ok_or_else(|| InvalidRecordError::not_a_mapping(what))
    }

    pub fn from_map(fields: &'a Map<String, Value>, what: &'static str) -> Self {
        Self { what, fields }
    }

    pub fn what(&self) -> &'static str {
        self.what
    }

    /// Raw value for `key`. Null counts as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in input order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.fields.keys().map(String::as_str)
    }

    /// Key/value pairs in input order, nulls included.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Raw value for a key that must be present.
    pub fn attr(&self, key: &'static str) -> Result<&'a Value, InvalidRecordError> {
        self.get(key).ok_or_else(|| InvalidRecordError::missing(key))
    }

    /// Nested mapping under `key`, if present.
    pub fn sub_record(&self, key: &'static str) -> Option<Result<Record<'a>, InvalidRecordError>> {
        self.get(key).map(|v| Record::new(v, key))
    }

    /// Elements of the sequence under `key`. Absent or non-sequence values
    /// yield an empty slice.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn require_int(&self, key: &'static str) -> Result<i64, InvalidRecordError> {
        let raw = self.attr(key)?;
        coerce_int(raw).ok_or_else(|| {
            InvalidRecordError::invalid(key, format!("expected an integer, got {raw}"))
        })
    }

    pub fn require_str(&self, key: &'static str) -> Result<String, InvalidRecordError> {
        let raw = self.attr(key)?;
        coerce_string(raw).ok_or_else(|| {
            InvalidRecordError::invalid(key, format!("expected a string, got {raw}"))
        })
    }

    pub fn opt_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(coerce_string)
    }

    pub fn opt_int(&self, key: &str) -> Option<i64> {
        self.lenient_int(key).value()
    }

    pub fn opt_float(&self, key: &str) -> Option<f64> {
        self.lenient_float(key).value()
    }

    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(coerce_bool)
    }

    pub fn lenient_int(&self, key: &str) -> Lenient<i64> {
        lenient(self.get(key), coerce_int)
    }

    pub fn lenient_float(&self, key: &str) -> Lenient<f64> {
        lenient(self.get(key), coerce_float)
    }

    /// Integer under `key` with the service's unsigned 32-bit encoding of
    /// negative numbers undone.
    pub fn lenient_signed(&self, key: &str) -> Lenient<i64> {
        self.lenient_int(key).and_then(fix_unsigned_negative, || {
            self.get(key).map(raw_text).unwrap_or_default()
        })
    }

    /// Strings under `key` in input order. Numbers are kept as their decimal
    /// text; other element types are skipped.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.list(key).iter().filter_map(coerce_string).collect()
    }
}

fn lenient<T>(raw: Option<&Value>, coerce: fn(&Value) -> Option<T>) -> Lenient<T> {
    match raw {
        None => Lenient::Absent,
        Some(v) => match coerce(v) {
            Some(parsed) => Lenient::Parsed(parsed),
            None => Lenient::Malformed(raw_text(v)),
        },
    }
}

/// Text of a raw value for diagnostics, without JSON quoting for strings.
pub(crate) fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integers, integral floats, and strings holding an integer.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Booleans, integers (non-zero is true), and `"1"`/`"0"`/`"true"`/`"false"`.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(_) => coerce_int(value).map(|i| i != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            other => other.parse::<i64>().ok().map(|i| i != 0),
        },
        _ => None,
    }
}

pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
