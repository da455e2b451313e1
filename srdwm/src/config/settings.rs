//! Free form options addressed by dotted keys such as `general.window_gap`.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingError {
    #[error("Setting key must not be empty")]
    EmptyKey,
    #[error("`{0}` holds a value, it cannot contain other settings")]
    NotATable(String),
}

/// Nested TOML tables, read and written through dotted keys.
///
/// Getters never fail: a missing key or a value of the wrong type yields the
/// default passed by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Settings(Table);

impl Settings {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.0.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_owned()
    }

    #[must_use]
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(Value::as_integer)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Integers are widened, so `gap = 8` reads as `8.0`.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Float(f)) => *f,
            Some(Value::Integer(i)) => *i as f64,
            _ => default,
        }
    }

    /// Stores `value` under `key`, creating the intermediate tables.
    ///
    /// # Errors
    ///
    /// Fails if the key is empty or a prefix of it already holds a value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), SettingError> {
        let mut parts: Vec<&str> = key.split('.').collect();
        let last = match parts.pop() {
            Some(last) if !last.is_empty() => last,
            _ => return Err(SettingError::EmptyKey),
        };
        let mut table = &mut self.0;
        let mut walked = String::new();
        for part in parts {
            if part.is_empty() {
                return Err(SettingError::EmptyKey);
            }
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(part);
            let entry = table
                .entry(part.to_owned())
                .or_insert_with(|| Value::Table(Table::new()));
            table = match entry {
                Value::Table(inner) => inner,
                _ => return Err(SettingError::NotATable(walked)),
            };
        }
        table.insert(last.to_owned(), value.into());
        Ok(())
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), SettingError> {
        self.set(key, value)
    }

    pub fn set_int(&mut self, key: &str, value: i32) -> Result<(), SettingError> {
        self.set(key, i64::from(value))
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<(), SettingError> {
        self.set(key, value)
    }

    pub fn set_float(&mut self, key: &str, value: f64) -> Result<(), SettingError> {
        self.set(key, value)
    }

    /// Every leaf as `(dotted key, value)`, in key order.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, Value)> {
        let mut out = vec![];
        flatten_into(&self.0, "", &mut out);
        out
    }
}

fn flatten_into(table: &Table, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(inner) => flatten_into(inner, &path, out),
            _ => out.push((path, value.clone())),
        }
    }
}
