//! Key/value persistence used by the ledger.
//!
//! Values are whole collections: every write replaces the previous value
//! under its key. There are no partial updates; `set_many` is the only way
//! to write several keys together.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const RECORDS_KEY: &str = "attendance_records";
pub const STATUS_KEY: &str = "attendance_status";

pub trait Store {
    /// Raw payload stored under `key`.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the raw payload under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Write several keys at once. Stores that can make this atomic should.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> AppResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Stored value for `key`, `None` when missing. A payload that does not
    /// read back as `T` is an error.
    fn try_load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => try_decode(&raw)
                .map(Some)
                .map_err(|source| AppError::Unreadable {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Stored value for `key`, or `default` when it is missing or cannot be
    /// read back as `T`.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        match self.get(key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or(default),
            _ => default,
        }
    }

    /// Serialize `value` and store it under `key`.
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let raw = encode(value)?;
        self.set(key, &raw)
    }
}

/// JSON, except that plain strings are written bare (`checked-in`, not
/// `"checked-in"`).
pub fn encode<T: Serialize>(value: &T) -> AppResult<String> {
    match serde_json::to_value(value)? {
        Value::String(s) => Ok(s),
        other => Ok(serde_json::to_string(&other)?),
    }
}

/// Inverse of [`encode`]: JSON first, then a bare string.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    try_decode(raw).ok()
}

/// Like [`decode`], keeping the JSON error when neither reading works.
pub fn try_decode<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    match serde_json::from_str(raw) {
        Ok(v) => Ok(v),
        Err(e) => serde_json::from_value(Value::String(raw.to_string())).map_err(|_| e),
    }
}
