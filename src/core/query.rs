//! Query-string encoding for endpoint options.
//!
//! Options records are plain `Serialize` structs. Fields the caller did not set
//! are `None` and skipped with `skip_serializing_if`, so they never reach the
//! query string. `Some(0)` on the other hand is an explicit value and is sent.
//!
//! # Encoding
//!
//! - strings are sent as-is, empty strings are dropped
//! - numbers and booleans use their JSON spelling
//! - `chrono::DateTime<Utc>` values serialize as ISO-8601 (`2022-11-20T16:00:00Z`)
//! - sequences repeat the key once per element
//! - nested objects are rejected
//! - pairs come out sorted by parameter name

use crate::error::{FifaError, Result};
use serde::Serialize;
use serde_json::Value;

/// Ordered `(name, value)` pairs appended to the request URL.
pub type QueryPairs = Vec<(String, String)>;

/// General-purpose helper: any Serialize → flat query pairs
pub trait IntoQueryPairs {
    fn to_query_pairs(&self) -> Result<QueryPairs>;
}

impl<T> IntoQueryPairs for T
where
    T: Serialize + ?Sized,
{
    fn to_query_pairs(&self) -> Result<QueryPairs> {
        let value = serde_json::to_value(self).map_err(|e| FifaError::InvalidQuery {
            message: e.to_string(),
        })?;

        let map = match value {
            Value::Null => return Ok(Vec::new()),
            Value::Object(map) => map,
            other => {
                return Err(FifaError::InvalidQuery {
                    message: format!("expected a key/value object, got {other}"),
                })
            }
        };

        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        push_scalar(&mut pairs, &key, item)?;
                    }
                }
                scalar => push_scalar(&mut pairs, &key, scalar)?,
            }
        }
        Ok(pairs)
    }
}

fn push_scalar(pairs: &mut QueryPairs, key: &str, value: Value) -> Result<()> {
    let encoded = match value {
        Value::Null => return Ok(()),
        Value::String(s) if s.is_empty() => return Ok(()),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => {
            return Err(FifaError::InvalidQuery {
                message: format!("{key} must be a scalar value"),
            })
        }
    };
    pairs.push((key.to_string(), encoded));
    Ok(())
}
