//! Report envelope decoding
//!
//! One response body yields the record batch for the current page plus the
//! pagination metadata used to advance the cursor. The reporting API wraps
//! every page as:
//!
//! ```json
//! { "data": [ ...records ], "meta": { "pagination": { "next": "..." } } }
//! ```
//!
//! A body that lacks the `data` array or the `meta.pagination` block is a
//! decode error, never "no more pages" — in practice it means an auth or
//! server error page came back instead of a report.

use crate::error::{Error, Result};
use crate::pagination::PaginationMeta;
use serde_json::Value;

/// One decoded report page
#[derive(Debug, Clone)]
pub struct ReportPage {
    /// Records from the envelope's `data` array, in response order
    pub records: Vec<Value>,
    /// Pagination metadata for the current page
    pub meta: PaginationMeta,
}

/// Decoder for report response envelopes
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportDecoder;

impl ReportDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw response body
    pub fn decode(&self, body: &str) -> Result<ReportPage> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("response body is not JSON: {e}")))?;
        self.decode_value(&value)
    }

    /// Decode an already-parsed response body
    pub fn decode_value(&self, body: &Value) -> Result<ReportPage> {
        let records = match body.get("data") {
            Some(Value::Array(records)) => records.clone(),
            Some(other) => {
                return Err(Error::decode(format!(
                    "'data' is not an array (got {})",
                    json_type_name(other)
                )))
            }
            None => return Err(Error::decode("envelope is missing the 'data' array")),
        };

        let pagination = body
            .get("meta")
            .and_then(|meta| meta.get("pagination"))
            .ok_or_else(|| Error::decode("envelope is missing the 'meta.pagination' block"))?;

        let pagination = pagination.as_object().ok_or_else(|| {
            Error::decode(format!(
                "'meta.pagination' is not an object (got {})",
                json_type_name(pagination)
            ))
        })?;

        // Presence of the key is the signal; the token itself is opaque.
        let meta = PaginationMeta {
            has_next: pagination.contains_key("next"),
        };

        Ok(ReportPage { records, meta })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
