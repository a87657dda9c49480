//! Field normalization
//!
//! Raw report records arrive with numeric fields encoded as strings (and
//! empty strings where a value is absent). A fixed field→type table coerces
//! those into typed values or null before a record is emitted. The table is
//! shared across all three streams on purpose: a field a stream never
//! produces simply never matches.

use crate::error::{Error, Result};
use serde_json::{Number, Value};

/// Target type for a normalized field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// Whole-number identifier fields
    Integer,
    /// Monetary amount fields
    Float,
}

impl NumericType {
    fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

/// The shared field→type table applied to every stream's records
pub const NUMERIC_FIELDS: &[(&str, NumericType)] = &[
    ("transaction_id", NumericType::Integer),
    ("program_id", NumericType::Integer),
    ("commission", NumericType::Float),
    ("sale_amount", NumericType::Float),
    ("payment_id", NumericType::Integer),
    ("advertiser_id", NumericType::Integer),
    ("creative_id", NumericType::Integer),
];

/// Normalize one record in place
///
/// For each table field present in the record: empty string or null becomes
/// null; values already of the target type are left untouched; everything
/// else is cast. A value with no numeric reading is a data error carrying
/// the stream, field, and raw value — malformed numerics indicate an
/// upstream contract violation worth surfacing, not nulling out.
///
/// Fields absent from the table pass through unchanged, including their
/// original type. Applying this twice is a no-op.
pub fn normalize_record(stream: &str, record: &mut Value) -> Result<()> {
    let Some(object) = record.as_object_mut() else {
        return Ok(());
    };

    for &(field, target) in NUMERIC_FIELDS {
        let Some(value) = object.get(field) else {
            continue;
        };

        let normalized = coerce(value, target)
            .ok_or_else(|| Error::data(stream, field, target.name(), render_raw(value)))?;
        object.insert(field.to_string(), normalized);
    }

    Ok(())
}

/// Coerce a single value to the target type, `None` if it has no reading
fn coerce(value: &Value, target: NumericType) -> Option<Value> {
    match value {
        Value::Null => Some(Value::Null),
        Value::String(s) if s.is_empty() => Some(Value::Null),
        Value::String(s) => match target {
            NumericType::Integer => s.trim().parse::<i64>().ok().map(Value::from),
            NumericType::Float => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number),
        },
        Value::Number(n) => match target {
            NumericType::Integer => {
                if n.is_i64() || n.is_u64() {
                    Some(value.clone())
                } else {
                    // Whole-valued floats collapse to the identifier they encode
                    let f = n.as_f64()?;
                    if f.fract() == 0.0 {
                        Some(Value::from(f as i64))
                    } else {
                        None
                    }
                }
            }
            NumericType::Float => {
                if n.is_f64() {
                    Some(value.clone())
                } else {
                    n.as_f64().and_then(Number::from_f64).map(Value::Number)
                }
            }
        },
        _ => None,
    }
}

fn render_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests;
