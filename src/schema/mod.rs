//! Stream schema declarations
//!
//! Each stream carries a fixed ordered list of `(field, declared type)`
//! pairs. The schema is descriptive metadata for the downstream consumer;
//! records are not validated against it in-core.

use serde_json::{json, Map, Value};

/// Declared type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    DateTime,
}

impl FieldType {
    /// JSON Schema type name
    pub fn json_type(self) -> &'static str {
        match self {
            Self::String | Self::DateTime => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// JSON Schema format hint, where one applies
    pub fn format(self) -> Option<&'static str> {
        match self {
            Self::DateTime => Some("date-time"),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateTime => write!(f, "date-time"),
            other => write!(f, "{}", other.json_type()),
        }
    }
}

/// Ordered field declarations for one stream
#[derive(Debug, Clone)]
pub struct StreamSchema {
    fields: &'static [(&'static str, FieldType)],
}

impl StreamSchema {
    /// Create a schema from a static field list
    pub const fn new(fields: &'static [(&'static str, FieldType)]) -> Self {
        Self { fields }
    }

    /// The declared fields, in declaration order
    pub fn fields(&self) -> &'static [(&'static str, FieldType)] {
        self.fields
    }

    /// Render as a JSON Schema object for the sink
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        for &(name, field_type) in self.fields {
            let mut property = Map::new();
            property.insert(
                "type".to_string(),
                json!([field_type.json_type(), "null"]),
            );
            if let Some(format) = field_type.format() {
                property.insert("format".to_string(), json!(format));
            }
            properties.insert(name.to_string(), Value::Object(property));
        }
        json!({ "type": "object", "properties": properties })
    }
}
