//! Built-in stream definitions
//!
//! The reporting API exposes three independently-paginated report feeds.
//! All three share the extraction engine and the numeric field table; only
//! the endpoint path and the declared schema differ.

use crate::schema::{FieldType, StreamSchema};

/// One report stream: name, endpoint path, and declared schema
#[derive(Debug, Clone)]
pub struct StreamDescriptor {
    /// Stream name, used to tag emitted records and state entries
    pub name: &'static str,
    /// Endpoint path below the report root
    pub path: &'static str,
    /// Declared field list (descriptive, sink-facing)
    pub schema: StreamSchema,
}

const TRANSACTION_FIELDS: &[(&str, FieldType)] = &[
    ("transaction_id", FieldType::Integer),
    ("status", FieldType::String),
    ("program_id", FieldType::Integer),
    ("order_id", FieldType::String),
    ("commission", FieldType::Number),
    ("creative_type", FieldType::String),
    ("sale_amount", FieldType::Number),
    ("type", FieldType::String),
    ("date", FieldType::DateTime),
    ("new_to_file", FieldType::Boolean),
    ("publisher_referral_url", FieldType::String),
    ("sub_type", FieldType::String),
    ("sid", FieldType::String),
    ("program_name", FieldType::String),
    ("website", FieldType::String),
];

const PAYMENT_FIELDS: &[(&str, FieldType)] = &[
    ("sid", FieldType::String),
    ("program_id", FieldType::Integer),
    ("program_name", FieldType::String),
    ("order_id", FieldType::String),
    ("sale_amount", FieldType::Number),
    ("creative_type", FieldType::String),
    ("payment_id", FieldType::Integer),
    ("transaction_type", FieldType::String),
    ("transaction_id", FieldType::Integer),
    ("payment_date", FieldType::DateTime),
    ("transaction_date", FieldType::DateTime),
    ("commission", FieldType::Number),
];

const SKU_FIELDS: &[(&str, FieldType)] = &[
    ("sku", FieldType::String),
    ("quantity", FieldType::Integer),
    ("status", FieldType::String),
    ("program_id", FieldType::Integer),
    ("order_id", FieldType::String),
    ("commission", FieldType::Number),
    ("date", FieldType::DateTime),
    ("sub_type", FieldType::String),
    ("sale_amount", FieldType::Number),
    ("creative_type", FieldType::String),
    ("advertiser_id", FieldType::Integer),
    ("item_category_name", FieldType::String),
    ("item_name", FieldType::String),
    ("advertiser_name", FieldType::String),
    ("transaction_id", FieldType::Integer),
    ("sid_name", FieldType::String),
    ("transaction_type", FieldType::String),
    ("creative_id", FieldType::Integer),
];

/// Transaction-level report stream
pub fn transactions() -> StreamDescriptor {
    StreamDescriptor {
        name: "transactions",
        path: "/transaction-details",
        schema: StreamSchema::new(TRANSACTION_FIELDS),
    }
}

/// Payment-level report stream
pub fn payments() -> StreamDescriptor {
    StreamDescriptor {
        name: "payments",
        path: "/payment-details",
        schema: StreamSchema::new(PAYMENT_FIELDS),
    }
}

/// SKU-level report stream
pub fn skus() -> StreamDescriptor {
    StreamDescriptor {
        name: "skus",
        path: "/sku-details",
        schema: StreamSchema::new(SKU_FIELDS),
    }
}

/// All streams, in sync order
pub fn all() -> Vec<StreamDescriptor> {
    vec![transactions(), payments(), skus()]
}

/// Look up a stream by name
pub fn find(name: &str) -> Option<StreamDescriptor> {
    all().into_iter().find(|stream| stream.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_paths() {
        assert_eq!(transactions().path, "/transaction-details");
        assert_eq!(payments().path, "/payment-details");
        assert_eq!(skus().path, "/sku-details");
    }

    #[test]
    fn test_all_streams_unique_names() {
        let streams = all();
        assert_eq!(streams.len(), 3);
        let mut names: Vec<_> = streams.iter().map(|s| s.name).collect();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("payments").unwrap().path, "/payment-details");
        assert!(find("clicks").is_none());
    }

    #[test]
    fn test_schema_field_counts() {
        assert_eq!(transactions().schema.fields().len(), 15);
        assert_eq!(payments().schema.fields().len(), 12);
        assert_eq!(skus().schema.fields().len(), 18);
    }
}
