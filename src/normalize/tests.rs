//! Tests for the normalize module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

#[test]
fn test_scenario_mixed_record() {
    let mut record = json!({
        "transaction_id": "123",
        "commission": "",
        "status": "approved"
    });

    normalize_record("transactions", &mut record).unwrap();

    assert_eq!(
        record,
        json!({
            "transaction_id": 123,
            "commission": null,
            "status": "approved"
        })
    );
}

#[test_case("transaction_id" ; "transaction id")]
#[test_case("program_id" ; "program id")]
#[test_case("payment_id" ; "payment id")]
#[test_case("advertiser_id" ; "advertiser id")]
#[test_case("creative_id" ; "creative id")]
fn test_integer_fields_cast_from_string(field: &str) {
    let mut record = json!({ field: "42" });
    normalize_record("transactions", &mut record).unwrap();
    assert_eq!(record[field], json!(42));
}

#[test_case("commission" ; "commission")]
#[test_case("sale_amount" ; "sale amount")]
fn test_float_fields_cast_from_string(field: &str) {
    let mut record = json!({ field: "19.99" });
    normalize_record("transactions", &mut record).unwrap();
    assert_eq!(record[field], json!(19.99));
}

#[test_case("transaction_id" ; "integer field")]
#[test_case("commission" ; "float field")]
fn test_empty_string_becomes_null(field: &str) {
    let mut record = json!({ field: "" });
    normalize_record("payments", &mut record).unwrap();
    assert_eq!(record[field], json!(null));
}

#[test_case("transaction_id" ; "integer field")]
#[test_case("sale_amount" ; "float field")]
fn test_null_stays_null(field: &str) {
    let mut record = json!({ field: null });
    normalize_record("payments", &mut record).unwrap();
    assert_eq!(record[field], json!(null));
}

#[test]
fn test_absent_fields_are_not_inserted() {
    let mut record = json!({"sku": "A-1"});
    normalize_record("skus", &mut record).unwrap();
    assert_eq!(record, json!({"sku": "A-1"}));
}

#[test]
fn test_untabled_fields_pass_through() {
    // "quantity" is integer-typed in the sku schema but not in the shared
    // table, so its raw form survives untouched
    let mut record = json!({"quantity": "3", "order_id": "X9", "new_to_file": true});
    normalize_record("skus", &mut record).unwrap();
    assert_eq!(record["quantity"], json!("3"));
    assert_eq!(record["order_id"], json!("X9"));
    assert_eq!(record["new_to_file"], json!(true));
}

#[test]
fn test_integer_to_float_promotion() {
    let mut record = json!({"commission": 5});
    normalize_record("transactions", &mut record).unwrap();
    assert_eq!(record["commission"], json!(5.0));
    assert!(record["commission"].is_f64());
}

#[test]
fn test_idempotence() {
    let mut record = json!({
        "transaction_id": "77",
        "program_id": null,
        "commission": "1.50",
        "sale_amount": "",
        "order_id": "A1"
    });

    normalize_record("transactions", &mut record).unwrap();
    let once = record.clone();
    normalize_record("transactions", &mut record).unwrap();
    assert_eq!(record, once);
}

#[test]
fn test_non_numeric_string_is_data_error() {
    let mut record = json!({"transaction_id": "abc"});
    let err = normalize_record("transactions", &mut record).unwrap_err();

    match err {
        Error::Data {
            stream,
            field,
            expected,
            value,
        } => {
            assert_eq!(stream, "transactions");
            assert_eq!(field, "transaction_id");
            assert_eq!(expected, "integer");
            assert_eq!(value, "abc");
        }
        other => panic!("expected data error, got {other}"),
    }
}

#[test]
fn test_decimal_string_for_integer_field_is_data_error() {
    let mut record = json!({"program_id": "12.5"});
    assert!(normalize_record("transactions", &mut record).is_err());
}

#[test]
fn test_bool_for_numeric_field_is_data_error() {
    let mut record = json!({"commission": true});
    let err = normalize_record("payments", &mut record).unwrap_err();
    assert!(err.to_string().contains("commission"));
}

#[test]
fn test_non_object_record_passes_through() {
    let mut record = json!("not an object");
    normalize_record("transactions", &mut record).unwrap();
    assert_eq!(record, json!("not an object"));
}
