//! Tests for the decode module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_page_with_next_token() {
    let body = json!({
        "data": [
            {"transaction_id": "1", "status": "approved"},
            {"transaction_id": "2", "status": "pending"}
        ],
        "meta": {"pagination": {"next": "https://api.example.com/report?page=2"}}
    });

    let page = ReportDecoder::new().decode_value(&body).unwrap();
    assert_eq!(page.records.len(), 2);
    assert!(page.meta.has_next);
    assert_eq!(page.records[0]["transaction_id"], "1");
}

#[test]
fn test_decode_page_without_next_token() {
    let body = json!({
        "data": [{"transaction_id": "1"}],
        "meta": {"pagination": {"total": 1}}
    });

    let page = ReportDecoder::new().decode_value(&body).unwrap();
    assert_eq!(page.records.len(), 1);
    assert!(!page.meta.has_next);
}

#[test]
fn test_decode_empty_page() {
    let body = json!({"data": [], "meta": {"pagination": {}}});

    let page = ReportDecoder::new().decode_value(&body).unwrap();
    assert!(page.records.is_empty());
    assert!(!page.meta.has_next);
}

#[test]
fn test_decode_null_next_still_counts() {
    // Key presence is the signal, not the token value
    let body = json!({"data": [], "meta": {"pagination": {"next": null}}});

    let page = ReportDecoder::new().decode_value(&body).unwrap();
    assert!(page.meta.has_next);
}

#[test]
fn test_decode_missing_data_is_error() {
    let body = json!({"meta": {"pagination": {}}});

    let err = ReportDecoder::new().decode_value(&body).unwrap_err();
    assert!(err.to_string().contains("'data'"));
}

#[test]
fn test_decode_data_not_array_is_error() {
    let body = json!({"data": "oops", "meta": {"pagination": {}}});

    let err = ReportDecoder::new().decode_value(&body).unwrap_err();
    assert!(err.to_string().contains("not an array"));
}

#[test]
fn test_decode_missing_meta_is_error() {
    // An auth failure page must surface, not read as end-of-data
    let body = json!({"data": [], "error": "invalid apiKey"});

    let err = ReportDecoder::new().decode_value(&body).unwrap_err();
    assert!(err.to_string().contains("meta.pagination"));
}

#[test]
fn test_decode_missing_pagination_is_error() {
    let body = json!({"data": [], "meta": {}});

    let err = ReportDecoder::new().decode_value(&body).unwrap_err();
    assert!(err.to_string().contains("meta.pagination"));
}

#[test]
fn test_decode_invalid_json_is_error() {
    let err = ReportDecoder::new().decode("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(err.to_string().contains("not JSON"));
}

#[test]
fn test_decode_from_text_body() {
    let body = r#"{"data": [{"sku": "A-1"}], "meta": {"pagination": {"next": "x"}}}"#;

    let page = ReportDecoder::new().decode(body).unwrap();
    assert_eq!(page.records.len(), 1);
    assert!(page.meta.has_next);
}
