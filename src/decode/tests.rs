//! Tests for decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;

const PAGE: &str = r#"{
  "responseHeader": {
    "status": 0,
    "QTime": 3,
    "params": {"q": "*:*", "cursorMark": "*", "sort": "id asc", "rows": "2"}
  },
  "response": {
    "numFound": 5,
    "start": 0,
    "docs": [
      {"id": "1", "title":  "spaced   out"},
      {"id":"2","tags":["a","b"]}
    ]
  },
  "nextCursorMark": "AoE/Ag=="
}"#;

// ============================================================================
// ResponseFormat Tests
// ============================================================================

#[test]
fn test_response_format_default() {
    assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    assert_eq!(ResponseFormat::Json.as_str(), "json");
    assert_eq!(ResponseFormat::Json.to_string(), "json");
}

#[test]
fn test_response_format_parse_exact_literal_only() {
    assert_eq!("json".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);

    for other in ["JSON", "xml", "csv", " json", ""] {
        let err = other.parse::<ResponseFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }), "{other}");
    }
}

// ============================================================================
// decode_page Tests
// ============================================================================

#[test]
fn test_decode_page() {
    let page = decode_page(PAGE.as_bytes(), ResponseFormat::Json).unwrap();

    assert_eq!(page.header.status, 0);
    assert_eq!(page.header.qtime, 3);
    assert_eq!(page.echoed_cursor_mark(), Some("*"));
    assert_eq!(page.response.num_found, 5);
    assert_eq!(page.response.start, 0);
    assert_eq!(page.doc_count(), 2);
    assert_eq!(page.next_cursor_mark.as_deref(), Some("AoE/Ag=="));
}

#[test]
fn test_decode_page_keeps_documents_verbatim() {
    let page = decode_page(PAGE.as_bytes(), ResponseFormat::Json).unwrap();

    assert_eq!(
        page.response.docs[0].get(),
        r#"{"id": "1", "title":  "spaced   out"}"#
    );
    assert_eq!(page.response.docs[1].get(), r#"{"id":"2","tags":["a","b"]}"#);
}

#[test]
fn test_decode_page_without_header() {
    let body = r#"{"response":{"numFound":0,"start":0,"docs":[]},"nextCursorMark":"*"}"#;
    let page = decode_page(body.as_bytes(), ResponseFormat::Json).unwrap();

    assert_eq!(page.doc_count(), 0);
    assert!(page.echoed_cursor_mark().is_none());
    assert_eq!(page.next_cursor_mark.as_deref(), Some("*"));
}

#[test]
fn test_decode_page_missing_cursor_mark_is_none() {
    let body = r#"{"response":{"numFound":1,"start":0,"docs":[{"id":"1"}]}}"#;
    let page = decode_page(body.as_bytes(), ResponseFormat::Json).unwrap();
    assert!(page.next_cursor_mark.is_none());
}

#[test]
fn test_decode_page_rejects_control_characters() {
    let body = "{\"response\":{\"numFound\":1,\"start\":0,\"docs\":[{\"id\":\"a\rb\"}]},\"nextCursorMark\":\"x\"}";
    let err = decode_page(body.as_bytes(), ResponseFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().starts_with("decode: "));
}

#[test]
fn test_decode_page_rejects_truncated_body() {
    let err = decode_page(br#"{"response":{"docs":[{"id":"#, ResponseFormat::Json).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
