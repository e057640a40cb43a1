use axum::http::HeaderValue;

use voxbridge::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_header_when_building_request_id_then_reuses_it() {
    let header = HeaderValue::from_static("abc-123");

    let request_id = RequestId::from_header(Some(&header));

    assert_eq!(request_id.as_str(), "abc-123");
}

#[test]
fn given_no_header_when_building_request_id_then_generates_uuid() {
    let request_id = RequestId::from_header(None);

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_blank_header_when_building_request_id_then_generates_fresh_one() {
    let header = HeaderValue::from_static("   ");

    let request_id = RequestId::from_header(Some(&header));

    assert!(!request_id.as_str().trim().is_empty());
    assert_ne!(request_id.as_str(), "   ");
}
