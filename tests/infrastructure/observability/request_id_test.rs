use kordon::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_valid_header_when_building_request_id_then_value_is_kept() {
    let request_id = RequestId::from_header(Some("update-123"));
    assert_eq!(request_id.as_str(), "update-123");
}

#[test]
fn given_missing_header_when_building_request_id_then_uuid_is_generated() {
    let request_id = RequestId::from_header(None);
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_header_with_spaces_when_building_request_id_then_it_is_replaced() {
    let request_id = RequestId::from_header(Some("evil value\n"));
    assert_ne!(request_id.as_str(), "evil value\n");
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_oversized_header_when_building_request_id_then_it_is_replaced() {
    let long = "a".repeat(129);
    let request_id = RequestId::from_header(Some(&long));
    assert_ne!(request_id.as_str(), long);
}
