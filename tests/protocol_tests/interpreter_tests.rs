//! Interpreter Tests
//!
//! Tests for result classification, aggregation and argument decoding.

use keactl::interpreter::{classify, interpret, interpret_list, is_not_found, Aggregation};
use keactl::protocol::{CommandResult, ServiceResult};
use keactl::KeaError;
use serde::Deserialize;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn paired(results: Vec<(Option<&str>, CommandResult)>) -> Vec<ServiceResult> {
    results
        .into_iter()
        .map(|(service, result)| ServiceResult {
            service: service.map(str::to_string),
            result,
        })
        .collect()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Lease {
    #[serde(rename = "ip-address")]
    ip_address: String,
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_not_found_marker() {
    assert!(is_not_found("Host not found."));
    assert!(is_not_found("IPv4 subnet 5 not found"));
    assert!(!is_not_found("unexpected server error"));
    assert!(!is_not_found(""));
}

#[test]
fn test_classify_success_with_arguments() {
    let result = CommandResult::success(Some(json!({ "a": 1 })));
    assert_eq!(classify(&result).unwrap(), Some(&json!({ "a": 1 })));
}

#[test]
fn test_classify_success_null_arguments() {
    let result = CommandResult::success(Some(serde_json::Value::Null));
    assert_eq!(classify(&result).unwrap(), None);
}

#[test]
fn test_classify_not_found() {
    let result = CommandResult::failure(1001, "reservation not found");
    match classify(&result) {
        Err(KeaError::NotFound(text)) => assert_eq!(text, "reservation not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_classify_remote_failure() {
    let result = CommandResult::failure(1, "unexpected server error");
    match classify(&result) {
        Err(KeaError::Remote { code, text }) => {
            assert_eq!(code, 1);
            assert_eq!(text, "unexpected server error");
        }
        other => panic!("Expected Remote, got {:?}", other),
    }
}

#[test]
fn test_classify_failure_without_text_is_remote() {
    let result = CommandResult {
        status: 2,
        text: None,
        arguments: None,
    };
    assert!(matches!(classify(&result), Err(KeaError::Remote { code: 2, .. })));
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_interpret_decodes_arguments() {
    let results = paired(vec![(
        Some("dhcp4"),
        CommandResult::success(Some(json!({ "ip-address": "10.0.0.1" }))),
    )]);

    let lease: Lease = interpret(&results, &Aggregation::First).unwrap();
    assert_eq!(lease.ip_address, "10.0.0.1");
}

#[test]
fn test_interpret_missing_arguments_yields_default() {
    let results = paired(vec![(Some("dhcp4"), CommandResult::success(None))]);

    let lease: Lease = interpret(&results, &Aggregation::First).unwrap();
    assert_eq!(lease, Lease::default());
}

#[test]
fn test_interpret_shape_mismatch_is_decode_error() {
    let results = paired(vec![(
        Some("dhcp4"),
        CommandResult::success(Some(json!({ "ip-address": 42 }))),
    )]);

    let err = interpret::<Lease>(&results, &Aggregation::First).unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_interpret_list_extracts_key_in_order() {
    let results = paired(vec![(
        Some("dhcp4"),
        CommandResult::success(Some(json!({
            "count": 3,
            "hosts": [
                { "ip-address": "10.0.0.3" },
                { "ip-address": "10.0.0.1" },
                { "ip-address": "10.0.0.2" }
            ]
        }))),
    )]);

    let hosts: Vec<Lease> = interpret_list(&results, "hosts", &Aggregation::First).unwrap();
    let ips: Vec<_> = hosts.iter().map(|h| h.ip_address.as_str()).collect();
    assert_eq!(ips, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
}

#[test]
fn test_interpret_list_missing_key_is_empty() {
    let results = paired(vec![(
        Some("dhcp4"),
        CommandResult::success(Some(json!({ "count": 0 }))),
    )]);

    let hosts: Vec<Lease> = interpret_list(&results, "hosts", &Aggregation::First).unwrap();
    assert!(hosts.is_empty());
}

#[test]
fn test_interpret_list_propagates_not_found() {
    let results = paired(vec![(
        Some("dhcp4"),
        CommandResult::failure(1001, "subnet not found"),
    )]);

    let err = interpret_list::<Lease>(&results, "hosts", &Aggregation::First).unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// Aggregation Tests
// =============================================================================

#[test]
fn test_first_policy_ignores_later_results() {
    let results = paired(vec![
        (Some("dhcp4"), CommandResult::success(None)),
        (Some("dhcp6"), CommandResult::failure(1, "unexpected server error")),
    ]);

    let lease: Lease = interpret(&results, &Aggregation::First).unwrap();
    assert_eq!(lease, Lease::default());
}

#[test]
fn test_service_policy_selects_named_result() {
    let results = paired(vec![
        (Some("dhcp4"), CommandResult::success(None)),
        (Some("dhcp6"), CommandResult::failure(1, "unexpected server error")),
    ]);

    let err = interpret::<Lease>(&results, &Aggregation::Service("dhcp6".to_string())).unwrap_err();
    assert!(matches!(err, KeaError::Remote { code: 1, .. }));
}

#[test]
fn test_service_policy_missing_service() {
    let results = paired(vec![(Some("dhcp4"), CommandResult::success(None))]);

    let err = interpret::<Lease>(&results, &Aggregation::Service("d2".to_string())).unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_first_policy_on_empty_results() {
    let err = interpret::<Lease>(&[], &Aggregation::First).unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}
