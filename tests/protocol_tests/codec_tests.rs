//! Codec Tests
//!
//! Tests for command and response encoding/decoding.

use keactl::protocol::{
    decode_command, decode_response, decode_service_results, encode_command,
    encode_response, Command, CommandResult, ResultCode,
};
use keactl::KeaError;
use serde_json::{json, Value};

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_command_wire_keys() {
    let cmd = Command::new("reservation-get-all")
        .service("dhcp4")
        .argument("subnet-id", 100);

    let encoded: Value = serde_json::from_slice(&encode_command(&cmd).unwrap()).unwrap();

    assert_eq!(
        encoded,
        json!({
            "command": "reservation-get-all",
            "service": ["dhcp4"],
            "arguments": { "subnet-id": 100 }
        })
    );
}

#[test]
fn test_encode_command_omits_absent_arguments() {
    let cmd = Command::new("version-get").service("dhcp4");
    let encoded: Value = serde_json::from_slice(&encode_command(&cmd).unwrap()).unwrap();

    assert!(encoded.get("arguments").is_none());
    assert_eq!(encoded["service"], json!(["dhcp4"]));
}

#[test]
fn test_encode_command_omits_empty_services() {
    let cmd = Command::new("list-commands");
    let encoded: Value = serde_json::from_slice(&encode_command(&cmd).unwrap()).unwrap();

    assert_eq!(encoded, json!({ "command": "list-commands" }));
}

#[test]
fn test_encode_command_rejects_empty_name() {
    let cmd = Command::new("");
    assert!(matches!(
        encode_command(&cmd),
        Err(KeaError::Serialization(_))
    ));
}

#[test]
fn test_decode_command() {
    let bytes = br#"{"command":"reservation-del","service":["dhcp4"],"arguments":{"subnet-id":1,"ip-address":"10.0.0.1"}}"#;
    let cmd = decode_command(bytes).unwrap();

    assert_eq!(cmd.name, "reservation-del");
    assert_eq!(cmd.services, vec!["dhcp4".to_string()]);
    assert_eq!(cmd.get_argument("ip-address").unwrap(), "10.0.0.1");
}

#[test]
fn test_decode_command_without_service() {
    let cmd = decode_command(br#"{"command":"list-commands"}"#).unwrap();
    assert!(cmd.services.is_empty());
    assert!(cmd.arguments.is_none());
}

// =============================================================================
// Response Decoding Tests
// =============================================================================

#[test]
fn test_decode_response_array() {
    let bytes = br#"[{"result":0,"text":"ok","arguments":{"hosts":[]}},{"result":1,"text":"bad"}]"#;
    let results = decode_response(bytes).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_success());
    assert_eq!(results[1].status, 1);
    assert_eq!(results[1].text(), "bad");
}

#[test]
fn test_decode_response_bare_object() {
    let results = decode_response(br#"{"result":3,"text":"nothing"}"#).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code(), ResultCode::Empty);
    assert!(results[0].arguments.is_none());
}

#[test]
fn test_decode_response_missing_status() {
    let err = decode_response(br#"[{"text":"no status"}]"#).unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_decode_response_non_numeric_status() {
    let err = decode_response(br#"[{"result":"0"}]"#).unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_decode_response_malformed_json() {
    let err = decode_response(b"[{\"result\":0").unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_decode_response_empty_array() {
    let err = decode_response(b"[]").unwrap_err();
    assert!(matches!(err, KeaError::Decode(_)));
}

#[test]
fn test_decode_response_missing_text_is_empty() {
    let results = decode_response(br#"[{"result":0}]"#).unwrap();
    assert_eq!(results[0].text(), "");
}

#[test]
fn test_encode_response_is_decodable() {
    let results = vec![
        CommandResult::success(Some(json!({ "hosts": [] }))),
        CommandResult::failure(1, "unexpected server error"),
    ];
    let decoded = decode_response(&encode_response(&results).unwrap()).unwrap();

    assert_eq!(decoded, results);
}

// =============================================================================
// Service Pairing Tests
// =============================================================================

#[test]
fn test_service_results_pair_by_position() {
    let cmd = Command::new("config-get").service("dhcp4").service("dhcp6");
    let bytes = br#"[{"result":0},{"result":1,"text":"x"},{"result":0}]"#;

    let results = decode_service_results(&cmd, bytes).unwrap();

    assert_eq!(results[0].service.as_deref(), Some("dhcp4"));
    assert_eq!(results[1].service.as_deref(), Some("dhcp6"));
    assert_eq!(results[2].service, None);
}

#[test]
fn test_result_code_mapping() {
    assert_eq!(ResultCode::from(0), ResultCode::Success);
    assert_eq!(ResultCode::from(1), ResultCode::Error);
    assert_eq!(ResultCode::from(2), ResultCode::Unsupported);
    assert_eq!(ResultCode::from(1001), ResultCode::Other(1001));
    assert_eq!(ResultCode::Other(1001).to_string(), "result 1001");
}
