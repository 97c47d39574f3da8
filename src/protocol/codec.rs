//! Protocol codec
//!
//! Encoding and decoding functions for the JSON envelope.
//!
//! Commands serialize to a single JSON object. Responses are expected as a
//! JSON array of results (one per targeted service), but a bare result
//! object is accepted too and treated as a one-element array.

use serde::Deserialize;

use crate::error::{KeaError, Result};
use super::{Command, CommandResult, ServiceResult};

/// Maximum response body size (16 MB)
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Top-level response shapes accepted on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Many(Vec<CommandResult>),
    One(CommandResult),
}

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to its JSON body
pub fn encode_command(command: &Command) -> Result<Vec<u8>> {
    if command.name.is_empty() {
        return Err(KeaError::Serialization(
            "command name must not be empty".to_string(),
        ));
    }
    Ok(serde_json::to_vec(command)?)
}

/// Decode a command from its JSON body
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let command: Command = serde_json::from_slice(bytes)
        .map_err(|e| KeaError::Decode(format!("malformed command: {}", e)))?;

    if command.name.is_empty() {
        return Err(KeaError::Decode("command name is empty".to_string()));
    }
    Ok(command)
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a list of results as a response body
pub fn encode_response(results: &[CommandResult]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(results)?)
}

/// Decode a response body into its result records
///
/// Fails on malformed JSON, on records without a numeric `result`, and on
/// an empty array.
pub fn decode_response(bytes: &[u8]) -> Result<Vec<CommandResult>> {
    if bytes.len() > MAX_PAYLOAD_SIZE {
        return Err(KeaError::Decode(format!(
            "Response payload too large: {} bytes (max {})",
            bytes.len(),
            MAX_PAYLOAD_SIZE
        )));
    }

    let envelope: Envelope = serde_json::from_slice(bytes).map_err(|e| {
        KeaError::Decode(format!("malformed response envelope: {}", e))
    })?;

    let results = match envelope {
        Envelope::Many(results) => results,
        Envelope::One(result) => vec![result],
    };

    if results.is_empty() {
        return Err(KeaError::Decode("response envelope is empty".to_string()));
    }
    Ok(results)
}

/// Decode a response body and pair each result with the service it answers
///
/// Results are matched to `command.services` by position.
pub fn decode_service_results(command: &Command, bytes: &[u8]) -> Result<Vec<ServiceResult>> {
    let results = decode_response(bytes)?;

    Ok(results
        .into_iter()
        .enumerate()
        .map(|(i, result)| ServiceResult {
            service: command.services.get(i).cloned(),
            result,
        })
        .collect())
}
