//! Result Interpreter
//!
//! Turns decoded per-service results into typed values or classified errors.
//!
//! ## Aggregation
//! A command fanned out to several services yields one result per service.
//! Which of them decides the outcome is an explicit [`Aggregation`] policy;
//! the default consults only the first result and ignores the rest, since
//! nearly every operation targets a single service.
//!
//! ## Classification
//! - `status == 0`: success; `arguments` decode into the requested shape,
//!   missing arguments yield the shape's default value
//! - `status != 0` and the text carries the not-found marker: `NotFound`
//! - any other non-zero status: `Remote` with the remote message

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{KeaError, Result};
use crate::protocol::{CommandResult, ServiceResult};

/// Substring the control agent puts in messages for missing entities
///
/// The agent has no machine-readable not-found code, so this is matched
/// against the free-text message. The wording belongs to the server and may
/// change between releases; keep the match in [`is_not_found`] only.
pub const NOT_FOUND_MARKER: &str = "not found";

/// Which result of a fanned-out command decides the outcome
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Aggregation {
    /// Consult the first result, ignore the others
    #[default]
    First,

    /// Consult the result paired with the named service
    Service(String),
}

impl Aggregation {
    /// Pick the deciding result
    pub fn select<'a>(&self, results: &'a [ServiceResult]) -> Result<&'a CommandResult> {
        match self {
            Aggregation::First => results
                .first()
                .map(|r| &r.result)
                .ok_or_else(|| KeaError::Decode("response envelope is empty".to_string())),
            Aggregation::Service(name) => results
                .iter()
                .find(|r| r.service.as_deref() == Some(name.as_str()))
                .map(|r| &r.result)
                .ok_or_else(|| {
                    KeaError::Decode(format!("no result for service {:?}", name))
                }),
        }
    }
}

/// True when a failure message denotes a missing entity
pub fn is_not_found(text: &str) -> bool {
    text.contains(NOT_FOUND_MARKER)
}

/// Classify a single result
///
/// Returns the arguments payload on success (None when absent).
pub fn classify(result: &CommandResult) -> Result<Option<&Value>> {
    if result.is_success() {
        return Ok(result.arguments.as_ref().filter(|v| !v.is_null()));
    }

    let text = result.text();
    if is_not_found(text) {
        return Err(KeaError::NotFound(text.to_string()));
    }

    tracing::warn!("remote operation failed ({}): {}", result.code(), text);
    Err(KeaError::Remote {
        code: result.status,
        text: text.to_string(),
    })
}

/// Decode the deciding result's arguments into `T`
pub fn interpret<T>(results: &[ServiceResult], policy: &Aggregation) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let result = policy.select(results)?;
    match classify(result)? {
        Some(arguments) => decode_value(arguments),
        None => Ok(T::default()),
    }
}

/// Decode the list stored under `key` in the deciding result's arguments
///
/// A missing payload or a missing key yields an empty list.
pub fn interpret_list<T>(results: &[ServiceResult], key: &str, policy: &Aggregation) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let result = policy.select(results)?;
    match classify(result)?.and_then(|arguments| arguments.get(key)) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(list) => decode_value(list),
    }
}

/// Decode a structured value into the caller's shape
fn decode_value<T: DeserializeOwned>(value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| KeaError::Decode(format!("unexpected arguments: {}", e)))
}
