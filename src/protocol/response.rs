//! Response definitions
//!
//! Represents the per-service results returned by the control agent.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known result codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Error,
    Unsupported,
    Empty,
    Other(i64),
}

impl From<i64> for ResultCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResultCode::Success,
            1 => ResultCode::Error,
            2 => ResultCode::Unsupported,
            3 => ResultCode::Empty,
            other => ResultCode::Other(other),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCode::Success => write!(f, "success"),
            ResultCode::Error => write!(f, "error"),
            ResultCode::Unsupported => write!(f, "unsupported"),
            ResultCode::Empty => write!(f, "empty"),
            ResultCode::Other(code) => write!(f, "result {}", code),
        }
    }
}

/// One outcome record of a response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Status code (0 = success)
    #[serde(rename = "result")]
    pub status: i64,

    /// Human-readable message, mostly present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Operation-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl CommandResult {
    /// Create a successful result with optional arguments
    pub fn success(arguments: Option<Value>) -> Self {
        Self {
            status: 0,
            text: None,
            arguments,
        }
    }

    /// Create a failed result carrying a message
    pub fn failure(status: i64, text: impl Into<String>) -> Self {
        Self {
            status,
            text: Some(text.into()),
            arguments: None,
        }
    }

    pub fn code(&self) -> ResultCode {
        ResultCode::from(self.status)
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Message text, empty if the remote sent none
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A result paired with the service it answers for
///
/// `service` is None when the envelope holds more results than the command
/// named services (or none were named).
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResult {
    pub service: Option<String>,
    pub result: CommandResult,
}
