//! Protocol Module
//!
//! Defines the JSON command envelope spoken by the control agent.
//!
//! ## Request Format
//! ```text
//! {
//!   "command":   "reservation-get",      // operation name (required)
//!   "service":   ["dhcp4"],              // target services (omitted if none)
//!   "arguments": { "subnet-id": 100 }    // payload (omitted if none)
//! }
//! ```
//!
//! ## Response Format
//! One result per targeted service, normally as an array:
//! ```text
//! [
//!   { "result": 0, "text": "...", "arguments": { ... } }
//! ]
//! ```
//!
//! ### Result Codes
//! - 0: SUCCESS
//! - 1: ERROR
//! - 2: UNSUPPORTED
//! - 3: EMPTY

mod command;
mod response;
mod codec;

pub use command::{Command, Arguments};
pub use response::{CommandResult, ResultCode, ServiceResult};
pub use codec::{
    encode_command, decode_command,
    encode_response, decode_response,
    decode_service_results,
};
