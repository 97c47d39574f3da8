//! # keactl
//!
//! A typed client for the Kea DHCP control agent with:
//! - JSON command envelope encoding/decoding
//! - Blocking HTTP transport with optional basic auth
//! - Classification of remote results (success / not found / failure)
//! - Validated, normalized typed operations for reservations and subnets
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Operation Façade                          │
//! │        (validate → normalize → build Command)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Envelope Codec                            │
//! │                  (Command → JSON bytes)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Transport                               │
//! │              (HTTP POST to target host)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Decode    │ ───────▶ │  Interpret  │
//!   │ (envelope)  │          │  (results)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod interpreter;
pub mod client;
pub mod dhcp;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KeaError, Result, TransportError, ValidationError};
pub use config::{ClientConfig, Credentials};
pub use client::Client;
pub use interpreter::Aggregation;
pub use dhcp::{OptionData, Pool, Relay, RemoteSubnet4, Reservation, SubnetRef};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of keactl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
