//! DHCP Module
//!
//! Typed operations for the DHCPv4 server behind a control agent.
//!
//! ## Operation Pattern
//! 1. Validate identifying fields (errors before any network call)
//! 2. Normalize them to canonical text
//! 3. Build the command for the `dhcp4` service
//! 4. Dispatch through the client pipeline
//! 5. Shape the result (absent, list, or unit)

mod reservation;
mod subnet;
mod control;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use reservation::Reservation;
pub use subnet::{Pool, Relay, RemoteSubnet4, SubnetRef};

/// Service name of the DHCPv4 server
pub const SERVICE_DHCP4: &str = "dhcp4";

/// A DHCP option value attached to a reservation, subnet or pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    #[serde(default)]
    pub data: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_format: Option<bool>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always_send: bool,
}

impl OptionData {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn always_send(mut self) -> Self {
        self.always_send = true;
        self
    }
}
