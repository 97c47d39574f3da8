//! Host Reservations
//!
//! Typed wrappers around the `reservation-*` commands of the host
//! commands hook library.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::{Result, ValidationError};
use crate::protocol::Command;
use crate::transport::Transport;
use super::validate::{normalize_ip, normalize_mac, parse_ip, require_subnet_id};
use super::{OptionData, SERVICE_DHCP4};

/// A single host reservation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub boot_file_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub circuit_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flex_id: String,

    #[serde(default)]
    pub ip_address: String,

    #[serde(default)]
    pub hw_address: String,

    #[serde(default)]
    pub hostname: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_server: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_data: Vec<OptionData>,

    #[serde(default)]
    pub subnet_id: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_context: Option<Map<String, Value>>,
}

impl Reservation {
    /// Validate the identifying fields and rewrite them in canonical form
    ///
    /// Normalizing an already normalized reservation changes nothing.
    pub fn normalize(&mut self) -> Result<()> {
        self.ip_address = normalize_ip(&self.ip_address)?;
        self.hw_address = normalize_mac(&self.hw_address)?;
        Ok(())
    }
}

impl<T: Transport> Client<T> {
    /// Fetch every reservation of a subnet
    ///
    /// A subnet without reservations yields an empty list.
    pub fn reservation_get_all(&self, host: &str, subnet_id: u32) -> Result<Vec<Reservation>> {
        let command = Command::new("reservation-get-all")
            .service(SERVICE_DHCP4)
            .argument("subnet-id", subnet_id);

        self.call_list_or_empty(host, &command, "hosts")
    }

    /// Fetch one reservation by IP address or hardware address
    ///
    /// Returns `Ok(None)` when the agent reports no such reservation.
    pub fn reservation_get(
        &self,
        host: &str,
        ip_or_mac: &str,
        subnet_id: u32,
    ) -> Result<Option<Reservation>> {
        let command = Command::new("reservation-get")
            .service(SERVICE_DHCP4)
            .argument("subnet-id", subnet_id);

        let command = if let Ok(ip) = parse_ip(ip_or_mac) {
            command.argument("ip-address", ip.to_string())
        } else if let Ok(mac) = normalize_mac(ip_or_mac) {
            command
                .argument("identifier-type", "hw-address")
                .argument("identifier", mac)
        } else {
            return Err(ValidationError::InvalidIdentifier(format!(
                "{:?} is neither an IP address nor a hardware address",
                ip_or_mac
            ))
            .into());
        };

        self.call_optional(host, &command)
    }

    /// Add a reservation
    pub fn reservation_add(&self, host: &str, mut reservation: Reservation) -> Result<()> {
        reservation.normalize()?;

        let command = Command::new("reservation-add")
            .service(SERVICE_DHCP4)
            .argument("reservation", serde_json::to_value(&reservation)?);

        self.call_unit(host, &command)
    }

    /// Replace an existing reservation
    pub fn reservation_update(&self, host: &str, mut reservation: Reservation) -> Result<()> {
        reservation.normalize()?;
        require_subnet_id(reservation.subnet_id)?;

        let command = Command::new("reservation-update")
            .service(SERVICE_DHCP4)
            .argument("reservation", serde_json::to_value(&reservation)?);

        self.call_unit(host, &command)
    }

    /// Delete the reservation holding `ip_address` in a subnet
    pub fn reservation_del(&self, host: &str, ip_address: &str, subnet_id: u32) -> Result<()> {
        let ip_address = normalize_ip(ip_address)?;

        let command = Command::new("reservation-del")
            .service(SERVICE_DHCP4)
            .argument("subnet-id", subnet_id)
            .argument("ip-address", ip_address);

        self.call_unit(host, &command)
    }
}
