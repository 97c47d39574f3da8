//! Config Backend Subnets
//!
//! Typed wrappers around the `remote-subnet4-*` commands, which manage
//! subnets stored in the agent's configuration backend.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::client::Client;
use crate::error::Result;
use crate::protocol::Command;
use crate::transport::Transport;
use super::validate::{normalize_ip, normalize_pool, normalize_prefix, require_subnet_id};
use super::{OptionData, SERVICE_DHCP4};

/// An IPv4 subnet definition as stored in the config backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RemoteSubnet4 {
    pub id: u32,

    /// Prefix in `address/len` form
    pub subnet: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pools: Vec<Pool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_data: Vec<OptionData>,

    #[serde(default, skip_serializing_if = "Relay::is_empty")]
    pub relay: Relay,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_context: Option<Map<String, Value>>,
}

/// An address pool inside a subnet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pool {
    /// `first-last` range or `address/len` prefix
    pub pool: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_data: Vec<OptionData>,
}

/// Relay agents allowed to forward traffic for a subnet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Relay {
    #[serde(default)]
    pub ip_addresses: Vec<String>,
}

impl Relay {
    pub fn is_empty(&self) -> bool {
        self.ip_addresses.is_empty()
    }
}

/// Short subnet reference returned by set and list commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubnetRef {
    pub id: u32,

    #[serde(default)]
    pub subnet: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_network_name: Option<String>,
}

impl RemoteSubnet4 {
    /// Validate id, prefix, pools and relay addresses, rewriting each in
    /// canonical form
    pub fn normalize(&mut self) -> Result<()> {
        require_subnet_id(self.id)?;
        self.subnet = normalize_prefix(&self.subnet)?;

        for pool in &mut self.pools {
            pool.pool = normalize_pool(&pool.pool)?;
        }
        for addr in &mut self.relay.ip_addresses {
            *addr = normalize_ip(addr)?;
        }
        Ok(())
    }
}

impl<T: Transport> Client<T> {
    /// Base command for the config backend, carrying the `remote` selector
    fn remote_command(&self, name: &str) -> Command {
        let command = Command::new(name).service(SERVICE_DHCP4);
        match &self.config().remote_type {
            Some(kind) => command.argument("remote", json!({ "type": kind })),
            None => command,
        }
    }

    /// Create or replace subnets in the config backend
    pub fn remote_subnet4_set(&self, host: &str, subnets: &[RemoteSubnet4]) -> Result<Vec<SubnetRef>> {
        let mut subnets = subnets.to_vec();
        for subnet in &mut subnets {
            subnet.normalize()?;
        }

        let command = self
            .remote_command("remote-subnet4-set")
            .argument("server-tags", self.config().server_tags.clone())
            .argument("subnets", serde_json::to_value(&subnets)?);

        self.call_list(host, &command, "subnets")
    }

    /// List the subnets stored in the config backend
    pub fn remote_subnet4_list(&self, host: &str) -> Result<Vec<SubnetRef>> {
        let command = self
            .remote_command("remote-subnet4-list")
            .argument("server-tags", self.config().server_tags.clone());

        self.call_list_or_empty(host, &command, "subnets")
    }

    /// Fetch one subnet by id; `Ok(None)` when it does not exist
    pub fn remote_subnet4_get_by_id(&self, host: &str, id: u32) -> Result<Option<RemoteSubnet4>> {
        require_subnet_id(id)?;

        let command = self
            .remote_command("remote-subnet4-get-by-id")
            .argument("subnets", json!([{ "id": id }]));

        let subnets: Vec<RemoteSubnet4> = self.call_list_or_empty(host, &command, "subnets")?;
        Ok(subnets.into_iter().next())
    }

    /// Delete one subnet by id
    pub fn remote_subnet4_del_by_id(&self, host: &str, id: u32) -> Result<()> {
        require_subnet_id(id)?;

        let command = self
            .remote_command("remote-subnet4-del-by-id")
            .argument("subnets", json!([{ "id": id }]));

        self.call_unit(host, &command)
    }
}
