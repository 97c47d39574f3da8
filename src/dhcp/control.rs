//! Control Commands
//!
//! Service-agnostic commands understood by the agent and every server.

use serde_json::Value;

use crate::client::Client;
use crate::error::Result;
use crate::protocol::Command;
use crate::transport::Transport;

/// Build a command optionally addressed to one service
fn command_for(name: &str, service: Option<&str>) -> Command {
    match service {
        Some(service) => Command::new(name).service(service),
        None => Command::new(name),
    }
}

impl<T: Transport> Client<T> {
    /// Names of the commands supported by the agent or by `service`
    pub fn list_commands(&self, host: &str, service: Option<&str>) -> Result<Vec<String>> {
        self.call(host, &command_for("list-commands", service))
    }

    /// Running configuration of the agent or of `service`
    pub fn config_get(&self, host: &str, service: Option<&str>) -> Result<Value> {
        self.call(host, &command_for("config-get", service))
    }

    /// Version string reported by the agent or by `service`
    pub fn version_get(&self, host: &str, service: Option<&str>) -> Result<String> {
        self.call_text(host, &command_for("version-get", service))
    }
}
