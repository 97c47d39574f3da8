//! Command definitions
//!
//! A command names a remote operation, the services it is addressed to and
//! an optional argument map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument payload of a command
pub type Arguments = Map<String, Value>;

/// A single control command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Remote operation name, e.g. "reservation-add"
    #[serde(rename = "command")]
    pub name: String,

    /// Target services; always a list, omitted when empty
    #[serde(rename = "service", default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    /// Operation-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Arguments>,
}

impl Command {
    /// Create a command with no services and no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: Vec::new(),
            arguments: None,
        }
    }

    /// Address the command to one more service
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.services.push(service.into());
        self
    }

    /// Add a single argument
    pub fn argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up an argument by key
    pub fn get_argument(&self, key: &str) -> Option<&Value> {
        self.arguments.as_ref().and_then(|args| args.get(key))
    }
}
