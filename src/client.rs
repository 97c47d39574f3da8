//! Client Module
//!
//! The operation façade. Every typed operation runs the same linear
//! pipeline:
//!
//! ```text
//! validate → normalize → build Command → Transport::send
//!          → decode envelope → interpret → typed value / error
//! ```
//!
//! The client holds only immutable state (config and transport), so one
//! instance can serve any number of concurrent callers.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{KeaError, Result};
use crate::interpreter::{self, Aggregation};
use crate::protocol::{decode_service_results, Command, ServiceResult};
use crate::transport::{HttpTransport, Transport};

/// A control agent client
pub struct Client<T: Transport = HttpTransport> {
    /// Delivers commands to targets
    transport: T,

    /// Configuration fixed at construction
    config: ClientConfig,

    /// Policy for commands answered by several services
    aggregation: Aggregation,
}

impl Client<HttpTransport> {
    /// Create a client talking HTTP to control agents
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            aggregation: Aggregation::default(),
        }
    }

    /// Replace the multi-service aggregation policy
    pub fn aggregation(mut self, policy: Aggregation) -> Self {
        self.aggregation = policy;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Dispatch Pipeline
    // =========================================================================

    /// Send a command and return the decoded per-service results
    pub fn execute(
        &self,
        host: &str,
        path: Option<&str>,
        command: &Command,
        headers: &[(&str, &str)],
    ) -> Result<Vec<ServiceResult>> {
        tracing::debug!(
            "{} -> {} (services: {:?})",
            command.name,
            host,
            command.services
        );

        let body = self.transport.send(host, path, command, headers)?;
        decode_service_results(command, &body)
    }

    /// Send a command and decode its arguments into `R`
    pub fn call<R>(&self, host: &str, command: &Command) -> Result<R>
    where
        R: DeserializeOwned + Default,
    {
        let results = self.execute(host, None, command, &[])?;
        interpreter::interpret(&results, &self.aggregation)
    }

    /// Send a command and decode the list stored under `key`
    pub fn call_list<R>(&self, host: &str, command: &Command, key: &str) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        let results = self.execute(host, None, command, &[])?;
        interpreter::interpret_list(&results, key, &self.aggregation)
    }

    /// Like [`call`](Self::call), folding not-found into `None`
    pub fn call_optional<R>(&self, host: &str, command: &Command) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        match self.call::<Option<R>>(host, command) {
            Err(KeaError::NotFound(text)) => {
                tracing::debug!("{} on {}: {}", command.name, host, text);
                Ok(None)
            }
            other => other,
        }
    }

    /// Like [`call_list`](Self::call_list), folding not-found into an empty list
    pub fn call_list_or_empty<R>(&self, host: &str, command: &Command, key: &str) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        match self.call_list(host, command, key) {
            Err(KeaError::NotFound(text)) => {
                tracing::debug!("{} on {}: {}", command.name, host, text);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Send a mutating command; success carries no value
    pub fn call_unit(&self, host: &str, command: &Command) -> Result<()> {
        let results = self.execute(host, None, command, &[])?;
        let result = self.aggregation.select(&results)?;
        interpreter::classify(result)?;
        Ok(())
    }

    /// Send a command and return the deciding result's message text
    pub fn call_text(&self, host: &str, command: &Command) -> Result<String> {
        let results = self.execute(host, None, command, &[])?;
        let result = self.aggregation.select(&results)?;
        interpreter::classify(result)?;
        Ok(result.text().to_string())
    }
}
