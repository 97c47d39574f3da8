//! Transport Module
//!
//! Moves an encoded command to a control agent and hands back the raw
//! response body.
//!
//! ## Contract
//! - One synchronous request/response exchange per call; no retries
//! - Returns the full response body on any 2xx status
//! - Network failures and non-2xx statuses become `TransportError`
//! - Never interprets the response content

mod http;

use std::sync::Arc;

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::Command;

pub use http::{resolve_url, HttpTransport};

/// A mechanism to deliver a command to a target and receive the reply bytes
pub trait Transport: Send + Sync {
    /// Send `command` to `target`, using `path` or the configured default.
    fn send(
        &self,
        target: &str,
        path: Option<&str>,
        command: &Command,
        headers: &[(&str, &str)],
    ) -> Result<Bytes>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(
        &self,
        target: &str,
        path: Option<&str>,
        command: &Command,
        headers: &[(&str, &str)],
    ) -> Result<Bytes> {
        (**self).send(target, path, command, headers)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(
        &self,
        target: &str,
        path: Option<&str>,
        command: &Command,
        headers: &[(&str, &str)],
    ) -> Result<Bytes> {
        (**self).send(target, path, command, headers)
    }
}
