//! HTTP Transport
//!
//! Blocking HTTP exchange with the control agent.

use std::net::Ipv6Addr;

use bytes::Bytes;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::ClientConfig;
use crate::error::{KeaError, Result, TransportError};
use crate::protocol::{encode_command, Command};
use super::Transport;

/// Sends commands as JSON `POST` bodies over HTTP(S)
pub struct HttpTransport {
    /// Underlying HTTP client (carries timeout and user agent)
    http: HttpClient,

    /// Immutable client configuration
    config: ClientConfig,
}

impl HttpTransport {
    /// Build a transport from the client configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = HttpClient::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| KeaError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        target: &str,
        path: Option<&str>,
        command: &Command,
        headers: &[(&str, &str)],
    ) -> Result<Bytes> {
        let url = resolve_url(&self.config, target, path);
        let body = encode_command(command)?;

        tracing::trace!("POST {} body={}", url, String::from_utf8_lossy(&body));

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        if let Some(creds) = &self.config.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.body(body).send().map_err(classify_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!("{} answered HTTP {}", url, status);
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = response.bytes().map_err(classify_error)?;
        tracing::trace!("{} answered {} bytes", url, bytes.len());
        Ok(bytes)
    }
}

/// Map a reqwest failure onto the transport taxonomy
fn classify_error(err: reqwest::Error) -> KeaError {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Unreachable(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    };
    KeaError::Transport(err)
}

/// Resolve the full request URL for a target
///
/// - `host` becomes `{scheme}://host:{port}{path}`
/// - `host:port` keeps its own port
/// - a bare IPv6 literal is bracketed
/// - a target with an explicit scheme is used as the base verbatim
pub fn resolve_url(config: &ClientConfig, target: &str, path: Option<&str>) -> String {
    let path = path.unwrap_or(&config.default_path);
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if target.contains("://") {
        return format!("{}{}", target.trim_end_matches('/'), path);
    }

    let authority = if target.parse::<Ipv6Addr>().is_ok() {
        format!("[{}]:{}", target, config.port)
    } else if has_port(target) {
        target.to_string()
    } else {
        format!("{}:{}", target, config.port)
    };

    format!("{}://{}{}", config.scheme, authority, path)
}

/// True for `host:port` and `[v6]:port`
fn has_port(target: &str) -> bool {
    match target.rsplit_once(':') {
        Some((host, port)) => {
            port.parse::<u16>().is_ok() && (!host.contains(':') || host.ends_with(']'))
        }
        None => false,
    }
}
