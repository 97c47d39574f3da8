//! Configuration for keactl
//!
//! Centralized client configuration with sensible defaults. A config is
//! built once, handed to the client at construction and never mutated
//! afterwards, so concurrent callers can share it without locking.

use std::fmt;
use std::time::Duration;

/// Main configuration for a keactl client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// URL scheme used to reach the control agent ("http" or "https")
    pub scheme: String,

    /// Control agent port, appended when the target carries none
    pub port: u16,

    /// Request path used when an operation does not supply one
    pub default_path: String,

    /// Whole-request timeout (milliseconds, 0 disables)
    pub timeout_ms: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY / NO_PROXY from the environment
    pub system_proxy: bool,

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------
    /// Basic auth credentials applied to every request
    pub credentials: Option<Credentials>,

    // -------------------------------------------------------------------------
    // Configuration Backend
    // -------------------------------------------------------------------------
    /// Server tags attached to remote-* (config backend) commands
    pub server_tags: Vec<String>,

    /// Config backend type (e.g. "mysql"); omitted from commands when unset
    pub remote_type: Option<String>,
}

/// Basic authentication credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            port: 8000,
            default_path: "/".to_string(),
            timeout_ms: 10_000,
            user_agent: format!("keactl/{}", env!("CARGO_PKG_VERSION")),
            system_proxy: true,
            credentials: None,
            server_tags: vec!["all".to_string()],
            remote_type: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Request timeout as a Duration, None when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the URL scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.scheme = scheme.into();
        self
    }

    /// Set the control agent port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the default request path
    pub fn default_path(mut self, path: impl Into<String>) -> Self {
        self.config.default_path = path.into();
        self
    }

    /// Set the request timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable or disable proxies taken from the environment
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.config.system_proxy = enabled;
        self
    }

    /// Enable basic authentication
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Set the server tags used for config backend commands
    pub fn server_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.server_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the config backend type
    pub fn remote_type(mut self, kind: impl Into<String>) -> Self {
        self.config.remote_type = Some(kind.into());
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
