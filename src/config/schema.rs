//! Configuration schema definitions.
//!
//! This module defines the resolved runtime configuration for the site.
//! All types derive Serde traits so the resolved value can be rendered
//! for inspection and handed to the build bootstrap as data.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default backend API endpoint.
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8080";
/// Default WordPress REST endpoint.
pub const DEFAULT_WP_API_URL: &str = "http://localhost:8000/wp-json/wp/v2";
/// Default Node API endpoint.
pub const DEFAULT_NODE_API_URL: &str = "http://localhost:3001/api";

/// Root runtime configuration for the site.
///
/// Resolved once at startup and never mutated afterwards; share it behind
/// an `Arc` rather than cloning field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Static assets or a live server.
    pub output: OutputMode,

    /// Packaging of the live-server runtime.
    pub adapter: AdapterMode,

    /// Server bind settings.
    pub server: ServerConfig,

    /// Development server settings.
    pub dev_server: DevServerConfig,

    /// Backend API endpoints.
    pub backends: BackendTargets,
}

/// Whether the framework emits pre-rendered assets or runs a live server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Static,
    #[default]
    Server,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Static => "static",
            OutputMode::Server => "server",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the live-server runtime artifact is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdapterMode {
    /// Self-contained server entrypoint.
    #[default]
    Standalone,
    /// Request handler mounted into a host server.
    Middleware,
}

impl AdapterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterMode::Standalone => "standalone",
            AdapterMode::Middleware => "middleware",
        }
    }
}

impl fmt::Display for AdapterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server bind configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Bind port.
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4321,
        }
    }
}

/// Development server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Host header values the dev server answers to.
    pub allowed_hosts: BTreeSet<String>,

    /// Source file watching.
    pub watch: WatchConfig,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: ["localhost", "127.0.0.1"]
                .into_iter()
                .map(String::from)
                .collect(),
            watch: WatchConfig::default(),
        }
    }
}

/// File watch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Poll the filesystem instead of relying on native notifications.
    pub use_polling: bool,

    /// Poll interval in milliseconds.
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            use_polling: true,
            interval_ms: 1000,
        }
    }
}

/// Backend API endpoints the site talks to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendTargets {
    /// Primary backend API.
    pub backend_api_url: String,

    /// WordPress REST API.
    pub wp_api_url: String,

    /// Node API.
    pub node_api_url: String,
}

impl BackendTargets {
    /// `(name, url)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("backend", self.backend_api_url.as_str()),
            ("wp", self.wp_api_url.as_str()),
            ("node", self.node_api_url.as_str()),
        ]
        .into_iter()
    }
}

impl Default for BackendTargets {
    fn default() -> Self {
        Self {
            backend_api_url: DEFAULT_BACKEND_API_URL.to_string(),
            wp_api_url: DEFAULT_WP_API_URL.to_string(),
            node_api_url: DEFAULT_NODE_API_URL.to_string(),
        }
    }
}
