use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;
use std::path::Path;

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the virtual assistant API lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL, without a trailing slash (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            backend: BackendSettings {
                base_url: DEFAULT_BACKEND_URL.to_string(),
                timeout_seconds: DEFAULT_BACKEND_TIMEOUT,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(File::from(cli.config.clone()).required(false))?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `assistant-console.{toml,json,yaml}` from the given directory
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("assistant-console");
        let mut settings = Self::load(File::from(config_path).required(false))?;
        settings.normalize();
        settings.validate()?;
        Ok(settings)
    }

    fn load<S>(source: S) -> Result<Self, anyhow::Error>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder()
            .add_source(source)
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("backend.base_url", DEFAULT_BACKEND_URL)?
            .set_default("backend.timeout_seconds", DEFAULT_BACKEND_TIMEOUT as i64)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }

        if let Some(url) = &cli.backend_url {
            self.backend.base_url = url.clone();
        }
        if let Some(timeout) = cli.backend_timeout {
            self.backend.timeout_seconds = timeout;
        }

        self.normalize();
    }

    fn normalize(&mut self) {
        let trimmed = self.backend.base_url.trim().trim_end_matches('/');
        self.backend.base_url = trimmed.to_string();
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Host and port for `TcpListener::bind`; hostnames are resolved there
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }

    /// Display form of the listen address, IPv6 hosts in brackets
    pub fn listen_addr(&self) -> String {
        if self.server.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.server.host, self.server.port)
        } else {
            format!("{}:{}", self.server.host, self.server.port)
        }
    }
}
