use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub static_dir: PathBuf,
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            static_dir: PathBuf::from("dist"),
            request_timeout_seconds: 15,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        let mut config = ServerConfig::default();
        config.apply_env_overrides(|key| env::var(key).ok());
        config.normalize();
        config
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("MIN_NOW_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Some(value) = lookup("MIN_NOW_STATIC_DIR") {
            self.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("MIN_NOW_REQUEST_TIMEOUT") {
            match value.trim().parse() {
                Ok(seconds) => self.request_timeout_seconds = seconds,
                Err(_) => tracing::warn!(value = %value, "ignoring invalid MIN_NOW_REQUEST_TIMEOUT"),
            }
        }
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.api_base_url.is_empty() {
            return Err(anyhow!("api_base_url must not be empty"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
