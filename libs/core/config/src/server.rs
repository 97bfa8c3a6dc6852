use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path every API route is nested under, e.g. `/api/v1`
    pub api_prefix: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to Ipv4Addr::UNSPECIFIED (0.0.0.0 - all interfaces)
    /// - PORT: defaults to 3000, must be 1-65535
    /// - API_PREFIX: defaults to /api/v1
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port: u16 = env_parse("PORT", DEFAULT_PORT)?;
        if port == 0 {
            return Err(ConfigError::ParseError {
                key: "PORT".to_string(),
                details: "port must be between 1 and 65535".to_string(),
            });
        }
        let api_prefix = normalize_prefix(&env_or_default("API_PREFIX", DEFAULT_API_PREFIX));

        Ok(Self {
            host,
            port,
            api_prefix,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}

/// Ensures a leading slash and strips trailing ones; `/` becomes empty.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
