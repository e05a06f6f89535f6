use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::models::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`, falling back to `0.0.0.0:8000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = host {
            config.host = value
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?;
        }
        if let Some(value) = port {
            config.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
