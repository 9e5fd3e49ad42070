use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub http_addr: String,
}

impl ServiceConfig {
    pub fn from_env(default_http_addr: &str) -> Result<Self> {
        Self::from_vars(default_http_addr, |key| std::env::var(key).ok())
    }

    pub fn from_vars(
        default_http_addr: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| default_http_addr.to_string());

        let config = Self { http_addr };
        config.socket_addr()?;
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.http_addr
            .parse()
            .with_context(|| format!("HTTP_ADDR '{}' is not a socket address", self.http_addr))
    }
}
