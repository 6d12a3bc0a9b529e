//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PRODUCTS_FILE: &str = "productos.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Path of the product file (`PRODUCTS_FILE`).
pub fn products_file() -> PathBuf {
    std::env::var("PRODUCTS_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTS_FILE))
}

/// Bind host (`HOST`).
pub fn host() -> anyhow::Result<IpAddr> {
    let raw = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    raw.parse::<IpAddr>()
        .with_context(|| format!("HOST must be an IP address, got {:?}", raw))
}

/// Bind port (`PORT`).
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid u16, got {:?}", v)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Everything the server binary needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub products_file: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            products_file: products_file(),
            host: host()?,
            port: port()?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
