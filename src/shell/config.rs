use anyhow::Context;
use std::env;
use std::net::SocketAddr;

const BIND_ADDR_VAR: &str = "CONTACTS_BIND_ADDR";
const MAX_UPLOAD_BYTES_VAR: &str = "CONTACTS_MAX_UPLOAD_BYTES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr: SocketAddr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR} must be a socket address"))?;
        let max_upload_bytes: usize = match lookup(MAX_UPLOAD_BYTES_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{MAX_UPLOAD_BYTES_VAR} must be a byte count"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        Ok(Self {
            bind_addr,
            max_upload_bytes,
        })
    }
}
