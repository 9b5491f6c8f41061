//! Process configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_ENV: &str = "ORDERGATE_BIND_ADDR";
pub const STATE_INFO_PATH_ENV: &str = "ORDERGATE_STATE_INFO_PATH";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the state records. Without it the state routes
    /// answer from an empty directory.
    pub state_info_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .with_context(|| format!("{BIND_ADDR_ENV} is not a socket address: {raw}"))?,
            None => DEFAULT_BIND_ADDR
                .parse::<SocketAddr>()
                .context("default bind address is malformed")?,
        };

        let state_info_path = lookup(STATE_INFO_PATH_ENV)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if state_info_path.is_none() {
            tracing::warn!("{STATE_INFO_PATH_ENV} not set; state lookups will find nothing");
        }

        Ok(Self {
            bind_addr,
            state_info_path,
        })
    }
}
