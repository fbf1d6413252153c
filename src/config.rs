use std::net::SocketAddr;

use anyhow::Context;

/// Address used when the `LISTEN` environment variable is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `LISTEN` holds the bind address as `host:port`. An address that does
    /// not parse is a fatal setup error.
    pub fn load() -> anyhow::Result<Self> {
        let raw = std::env::var("LISTEN")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let listen_addr = raw
            .parse()
            .with_context(|| format!("invalid listen address {raw:?}"))?;

        Ok(Self { listen_addr })
    }
}
