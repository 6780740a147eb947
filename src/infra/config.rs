//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Address the HTTP listener binds when `LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:2490";

/// Database file created in the working directory when `DATABASE_PATH` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "ALL-ARTICLES.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("LISTEN_ADDR").ok(),
            std::env::var("DATABASE_PATH").ok(),
        )
    }

    fn from_vars(listen: Option<String>, database: Option<String>) -> anyhow::Result<Self> {
        let listen = listen.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen
            .parse::<SocketAddr>()
            .with_context(|| format!("LISTEN_ADDR is not a valid socket address: {listen}"))?;
        let database_path =
            PathBuf::from(database.unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()));
        Ok(Self { listen_addr, database_path })
    }
}
