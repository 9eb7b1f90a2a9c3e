//! Server configuration
//!
//! Read from environment variables (optionally seeded from a `.env` file):
//!   SERVER_PORT: listen port (default: 3000)
//!   STATIC_DIR:  directory with the WASM bundle (default: <crate>/static)
//!   RUST_LOG:    tracing filter (default: asset_monitor_web=debug,tower_http=debug)

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "asset_monitor_web=debug,tower_http=debug";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid SERVER_PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SERVER_PORT") {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort { value }),
            },
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);

        Ok(Self { port, static_dir })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
