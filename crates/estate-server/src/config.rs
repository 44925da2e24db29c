//! Server configuration from environment.

use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    /// Upper bound on trees stored for a single estate.
    pub max_trees_per_estate: usize,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("ESTATE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            bind_addr: env::var("ESTATE_BIND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(IpAddr::from([0, 0, 0, 0])),
            max_trees_per_estate: env::var("ESTATE_MAX_TREES_PER_ESTATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1_000_000),
            log_json: env::var("ESTATE_LOG_JSON")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            max_trees_per_estate: 1_000_000,
            log_json: false,
        }
    }
}
