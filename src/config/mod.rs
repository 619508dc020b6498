//! Configuration module for the Retro Board backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("RETRO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid RETRO_BIND_ADDR format");

        let log_level = env::var("RETRO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            bind_addr,
            log_level,
        }
    }
}
