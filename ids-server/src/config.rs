use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_PATH: &str = "identity.db";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// SQLite database path (default: identity.db; ":memory:" accepted)
    pub database_path: String,

    /// Log level (default: info)
    pub log_level: LogLevel,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Optional log file path. None = stdout
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(value) => value.parse().map_err(|e| ServerError::EnvVar {
                message: format!("Invalid BIND_ADDR '{value}': {e}"),
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        // Unrecognized level strings fall back to info rather than failing
        let log_level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogLevel(LevelFilter::Info));

        let log_colored = std::env::var("LOG_COLORED")
            .map(|value| !matches!(value.as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        let log_file = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Ok(Self {
            bind_addr,
            database_path,
            log_level,
            log_colored,
            log_file,
        })
    }
}

/// Wrapper for LevelFilter with forgiving parsing
#[derive(Debug, Clone, Copy)]
pub struct LogLevel(pub LevelFilter);

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel(LevelFilter::Off)),
            "error" => Ok(LogLevel(LevelFilter::Error)),
            "warn" => Ok(LogLevel(LevelFilter::Warn)),
            "info" => Ok(LogLevel(LevelFilter::Info)),
            "debug" => Ok(LogLevel(LevelFilter::Debug)),
            "trace" => Ok(LogLevel(LevelFilter::Trace)),
            _ => Err(()),
        }
    }
}
