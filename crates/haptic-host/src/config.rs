//! Host configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRAME_RATE_HZ: u32 = 90;

/// Settings for the HTTP listener and the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Optional YAML or JSON pattern asset (`PATTERNS_PATH`).
    pub patterns_path: Option<PathBuf>,
    /// Scheduler ticks per second (`FRAME_RATE_HZ`).
    pub frame_rate_hz: u32,
}

impl HostConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let frame_rate_hz = match lookup("FRAME_RATE_HZ") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("FRAME_RATE_HZ must be a valid u32: {e}")))?,
            None => DEFAULT_FRAME_RATE_HZ,
        };
        if frame_rate_hz == 0 {
            return Err(AppError::Config(
                "FRAME_RATE_HZ must be greater than zero".to_string(),
            ));
        }
        let patterns_path = lookup("PATTERNS_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            patterns_path,
            frame_rate_hz,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Time between two scheduler ticks.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate_hz.max(1)
    }
}
