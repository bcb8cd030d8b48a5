//! # API Configuration Module
//!
//! Loads server and scheduling configuration from environment variables,
//! with the original deployment's defaults where a variable is unset.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind to (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `SLOT_DURATION_MINUTES`: length of each bookable slot (default: 30)
//! - `WORKING_HOURS_START` / `WORKING_HOURS_END`: working window, 24-hour
//!   clock, end exclusive (defaults: 9 and 17)
//! - `SLOT_CAPACITY`: confirmed appointments per slot before it saturates
//!   (default: 4)

use std::env;

use eyre::{eyre, Result, WrapErr};
use slotbook_core::config::SchedulingConfig;
use tracing::Level;

/// Configuration for the Slotbook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Scheduling constants consumed by the availability engine
    pub scheduling: SchedulingConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable fails to parse or if the
    /// scheduling constants are out of range (zero duration or capacity,
    /// hours outside 0..=23).
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let scheduling = scheduling_from_env()?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            scheduling,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn scheduling_from_env() -> Result<SchedulingConfig> {
    let defaults = SchedulingConfig::default();

    let slot_duration_minutes = env_u32("SLOT_DURATION_MINUTES", defaults.slot_duration_minutes)?;
    let working_hours_start = env_u32("WORKING_HOURS_START", defaults.working_hours_start)?;
    let working_hours_end = env_u32("WORKING_HOURS_END", defaults.working_hours_end)?;
    let slot_capacity = env_u32("SLOT_CAPACITY", defaults.slot_capacity as u32)? as usize;

    if slot_duration_minutes == 0 {
        return Err(eyre!("SLOT_DURATION_MINUTES must be positive"));
    }
    if slot_capacity == 0 {
        return Err(eyre!("SLOT_CAPACITY must be positive"));
    }
    if working_hours_start > 23 || working_hours_end > 23 {
        return Err(eyre!("Working hours must be within 0..=23"));
    }

    Ok(SchedulingConfig {
        slot_duration_minutes,
        working_hours_start,
        working_hours_end,
        slot_capacity,
    })
}

fn env_u32(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(value) => value.parse().wrap_err_with(|| format!("Invalid {name} value")),
        Err(_) => Ok(default),
    }
}
