//! Gate API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

use usher_core::AUTH_COOKIE_MAX_AGE_DAYS;

/// Gate API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Path the cookie guard redirects to when no valid user cookie exists
    pub login_path: String,

    /// Auth cookie lifetime in days
    pub cookie_max_age_days: i64,
}

impl GateConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = GateConfig {
            http_port: env::var("GATE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GATE_PORT".to_string()))?,

            login_path: env::var("GATE_LOGIN_PATH").unwrap_or_else(|_| "/login".to_string()),

            cookie_max_age_days: env::var("GATE_COOKIE_MAX_AGE_DAYS")
                .unwrap_or_else(|_| AUTH_COOKIE_MAX_AGE_DAYS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GATE_COOKIE_MAX_AGE_DAYS".to_string()))?,
        };

        if config.cookie_max_age_days <= 0 {
            return Err(ConfigError::InvalidValue(
                "GATE_COOKIE_MAX_AGE_DAYS".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            http_port: 8080,
            login_path: "/login".to_string(),
            cookie_max_age_days: AUTH_COOKIE_MAX_AGE_DAYS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.cookie_max_age_days, 30);
    }
}
