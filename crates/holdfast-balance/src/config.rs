//! Configuration for the balance observer service.
//!
//! All configuration is loaded from environment variables. The service
//! needs to know where to listen and, when polling is enabled, where
//! the game server's admin API lives.

use std::time::Duration;

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct BalanceConfig {
    /// Host address the HTTP server binds to.
    pub host: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Base URL of the game server's admin API. When absent the
    /// service runs without polling and serves the empty snapshot.
    pub upstream_api_url: Option<String>,
    /// Interval between upstream polls.
    pub poll_interval: Duration,
    /// Bearer token forwarded to the upstream admin API.
    pub admin_token: Option<String>,
}

/// Configuration is invalid or missing.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);

impl BalanceConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `OBSERVER_HOST` -- bind address (default `0.0.0.0`)
    /// - `OBSERVER_PORT` -- listen port (default 8080)
    /// - `UPSTREAM_API_URL` -- game server base URL; polling is
    ///   disabled when unset
    /// - `POLL_INTERVAL_SECS` -- seconds between polls (default 10)
    /// - `ADMIN_TOKEN` -- bearer token for the upstream admin API
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("OBSERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port: u16 = std::env::var("OBSERVER_PORT")
            .unwrap_or_else(|_| "8080".to_owned())
            .parse()
            .map_err(|e| ConfigError(format!("invalid OBSERVER_PORT: {e}")))?;

        let upstream_api_url = std::env::var("UPSTREAM_API_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_owned());

        let poll_interval_secs: u64 = std::env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "10".to_owned())
            .parse()
            .map_err(|e| ConfigError(format!("invalid POLL_INTERVAL_SECS: {e}")))?;
        if poll_interval_secs == 0 {
            return Err(ConfigError(String::from(
                "POLL_INTERVAL_SECS must be at least 1",
            )));
        }

        let admin_token = std::env::var("ADMIN_TOKEN").ok();

        Ok(Self {
            host,
            port,
            upstream_api_url,
            poll_interval: Duration::from_secs(poll_interval_secs),
            admin_token,
        })
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_defaults() {
        // Verify default values used in from_env fallbacks.
        let port_default: u16 = "8080".parse().unwrap_or(0);
        assert_eq!(port_default, 8080);

        let interval_default: u64 = "10".parse().unwrap_or(0);
        assert_eq!(interval_default, 10);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let url = "http://game.local/".trim_end_matches('/').to_owned();
        assert_eq!(url, "http://game.local");
    }
}
