//! Configuration management for mcpinger.
//!
//! This module handles loading and validating environment variables. The
//! resulting [`Config`] is passed explicitly into the query pipeline.

use crate::address::DEFAULT_MINECRAFT_PORT;
use crate::error::{PingerError, Result};
use crate::status::MotdSource;
use crate::utils::validation::parse_port;
use std::env;
use std::time::Duration;
use url::Url;

/// Public status API used when `MC_STATUS_API_URL` is not set.
pub const DEFAULT_STATUS_API_URL: &str = "https://api.mcsrvstat.us";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the status API, without a trailing slash
    pub status_api_url: String,
    /// Discord webhook endpoint; forwarding is skipped when `None`
    pub webhook_url: Option<String>,
    /// Timeout applied to every outbound request
    pub request_timeout: Duration,
    /// Port used when the address field carries none
    pub default_port: String,
    /// Which MOTD variant to prefer from the status API
    pub motd_source: MotdSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_api_url: DEFAULT_STATUS_API_URL.to_string(),
            webhook_url: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_port: DEFAULT_MINECRAFT_PORT.to_string(),
            motd_source: MotdSource::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read the optional variables below. None are required.
    ///
    /// - `MC_STATUS_API_URL`: status API base URL
    /// - `DISCORD_WEBHOOK_URL`: webhook endpoint (never hard-code it)
    /// - `MC_REQUEST_TIMEOUT_SECS`: request timeout in seconds
    /// - `MC_DEFAULT_PORT`: port used when the address has none
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mcpinger::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// println!("Status API: {}", config.status_api_url);
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let status_api_url = lookup("MC_STATUS_API_URL")
            .unwrap_or_else(|| DEFAULT_STATUS_API_URL.to_string());
        Self::validate_http_url("MC_STATUS_API_URL", &status_api_url)?;
        let status_api_url = status_api_url.trim_end_matches('/').to_string();

        // An empty value is treated the same as an unset one
        let webhook_url = lookup("DISCORD_WEBHOOK_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &webhook_url {
            Self::validate_http_url("DISCORD_WEBHOOK_URL", url)?;
        }

        let request_timeout = match lookup("MC_REQUEST_TIMEOUT_SECS") {
            Some(secs) => Self::parse_timeout(&secs)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let default_port = lookup("MC_DEFAULT_PORT")
            .unwrap_or_else(|| DEFAULT_MINECRAFT_PORT.to_string());
        Self::validate_port(&default_port)?;

        Ok(Self {
            status_api_url,
            webhook_url,
            request_timeout,
            default_port,
            motd_source: MotdSource::default(),
        })
    }

    /// Parse a positive number of seconds.
    fn parse_timeout(secs: &str) -> Result<Duration> {
        match secs.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(PingerError::Config(format!(
                "MC_REQUEST_TIMEOUT_SECS must be a positive integer, got: '{}'",
                secs
            ))),
            Ok(secs) => Ok(Duration::from_secs(secs)),
        }
    }

    /// Validate a port string with the same rules the address resolver uses.
    pub fn validate_port(port: &str) -> Result<()> {
        parse_port(port).ok_or_else(|| {
            PingerError::Config(format!("Invalid port: '{}'. Expected 0-65535.", port))
        })?;
        Ok(())
    }

    /// Override the default port, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the port is invalid; the current
    /// value is kept.
    pub fn set_default_port(&mut self, port: &str) -> Result<()> {
        Self::validate_port(port)?;
        self.default_port = port.trim().to_string();
        Ok(())
    }

    /// Build the HTTP client shared by the status and webhook clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(concat!("mcpinger/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }

    /// Validate a URL format using proper URL parsing.
    fn validate_http_url(name: &str, url_str: &str) -> Result<()> {
        let parsed_url = Url::parse(url_str)
            .map_err(|e| PingerError::Config(format!("Invalid {} '{}': {}", name, url_str, e)))?;

        // Ensure it's HTTP or HTTPS
        let scheme = parsed_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(PingerError::Config(format!(
                "{} must use http:// or https:// scheme, got: '{}'",
                name, scheme
            )));
        }

        if parsed_url.host_str().is_none() {
            return Err(PingerError::Config(format!(
                "{} must contain a valid host: '{}'",
                name, url_str
            )));
        }

        Ok(())
    }
}
