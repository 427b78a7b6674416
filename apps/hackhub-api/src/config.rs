//! Application configuration loaded from environment variables.
//!
//! Fail-fast: required variables must be present and valid or startup stops
//! with a clear error.

use std::env;
use thiserror::Error;

/// Canonical post-login landing path handed back to clients.
pub const DEFAULT_POST_LOGIN_REDIRECT: &str = "/projects";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Default log filter directive.
    pub rust_log: String,
    /// Post-login landing path.
    pub post_login_redirect: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is absent or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_port(env::var("PORT").ok().as_deref())?;
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info,hackhub=debug".to_string());
        let post_login_redirect = env::var("POST_LOGIN_REDIRECT")
            .unwrap_or_else(|_| DEFAULT_POST_LOGIN_REDIRECT.to_string());

        Ok(Self {
            host,
            port,
            database_url,
            rust_log,
            post_login_redirect,
        })
    }
}

fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(8080),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            reason: format!("'{raw}' is not a valid port"),
        }),
    }
}
