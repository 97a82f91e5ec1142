use std::env;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Characters left as-is in URL userinfo: the RFC 3986 unreserved set.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Connection settings for the history database.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Read the configuration from the environment.
    ///
    /// `POSTGRES_HOST`/`POSTGRES_PORT` default to `localhost:5432`;
    /// `ARCHIVE_DB`, `ARCHIVE_DB_USER` and `ARCHIVE_DB_PASSWORD` are required.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: parse_var("POSTGRES_PORT", 5432)?,
            name: must_var("ARCHIVE_DB")?,
            username: must_var("ARCHIVE_DB_USER")?,
            password: must_var("ARCHIVE_DB_PASSWORD")?,
            max_connections: parse_var("ARCHIVE_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }

    /// Postgres URL for this configuration. TLS is not negotiated.
    ///
    /// User and password are percent-encoded so reserved characters cannot
    /// change the host or database the URL points at.
    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}?sslmode=disable",
            utf8_percent_encode(&self.username, USERINFO),
            utf8_percent_encode(&self.password, USERINFO),
            self.host,
            self.port,
            self.name
        )
    }
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Parse an optional environment variable, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
