use std::env;

use crate::config::db::parse_var;
use crate::error::AppError;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `ARCHIVE_HOST` (default `0.0.0.0`) and `ARCHIVE_PORT` (default `4080`).
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: env::var("ARCHIVE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("ARCHIVE_PORT", 4080)?,
        })
    }
}
