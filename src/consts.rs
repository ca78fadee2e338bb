//! Global constants and environment driven settings.

use std::env;

use thiserror::Error;

pub const HTTP_PORT: u16 = 8080; // Default port of the HTTP server.
pub const HTTP_PORT_VAR: &str = "HTTP_PORT"; // Overrides HTTP_PORT when set.

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Port the server listens on, read from the environment after `.env` has
/// been loaded.
pub fn http_port() -> Result<u16, ConfigError> {
    parse_port(env::var(HTTP_PORT_VAR).ok().as_deref())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(HTTP_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            var: HTTP_PORT_VAR,
            value: value.to_string(),
        }),
    }
}
