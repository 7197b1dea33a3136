//! Configuration loading from the process environment.
//!
//! The service reads exactly one variable, `PORT`; everything else keeps the
//! defaults from [`super::schema`].

use std::env;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Environment variable naming the listening port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The port variable was set but is not a valid TCP port.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// The port variable was set to non-unicode bytes.
    #[error("PORT is not valid unicode")]
    NotUnicode,
}

/// Load the service configuration, honouring the `PORT` override.
///
/// An unset variable falls back to the default port; a set-but-invalid
/// value is a startup error so a misconfigured deployment fails loudly
/// instead of listening on a surprise port.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    let mut config = ServerConfig::default();

    match env::var(PORT_VAR) {
        Ok(raw) => config.listener.port = parse_port(&raw)?,
        Err(env::VarError::NotPresent) => {}
        Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode),
    }

    Ok(config)
}

/// Parse a raw port value taken from the environment.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidPort {
        value: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_accepts_valid_ports() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port("80").unwrap(), 80);
        assert_eq!(parse_port("65535").unwrap(), 65535);
    }

    #[test]
    fn test_parse_port_rejects_invalid_values() {
        assert!(parse_port("").is_err());
        assert!(parse_port("http").is_err());
        assert!(parse_port("-1").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("3000 ").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = parse_port("http").unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("http"));
    }
}
