use std::net::{IpAddr, Ipv4Addr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 1234;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:1234";

/// Environment-based configuration.
///
/// | Variable | Default |
/// |---|---|
/// | `PORT` | `1234` |
/// | `HOST` | `0.0.0.0` |
/// | `ALLOWED_ORIGINS` | `http://localhost:1234` (comma-separated) |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,

    /// Origins granted CORS access, in addition to the literal `null` origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("ALLOWED_ORIGINS").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        allowed_origins: Option<String>,
    ) -> Result<Self, AppError> {
        let host: IpAddr = match host {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidEnvVar {
                    name: "HOST".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_HOST,
        };

        let port: u16 = match port {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = allowed_origins
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }
}
