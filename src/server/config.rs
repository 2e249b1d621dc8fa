use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://hotel.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

pub struct Config {
    pub database_url: String,

    pub host: IpAddr,
    pub port: u16,

    /// Directory served at the root path for every unmatched route.
    pub static_dir: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// The service runs with no environment at all: `sqlite://hotel.db`, port 3000 and
    /// the `public` directory.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: parse_var("HOST", std::env::var("HOST").ok(), DEFAULT_HOST)?,
            port: parse_var("PORT", std::env::var("PORT").ok(), DEFAULT_PORT)?,
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
