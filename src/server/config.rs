use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_SCHEMA: &str = "bookings";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_TEMPLATE_DIR: &str = "templates";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    /// PostgreSQL search path applied to every pooled connection.
    pub database_schema: String,
    pub database_max_connections: u32,

    pub template_dir: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never
    /// touch global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => parse_var("DATABASE_MAX_CONNECTIONS", value)?,
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
        };

        let listen_addr = parse_var(
            "LISTEN_ADDR",
            lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        )?;

        Ok(Self {
            database_url,
            database_schema: lookup("DATABASE_SCHEMA")
                .unwrap_or_else(|| DEFAULT_DATABASE_SCHEMA.to_string()),
            database_max_connections,
            template_dir: lookup("TEMPLATE_DIR")
                .unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.to_string()),
            listen_addr,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
