//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the bind address, the database URL and pool size, and the quiz selection
//! policy. Values come from the environment (optionally seeded from a `.env`
//! file), falling back to defaults when a variable is unset.

use std::{env, fmt::Display, net::IpAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

use crate::services::quiz::SelectionPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: usize,
    pub quiz_selection: SelectionPolicy,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {e}"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "5000")?,
            database_url: try_load(
                &lookup,
                "DATABASE_URL",
                "postgres://postgres@localhost:5432/trivia",
            )?,
            max_connections: try_load(&lookup, "DATABASE_MAX_CONNECTIONS", "16")?,
            quiz_selection: try_load(&lookup, "QUIZ_SELECTION", "positional")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}
