//! Module for database connection setup.
//!
//! This module turns the loaded configuration into a ready Postgres store:
//! it builds the connection pool and makes sure the trivia tables exist.

use tracing::info;
use trivia_adapters::{PostgresStore, StoreError};

use crate::config::Config;

pub async fn connect(config: &Config) -> Result<PostgresStore, StoreError> {
    info!(max_connections = config.max_connections, "Connecting to database");

    let store = PostgresStore::connect(&config.database_url, config.max_connections).await?;
    store.ensure_schema().await?;

    Ok(store)
}
