use deadpool_sqlite::{Config, Hook, Pool, Runtime};
use shared::api::error::ServerError;
use tracing::{info, instrument};

use super::{configure_new_connection, run_migrations};

/// Migrates the database then opens a pool where every new connection has
/// been through [`configure_new_connection`]
#[instrument]
pub fn create_pool(connection_string: &str) -> Result<Pool, anyhow::Error> {
    // Run the migrations synchronously before creating the pool or launching the server
    let ran = run_migrations(connection_string)?;
    info!("Ran {ran} db migrations");

    let pool = Config::new(connection_string)
        .builder(Runtime::Tokio1)?
        .post_create(Hook::async_fn(|object, _| {
            Box::pin(async move {
                object
                    .interact(configure_new_connection)
                    .await
                    .map_err(ServerError::from)??;
                Ok(())
            })
        }))
        .build()?;

    Ok(pool)
}

/// A fresh database file that nothing else is using
#[cfg(test)]
pub fn test_database_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("exercise-tracker-{}.sqlite", shared::types::Uuid::new_v4()))
}
