//! Bootstrap errors.

use thiserror::Error;

use crate::application::error::ApplicationError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing failures while starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("SQL request failed: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("invalid argon2 parameters: {0}")]
    Crypto(#[source] ApplicationError),

    #[error("metrics recorder failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
