//! PostgreSQL storage.

mod account_repository;
mod models;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use account_repository::PgAccountRepository;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "signup";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Open a connection pool.
pub async fn connect(
    hostname: &str,
    username: &str,
    password: &str,
    db: &str,
    pool: u32,
) -> Result<PgPool, sqlx::Error> {
    let addr = format!("postgres://{username}:{password}@{hostname}/{db}");
    let postgres = PgPoolOptions::new()
        .max_connections(pool)
        .connect(&addr)
        .await?;

    tracing::info!(%hostname, %db, "postgres connected");

    Ok(postgres)
}
