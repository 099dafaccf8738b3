//! PostgreSQL implementation for account repository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::AccountRecord;
use crate::application::dto::NewAccountDto;
use crate::application::error::{Result, ToInternal};
use crate::application::ports::outbound::AddAccountRepository;
use crate::domain::account::StoredAccount;

/// PostgreSQL account repository.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new [`PgAccountRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddAccountRepository for PgAccountRepository {
    async fn add(&self, account: NewAccountDto) -> Result<StoredAccount> {
        // Single statement, so the insert is all or nothing.
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (name, email, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id::text AS id, name, email, password,
                created_at, updated_at
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_one(&self.pool)
        .await
        .catch()?;

        Ok(record.into())
    }
}
