//! Database models for PostgreSQL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::account::StoredAccount;

/// Account row as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountRecord> for StoredAccount {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
