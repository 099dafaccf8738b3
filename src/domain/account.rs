//! Account entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account as returned by the persistence layer once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAccount {
    /// Identifier assigned by the repository.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Encrypted credential. Never sent back to clients.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
