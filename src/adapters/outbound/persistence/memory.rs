//! In-process account storage.
//!
//! Used when no PostgreSQL instance is configured. Nothing survives a
//! restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::dto::NewAccountDto;
use crate::application::error::Result;
use crate::application::ports::outbound::AddAccountRepository;
use crate::domain::account::StoredAccount;

/// Account repository kept in memory.
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, StoredAccount>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an account by its id.
    pub async fn get(&self, id: &str) -> Option<StoredAccount> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: NewAccountDto) -> Result<StoredAccount> {
        let stored = StoredAccount {
            id: Uuid::new_v4().to_string(),
            name: account.name,
            email: account.email,
            password: account.password,
            created_at: account.created_at,
            updated_at: account.updated_at,
        };

        self.accounts
            .write()
            .await
            .insert(stored.id.clone(), stored.clone());

        Ok(stored)
    }
}
