//! Account repository port.

use async_trait::async_trait;

use crate::application::dto::NewAccountDto;
use crate::application::error::Result;
use crate::domain::account::StoredAccount;

/// Port for account persistence.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store a new account and return it with its generated id.
    ///
    /// Must be atomic: either the full record is visible to later reads
    /// and returned, or an error is returned and nothing is stored.
    async fn add(&self, account: NewAccountDto) -> Result<StoredAccount>;
}
