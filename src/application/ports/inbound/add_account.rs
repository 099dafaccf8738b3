//! Account creation use case port.

use async_trait::async_trait;

use crate::application::dto::AddAccountInput;
use crate::application::error::Result;
use crate::domain::account::StoredAccount;

/// Inbound port for account creation.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Encrypt the password and persist a new account.
    ///
    /// Errors from the underlying capabilities are returned unchanged.
    async fn add(&self, input: AddAccountInput) -> Result<StoredAccount>;
}
