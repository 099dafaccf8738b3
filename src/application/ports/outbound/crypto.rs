//! Interfaces for cryptographic operations.

use async_trait::async_trait;

use crate::application::error::Result;
use crate::domain::password::Password;

/// Port for one-way password encryption.
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// Turn a plaintext secret into a stored credential.
    ///
    /// Output need not be deterministic. Failures are errors, never an
    /// empty string.
    async fn encrypt(&self, secret: &Password) -> Result<String>;
}
