//! Argon2id password encrypter implementation.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::application::error::{Result, ToInternal};
use crate::application::ports::outbound::Encrypter;
use crate::config::Argon2 as ArgonConfig;
use crate::domain::password::Password;

/// Argon2id encrypter adapter producing PHC strings.
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Create a new Argon2 encrypter with custom parameters.
    pub fn new(config: Option<ArgonConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .catch()?;

        Ok(Self { params })
    }

    fn hash(params: Params, password: &[u8]) -> Result<String> {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2.hash_password(password, &salt).catch()?;

        Ok(hash.to_string())
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, secret: &Password) -> Result<String> {
        let params = self.params.clone();
        let secret = secret.clone();

        // Hashing is CPU bound, keep it off the async workers.
        tokio::task::spawn_blocking(move || Self::hash(params, secret.as_bytes()))
            .await?
    }
}
