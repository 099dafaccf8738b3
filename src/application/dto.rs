//! Data Transfer Objects for the application layer.
//!
//! DTOs are used to transfer data between layers without exposing domain
//! entities.

use chrono::{DateTime, Utc};

use crate::domain::password::Password;

/// Validated input of the account creation use case.
///
/// Built by the controller once every field is present and the password
/// matched its confirmation.
#[derive(Debug, Clone)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: Password,
}

impl AddAccountInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password,
        }
    }
}

/// Record handed to the repository: credential already encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccountDto {
    pub name: String,
    pub email: String,
    /// Encrypted password.
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
