//! Email validator adapter.

use validator::ValidateEmail;

use crate::application::error::Result;
use crate::application::ports::outbound::EmailValidator;

/// Email format check backed by the `validator` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatorEmailValidator;

impl ValidatorEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for ValidatorEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}
