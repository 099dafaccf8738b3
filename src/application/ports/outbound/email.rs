//! Email format port.

use crate::application::error::Result;

/// Port deciding whether a string is a syntactically valid email.
pub trait EmailValidator: Send + Sync {
    /// `Err` means the validator itself broke, not that the email is
    /// invalid.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
