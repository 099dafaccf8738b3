//! Password logic.

use zeroize::Zeroizing;

/// Value object of a plaintext password.
///
/// Only presence is checked at the boundary; strength rules are not
/// enforced. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Create a new [`Password`].
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("passworld");

        let debug = format!("{password:?}");
        assert!(!debug.contains("passworld"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(password.as_str(), "passworld");
    }
}
