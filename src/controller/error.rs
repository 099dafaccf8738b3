//! Errors exposed to clients.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Tagged error value carried by a failed [`HttpResponse`].
///
/// [`HttpResponse`]: crate::controller::HttpResponse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("missing param: {0}")]
    MissingParam(String),

    #[error("invalid param: {0}")]
    InvalidParam(String),

    /// Carries no detail on purpose.
    #[error("internal server error")]
    Server,
}

impl SignUpError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Machine-matchable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::Server => "ServerError",
        }
    }

    /// Offending field, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) => {
                Some(field)
            },
            Self::Server => None,
        }
    }
}

impl Serialize for SignUpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SignUpError", 3)?;
        state.serialize_field("error", self.kind())?;
        state.serialize_field("param", &self.param())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
