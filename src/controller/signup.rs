//! Sign up controller.

use serde_json::{Map, Value};

use crate::application::dto::AddAccountInput;
use crate::application::error::ApplicationError;
use crate::application::ports::inbound::AddAccount;
use crate::application::ports::outbound::EmailValidator;
use crate::controller::error::SignUpError;
use crate::controller::response::{HttpResponse, bad_request, ok, server_error};
use crate::domain::password::Password;

/// Checked in this order; the first failing field is the one reported.
const REQUIRED_FIELDS: [&str; 4] =
    ["email", "name", "password", "password_confirmation"];

/// Raw sign up body, untyped until validated.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    body: Map<String, Value>,
}

impl SignupRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Read a required string field.
    ///
    /// Absent, `null` and empty values are missing. Anything else that is
    /// not a string is invalid.
    fn require(&self, field: &str) -> Result<&str, SignUpError> {
        match self.body.get(field) {
            None | Some(Value::Null) => Err(SignUpError::missing(field)),
            Some(Value::String(value)) if value.is_empty() => {
                Err(SignUpError::missing(field))
            },
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(SignUpError::invalid(field)),
        }
    }

    /// Values of [`REQUIRED_FIELDS`], in the same order.
    fn required_fields(&self) -> Result<[&str; 4], SignUpError> {
        let mut values = [""; REQUIRED_FIELDS.len()];
        for (slot, field) in values.iter_mut().zip(REQUIRED_FIELDS) {
            *slot = self.require(field)?;
        }
        Ok(values)
    }
}

impl From<Map<String, Value>> for SignupRequest {
    fn from(body: Map<String, Value>) -> Self {
        Self::new(body)
    }
}

/// Validates sign up requests and delegates account creation.
///
/// Holds no per-request state; one instance serves concurrent calls.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    /// Handle a sign up request. Always yields an envelope.
    pub async fn handle(&self, request: SignupRequest) -> HttpResponse {
        let [email, name, password, password_confirmation] =
            match request.required_fields() {
                Ok(values) => values,
                Err(err) => return bad_request(err),
            };

        match self.email_validator.is_valid(email) {
            Ok(true) => (),
            Ok(false) => return bad_request(SignUpError::invalid("email")),
            Err(err) => return internal(err),
        }

        if password != password_confirmation {
            return bad_request(SignUpError::invalid("password_confirmation"));
        }

        let input = AddAccountInput::new(name, email, Password::new(password));
        match self.add_account.add(input).await {
            Ok(account) => ok(account),
            Err(err) => internal(err),
        }
    }
}

/// Single translation point from capability failures to `500`.
fn internal(err: ApplicationError) -> HttpResponse {
    tracing::error!(error = ?err, "sign up failed, server returned 500 status");
    server_error()
}
