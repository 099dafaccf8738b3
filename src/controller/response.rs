//! Response envelope and its constructors.

use serde::Serialize;

use crate::controller::error::SignUpError;
use crate::domain::account::StoredAccount;

pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Payload of an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(StoredAccount),
    Error(SignUpError),
}

/// Uniform `{status_code, body}` wrapper returned for every outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Returns the error value, if the response is a failure.
    pub fn error(&self) -> Option<&SignUpError> {
        match &self.body {
            ResponseBody::Error(err) => Some(err),
            ResponseBody::Account(_) => None,
        }
    }

    /// Returns the created account, if the response is a success.
    pub fn account(&self) -> Option<&StoredAccount> {
        match &self.body {
            ResponseBody::Account(account) => Some(account),
            ResponseBody::Error(_) => None,
        }
    }
}

pub fn ok(account: StoredAccount) -> HttpResponse {
    HttpResponse {
        status_code: OK,
        body: ResponseBody::Account(account),
    }
}

pub fn bad_request(error: SignUpError) -> HttpResponse {
    HttpResponse {
        status_code: BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(SignUpError::Server),
    }
}
