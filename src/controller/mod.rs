//! Transport-agnostic request handling.

pub mod error;
pub mod response;
pub mod signup;

pub use error::SignUpError;
pub use response::{HttpResponse, ResponseBody};
pub use signup::{SignUpController, SignupRequest};
