//! Application services implementing business logic.

pub mod add_account;

pub use add_account::*;
