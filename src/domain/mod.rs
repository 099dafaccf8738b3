//! Core entities and value objects. No I/O lives here.

pub mod account;
pub mod password;
