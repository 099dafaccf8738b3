//! Concrete implementations of the application ports.

pub mod outbound;
