//! Outbound adapters.

pub mod clock;
pub mod crypto;
pub mod email;
pub mod persistence;
pub mod telemetry;
