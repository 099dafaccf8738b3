//! These traits define what the application needs from the outside world.

pub mod account;
pub mod clock;
pub mod crypto;
pub mod email;
pub mod telemetry;

pub use account::*;
pub use clock::*;
pub use crypto::*;
pub use email::*;
pub use telemetry::*;
