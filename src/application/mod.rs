//! Application layer: ports and the services orchestrating them.

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
