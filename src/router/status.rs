//! Public instance status.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::config::Configuration;

/// Structured status.
#[derive(Debug, Serialize)]
pub struct Status {
    name: String,
    version: String,
    /// Whether accounts survive a restart.
    persistent: bool,
}

/// Public server status.
pub async fn status(State(config): State<Arc<Configuration>>) -> Json<Status> {
    Json(Status {
        name: config.name.clone(),
        version: config.version.clone(),
        persistent: config.postgres.is_some(),
    })
}
