//! Interface for observability.

/// Port for telemetry/observability operations.
pub trait TelemetryPort: Send + Sync {
    /// Record a new account creation.
    fn record_account_created(&self, account_id: &str);
}
