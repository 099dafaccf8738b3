//! Telemetry adapters - Observability implementations.

use crate::application::ports::outbound::TelemetryPort;

/// Tracing-based telemetry adapter, also feeding Prometheus counters.
#[derive(Default)]
pub struct TracingTelemetry;

impl TracingTelemetry {
    /// Create a new [`TracingTelemetry`].
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryPort for TracingTelemetry {
    fn record_account_created(&self, account_id: &str) {
        tracing::info!(account_id = account_id, "account created");
        metrics::counter!("accounts_created_total").increment(1);
    }
}
