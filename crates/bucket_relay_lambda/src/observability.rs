//! Log sinks for the relay handler and the subscriber setup for the binary.

use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub const RELAY_COMPONENT: &str = "relay_handler";

/// Destination for the handler's diagnostic records.
///
/// Records are not part of the response contract; tests capture or discard
/// them through their own implementations.
pub trait RelayLog {
    fn info(&self, event: &str, details: Value);
    fn error(&self, event: &str, details: Value);
}

/// Emits records as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRelayLog;

impl RelayLog for TracingRelayLog {
    fn info(&self, event: &str, details: Value) {
        tracing::info!(component = RELAY_COMPONENT, event = event, details = %details);
    }

    fn error(&self, event: &str, details: Value) {
        tracing::error!(component = RELAY_COMPONENT, event = event, details = %details);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentRelayLog;

impl RelayLog for SilentRelayLog {
    fn info(&self, _event: &str, _details: Value) {}

    fn error(&self, _event: &str, _details: Value) {}
}

/// Installs a JSON formatter filtered by `RUST_LOG` (default `info`).
///
/// Timestamps are left to CloudWatch.
pub fn init_tracing() -> Result<(), lambda_runtime::Error> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init()
}
