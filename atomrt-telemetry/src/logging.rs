//! ## atomrt-telemetry::logging
//! **Subscriber setup and runtime event helpers**
//!
//! Structured logging with `tracing`. The fmt subscriber writes to
//! stdout, which keeps stderr reserved for the runtime's fixed-format
//! fault diagnostics.

use tracing::info_span;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .init()
    }

    /// Like [`EventLogger::init`], but with an explicit fallback filter
    /// (typically the configured `telemetry.log_level`). `RUST_LOG`
    /// still wins when set.
    pub fn init_with_filter(filter: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
            )
            .with_thread_names(true)
            .init()
    }

    #[inline]
    pub fn log_event(event_type: &str, detail: &str) {
        let span = info_span!("runtime_event", event_type = event_type);
        let _guard = span.enter();
        tracing::info!(detail, "Runtime event occurred");
    }
}
