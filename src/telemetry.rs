//! Telemetry helpers for applications embedding `profile-charts`.
//!
//! Library code only emits `tracing` events: skipped records at `trace`,
//! composed charts at `debug`, degenerate inputs at `warn`. Hosts either call
//! [`init_default_tracing`] or wire their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "profile_charts=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or when the host already set
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
