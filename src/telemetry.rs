//! Opt-in tracing setup.
//!
//! Charts emit `tracing` events (skipped zero-total groups, degenerate
//! ranges) but never install a subscriber on their own. Hosts that already
//! configure `tracing` keep full control; the rest can call
//! [`init_default_tracing`] once at startup.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `info` when the variable is unset.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or the host already set a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return subscriber.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
