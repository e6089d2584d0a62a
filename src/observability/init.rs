//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to a
//! `tracing-subscriber` pipeline: an [`EnvFilter`] built from the configured
//! trace level and the standard fmt layer. Observability is optional — an
//! embedding application that installs its own subscriber simply skips this.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// The level string accepts full `EnvFilter` directives, so per-module
/// overrides like `"info,cinetrack::storage=debug"` work.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, and a no-op when another
/// subscriber is already installed globally.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
