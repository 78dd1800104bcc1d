//! Structured logging for the orgdesk service.
//!
//! One JSON object per event on stdout. What gets logged:
//! - `info`: successful registrations and logins (user id only), server bind address
//! - `debug`: validation failures by kind, refused tokens by reason, rejected request bodies
//! - `warn`/`error`: store, hashing and signing faults, failed blocking tasks
//!
//! Passwords, digests, signing keys and token strings never appear in events.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the event filter from raw `RUST_LOG` directives.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
