//! Logging setup.
//!
//! Logs go to stderr so they never mix with the buffer printed on stdout.
//!
//! ## Environment Variables
//!
//! 1. **`CBREAD_LOG`** (highest priority) - cbread-specific filter
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn`

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "CBREAD_LOG";

/// Installs the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let _ = fmt()
        .with_env_filter(create_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn create_filter() -> EnvFilter {
    filter_from(env::var(LOG_ENV).ok(), env::var(EnvFilter::DEFAULT_ENV).ok())
}

fn filter_from(cbread_log: Option<String>, rust_log: Option<String>) -> EnvFilter {
    cbread_log
        .or(rust_log)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
