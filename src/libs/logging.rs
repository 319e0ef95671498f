//! Tracing subscriber setup.
//!
//! Structured logs are only emitted in debug mode (`POMO_DEBUG` or
//! `RUST_LOG` set), the same switch the `msg_*!` macros use. `RUST_LOG`
//! takes precedence over the default `pomo=debug` filter. Output goes to
//! stderr so it never mixes with the redrawn status line on stdout.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "pomo=debug";

/// Installs the global subscriber when debug mode is on.
///
/// Uses `try_init()` so calling it twice (e.g. from tests) is harmless.
pub fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
