//! Logging setup for hosts and tests
//!
//! The engine only talks to the `log` facade; installing a logger is up to
//! the host. These helpers install `env_logger` with the engine's defaults.

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Install `env_logger`, filtered by `RUST_LOG` or `default_level` if unset
///
/// Panics if a logger was already installed, so call it once from `main`.
pub fn init(default_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_env("RUST_LOG")
        .init();
}

/// Install a test-friendly logger, ignoring an already-installed one
///
/// Returns false if another logger won the race.
pub fn try_init() -> bool {
    env_logger::builder().is_test(true).try_init().is_ok()
}
