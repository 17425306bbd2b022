//! Logging bootstrap

use tracing::Level;

/// Install a fmt subscriber at the given level.
///
/// Safe to call more than once: if a global subscriber is already set the
/// call is a no-op and returns `false`.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Subscriber for unit tests, writing through the test harness capture
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}
