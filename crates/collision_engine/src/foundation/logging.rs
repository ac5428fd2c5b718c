//! Logging initialization

use log::LevelFilter;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a fixed maximum level
///
/// Any `RUST_LOG` module filters are still read, but the global level is
/// forced to `level`. Calling this twice is harmless; the second call is ignored.
pub fn init_with_level(level: LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init();
}
