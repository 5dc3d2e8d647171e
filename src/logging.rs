//! Logger setup for the CLI

use log::LevelFilter;
use std::env;

/// Initialize logging for the command-line tool.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides the default filter.
/// - Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
