// External Dependencies ------------------------------------------------------
use env_logger;
use log::LevelFilter;


// Statics --------------------------------------------------------------------
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];


// Logging --------------------------------------------------------------------
/// Initialize the logger with the specified level, `RUST_LOG` still applies
/// on top of it.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}

pub fn parse_level(name: &str) -> LevelFilter {
    match name {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info
    }
}

