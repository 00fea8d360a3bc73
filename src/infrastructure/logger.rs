// src/infrastructure/logger.rs

use log::info;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging backend.
///
/// Safe to call more than once; only the first call installs the logger.
/// `RUST_LOG` overrides the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let installed = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("superhero", log::LevelFilter::Debug)
            .filter_module("r2d2", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .try_init();

        if installed.is_ok() {
            info!("Logging system initialized");
        }
    });
}
