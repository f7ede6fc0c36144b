//! Logging setup for the command-line front-ends

use log::LevelFilter;
use std::env;

/// Initialize logging for the solver binaries.
///
/// Uses `Debug` when `verbose` is set, otherwise `Warn` so the interactive
/// front-ends stay quiet. `RUST_LOG` overrides both when present.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
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

    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
