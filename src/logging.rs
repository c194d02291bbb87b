#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

/// Writes to stderr so log lines never interleave with the rendered board.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    match env::var(LOG_ENV) {
        Ok(value) => value.trim().parse().unwrap_or(LevelFilter::Info),
        Err(_) => LevelFilter::Info,
    }
}

/// Install the stderr logger at the level named by `MINESWEEPER_LOG`,
/// falling back to `info`. Calling it more than once is harmless.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
