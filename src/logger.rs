//! Stdout sink for the [`log`] facade.
//!
//! Formats each record as `[LEVEL] -- [target] -- [file:line]: message` and
//! flushes after every line, so output interleaves sanely with anything else
//! writing to the same stream. Binaries that want environment-driven filter
//! configuration should install their own sink instead; this one is the
//! plain always-on console writer.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// The stdout logging sink. Install it with [`init`] or
/// [`init_with_level`].
#[derive(Debug)]
pub struct StdoutLogger;

static LOGGER: StdoutLogger = StdoutLogger;

fn level_str(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => "INFO_NOISY",
        Level::Info => "INFO",
        Level::Warn => "WARNING",
        Level::Error => "ERROR",
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        // Strip the path, keep the file name.
        let file = record.file().unwrap_or("<unknown>");
        let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let line = record.line().unwrap_or(0);

        std::println!(
            "[{}] -- [{}] -- [{}:{}]: {}",
            level_str(record.level()),
            record.target(),
            file,
            line,
            record.args()
        );
        let _ = std::io::stdout().flush();
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Installs the stdout sink at `Info` level.
///
/// Fails if another logger is already installed, like any
/// [`log::set_logger`] call.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(LevelFilter::Info)
}

/// Installs the stdout sink with an explicit level filter.
pub fn init_with_level(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(filter))
}
