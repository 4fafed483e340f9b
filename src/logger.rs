//! A logging implementation which writes records to standard error.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct StderrLogger {
    pub initial_log_level: Level,
}

impl StderrLogger {
    pub const fn new(max_log_level: Level) -> StderrLogger {
        StderrLogger {
            initial_log_level: max_log_level,
        }
    }

    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self).map(|_| log::set_max_level(self.initial_log_level.to_level_filter()))
    }

    pub fn update_log_level(&'static self, level: LevelFilter) {
        log::set_max_level(level);
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "!",
                Level::Warn => "!",
                Level::Info => "*",
                Level::Debug => "-",
                Level::Trace => ".",
            };
            // A closed stderr has nowhere to report to.
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{}] {}: {}",
                tag,
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
