/// LogBridge - forwards framework log entries to the `log` facade.

use cga_framework::cga::log::{LogEntry, LogSeverity, Logger};

pub struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = level_for(entry.severity);
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

pub fn level_for(severity: LogSeverity) -> log::Level {
    match severity {
        LogSeverity::Trace => log::Level::Trace,
        LogSeverity::Debug => log::Level::Debug,
        LogSeverity::Info => log::Level::Info,
        LogSeverity::Warn => log::Level::Warn,
        LogSeverity::Error => log::Level::Error,
    }
}

/// Lowest framework severity the `log` filter lets through.
pub fn severity_for(filter: log::LevelFilter) -> LogSeverity {
    match filter {
        log::LevelFilter::Trace => LogSeverity::Trace,
        log::LevelFilter::Debug => LogSeverity::Debug,
        log::LevelFilter::Info => LogSeverity::Info,
        log::LevelFilter::Warn => LogSeverity::Warn,
        log::LevelFilter::Error | log::LevelFilter::Off => LogSeverity::Error,
    }
}
