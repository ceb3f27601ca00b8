//! Framework logging: a pluggable `Logger`, the entries it receives and the
//! `cga_*!` macros that feed it through `Engine`.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination of framework diagnostics.
///
/// ```no_run
/// use cga_framework::cga::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("[{}] {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One message handed to the installed logger.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, e.g. "cga::PerspectiveCamera"
    pub source: String,
    pub message: String,
    /// Location, set for entries logged through `cga_error!`
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

/// Log severity levels, ordered from chattiest to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-pixel / per-shape chatter
    Trace,
    /// Camera updates, frame timings
    Debug,
    /// Lifecycle events
    Info,
    /// Potential issues
    Warn,
    /// Failures, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width upper-case label.
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Render `entry` as `[timestamp] [SEVERITY] [source] message`, with
/// ` (file:line)` appended when the entry carries a location.
pub fn format_entry(entry: &LogEntry, colorize: bool) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%H:%M:%S%.3f");

    let label = entry.severity.label();
    let (severity, source) = if colorize {
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        (severity.to_string(), entry.source.bright_blue().to_string())
    } else {
        (label.to_string(), entry.source.clone())
    };

    let mut line = format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message);
    if let (Some(file), Some(at)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, at));
    }
    line
}

/// Console logger installed until `Engine::set_logger` replaces it.
///
/// Trace to info go to stdout, warnings and errors to stderr.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = format_entry(entry, true);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __cga_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::cga::Engine::log(
            $crate::cga::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! cga_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__cga_log!(Trace, $source, $($arg)*) };
}

/// Log at debug level under `source`.
///
/// ```no_run
/// # use cga_framework::cga_debug;
/// cga_debug!("cga::Framework", "frame {} rendered", 42);
/// ```
#[macro_export]
macro_rules! cga_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__cga_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! cga_info {
    ($source:expr, $($arg:tt)*) => { $crate::__cga_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! cga_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__cga_log!(Warn, $source, $($arg)*) };
}

/// Log an error together with the calling file and line.
#[macro_export]
macro_rules! cga_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::cga::Engine::log_detailed(
            $crate::cga::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
