//! crates/logger/src/global.rs
//! The process-wide logger and free functions operating on it.
//!
//! The global logger writes timestamped lines to standard error and starts
//! at [`Level::Info`]. It lives for the rest of the process once first used.

use std::fmt;
use std::sync::OnceLock;

use super::config::LoggerConfig;
use super::level::Level;
use super::logger::Logger;

#[cfg(feature = "observer")]
use super::observer::Observer;

/// Returns the process-wide logger, creating it on first use.
pub fn global() -> &'static Logger {
    static GLOBAL: OnceLock<Logger> = OnceLock::new();
    GLOBAL.get_or_init(Logger::stderr)
}

/// Sets the global threshold from a level name, ignoring case.
///
/// Anything other than `error`, `warn`, `info`, `debug`, or `trace` selects
/// [`Level::Info`] without reporting an error.
pub fn set_level(name: &str) {
    global().set_level(name);
}

/// Returns the global threshold.
pub fn level() -> Level {
    global().level()
}

/// Sets the global threshold to `level`.
pub fn set_threshold(level: Level) {
    global().set_threshold(level);
}

/// Reports whether the global logger would emit an entry at `level`.
pub fn enabled(level: Level) -> bool {
    global().enabled(level)
}

/// Replaces the global observer; `None` disables observation.
///
/// See [`Observer`] for the calling contract.
#[cfg(feature = "observer")]
pub fn set_observer(observer: Option<Observer>) -> Option<Observer> {
    global().set_observer(observer)
}

/// Applies `config` to the global logger.
pub fn configure(config: &LoggerConfig) {
    global().apply(config);
}

/// Logs `args` at `level` through the global logger.
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    global().log(level, args);
}

/// Logs a trace-level message through the global logger.
pub fn trace(args: fmt::Arguments<'_>) {
    log(Level::Trace, args);
}

/// Logs a debug-level message through the global logger.
pub fn debug(args: fmt::Arguments<'_>) {
    log(Level::Debug, args);
}

/// Logs an info-level message through the global logger.
pub fn info(args: fmt::Arguments<'_>) {
    log(Level::Info, args);
}

/// Logs a warning-level message through the global logger.
pub fn warn(args: fmt::Arguments<'_>) {
    log(Level::Warn, args);
}

/// Logs an error-level message through the global logger.
pub fn error(args: fmt::Arguments<'_>) {
    log(Level::Error, args);
}
