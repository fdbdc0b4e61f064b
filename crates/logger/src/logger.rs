//! crates/logger/src/logger.rs
//! The logger context: threshold, console sink, and observer slot.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::entry::Entry;
use super::level::Level;
use super::sink::ConsoleSink;
use super::timestamp;

#[cfg(feature = "observer")]
use super::observer::{Observer, ObserverSlot};

/// A leveled logger writing to a [`ConsoleSink`].
///
/// Entries more verbose than the current threshold are dropped before any
/// formatting happens. Everything else is written to the sink as one line
/// and then, when the `observer` feature is enabled and an observer is
/// registered, passed to the observer.
///
/// All methods take `&self`; the threshold is an atomic and the sink and
/// observer slot sit behind their own locks, so a single logger can be shared
/// freely between threads. A threshold change made on one thread becomes
/// visible to the others without any ordering guarantee relative to their
/// in-flight log calls.
///
/// # Examples
///
/// ```
/// use logger::{Level, Logger};
///
/// let logger = Logger::new(Vec::<u8>::new());
/// logger.set_timestamps(false);
/// logger.set_level("warn");
///
/// logger.info(format_args!("dropped"));
/// logger.warn(format_args!("{} retries left", 2));
///
/// let output = logger.into_sink().into_inner();
/// assert_eq!(output, b"WARN - 2 retries left\n".to_vec());
/// ```
pub struct Logger<W = io::Stderr> {
    threshold: AtomicU8,
    sink: Mutex<ConsoleSink<W>>,
    #[cfg(feature = "observer")]
    observer: ObserverSlot,
}

impl Logger<io::Stderr> {
    /// Creates a logger writing timestamped lines to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_sink(ConsoleSink::stderr())
    }
}

impl Default for Logger<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W> Logger<W> {
    /// Creates a logger at [`Level::Info`] writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_sink(ConsoleSink::new(writer))
    }

    /// Creates a logger at [`Level::Info`] around an existing sink.
    #[must_use]
    pub fn with_sink(sink: ConsoleSink<W>) -> Self {
        Self {
            threshold: AtomicU8::new(Level::Info.value()),
            sink: Mutex::new(sink),
            #[cfg(feature = "observer")]
            observer: ObserverSlot::default(),
        }
    }

    /// Sets the threshold from a level name, ignoring case.
    ///
    /// Unknown names silently reset the threshold to [`Level::Info`].
    pub fn set_level(&self, name: &str) {
        self.set_threshold(Level::from_name(name));
    }

    /// Sets the threshold to `level`.
    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level.value(), Ordering::Relaxed);
    }

    /// Returns the current threshold.
    pub fn level(&self) -> Level {
        Level::from_value(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Reports whether an entry at `level` would be emitted.
    ///
    /// The threshold is inclusive: `level <= self.level()` passes.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level()
    }

    /// Registers `observer`, or disables observation when `None`.
    ///
    /// Returns the previously registered observer.
    #[cfg(feature = "observer")]
    pub fn set_observer(&self, observer: Option<Observer>) -> Option<Observer> {
        self.observer.replace(observer)
    }

    /// Reports whether an observer is registered.
    #[cfg(feature = "observer")]
    pub fn has_observer(&self) -> bool {
        self.observer.is_set()
    }

    /// Enables or disables the console timestamp prefix.
    pub fn set_timestamps(&self, timestamps: bool) {
        self.sink().set_timestamps(timestamps);
    }

    /// Locks and returns the console sink.
    ///
    /// Logging from the same thread while the guard is alive deadlocks.
    pub fn sink(&self) -> MutexGuard<'_, ConsoleSink<W>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the logger and returns its sink.
    pub fn into_sink(self) -> ConsoleSink<W> {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Logs `args` at `level` if the threshold allows it.
    ///
    /// Console write failures are swallowed; logging never fails the caller.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let entry = Entry::new(level, args);
        let at = timestamp::now();
        {
            let mut sink = self.sink();
            let _ = sink.write_at(&entry, at);
        }

        #[cfg(feature = "observer")]
        self.notify(at, &entry);
    }

    #[cfg(feature = "observer")]
    fn notify(&self, at: time::OffsetDateTime, entry: &Entry) {
        if let Some(observer) = self.observer.get() {
            observer(&timestamp::observed_line(at, entry));
        }
    }

    /// Logs a trace-level message.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Logs an info-level message.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Logs a warning-level message.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Logs an error-level message.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Logger");
        debug.field("level", &self.level());
        #[cfg(feature = "observer")]
        debug.field("observer", &self.observer);
        debug.finish_non_exhaustive()
    }
}
