#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger/src/lib.rs
//!
//! # Overview
//!
//! `logger` is a small leveled console logger. Messages carry one of five
//! [`Level`]s (`ERROR = 1` through `TRACE = 5`); anything more verbose than
//! the current threshold is dropped, everything else is written to a
//! [`ConsoleSink`] as `YYYY/MM/DD HH:MM:SS LEVEL - message` and, when the
//! `observer` feature is enabled, handed to a single registered
//! `Observer` as `<RFC 3339 timestamp> LEVEL - message`.
//!
//! # Design
//!
//! [`Logger`] is an explicit context object that can be created, shared
//! through an `Arc`, and dropped like any other value. A process-wide
//! instance backs the free functions ([`set_level`], [`level`], [`log`],
//! [`info`], ...) and the macros ([`info!`], [`warn!`], ...). The threshold is
//! an atomic and the sink and observer slot have their own locks, so the
//! global logger is safe to use from any thread.
//!
//! # Invariants
//!
//! - An entry is emitted only when `level <= threshold`; dropped entries are
//!   never formatted.
//! - Unknown level names passed to [`set_level`] select [`Level::Info`].
//! - A macro call without arguments writes its message verbatim; braces are
//!   only interpreted once arguments follow.
//! - The observer runs on the logging thread after the console line is
//!   written, with no internal lock held.
//!
//! # Errors
//!
//! Logging never fails: console write errors are discarded. Only the strict
//! level conversions ([`str::parse`], [`TryFrom<u8>`]) return [`LevelError`].
//!
//! # Features
//!
//! - `observer` (default): the single-slot `Observer` hook and `set_observer`.
//! - `serde`: `Serialize`/`Deserialize` for [`Level`] and [`LoggerConfig`].
//! - `tracing`: `LoggerLayer`, routing `tracing` events into a logger.
//!
//! # Examples
//!
//! ```
//! use logger::Logger;
//!
//! let logger = Logger::new(Vec::<u8>::new());
//! logger.set_timestamps(false);
//! logger.set_level("warn");
//!
//! logger::info!(logger: &logger, "not emitted");
//! logger::warn!(logger: &logger, "{} of {} replicas down", 1, 3);
//! logger::error!(logger: &logger, "100% {verbatim}");
//!
//! let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
//! assert_eq!(output, "WARN - 1 of 3 replicas down\nERROR - 100% {verbatim}\n");
//! ```
#![cfg_attr(
    feature = "observer",
    doc = r#"
With the `observer` feature, every emitted entry is also handed to the
registered observer together with an RFC 3339 timestamp:

```
use std::sync::{Arc, Mutex};

let seen = Arc::new(Mutex::new(Vec::new()));
let captured = Arc::clone(&seen);
logger::set_observer(Some(Arc::new(move |line: &str| {
    captured.lock().unwrap().push(line.to_owned());
})));

logger::set_level("warn");
logger::info!("not emitted");
logger::warn!("{} of {} replicas down", 1, 3);
logger::set_observer(None);

let seen = seen.lock().unwrap();
assert_eq!(seen.len(), 1);
assert!(seen[0].ends_with(" WARN - 1 of 3 replicas down"));
```
"#
)]

mod config;
mod entry;
mod global;
mod level;
mod logger;
mod macros;
mod sink;
mod timestamp;

#[cfg(feature = "observer")]
mod observer;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use entry::Entry;
pub use global::{
    configure, debug, enabled, error, global, info, level, log, set_level, set_threshold, trace,
    warn,
};
pub use level::{Level, LevelError};
pub use logger::Logger;
pub use sink::ConsoleSink;

#[cfg(feature = "observer")]
pub use global::set_observer;
#[cfg(feature = "observer")]
pub use observer::Observer;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, try_init_tracing};
