//! crates/logger/src/tracing_bridge.rs
//! Bridge from the tracing crate into the leveled logger.
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that forwards every event's
//! `message` field to a [`Logger`], so libraries instrumented with `tracing`
//! macros end up in the same console sink and observer as direct log calls.
//! The logger's own threshold still decides what is emitted.
//!
//! # Usage
//!
//! ```rust,ignore
//! logger::set_level("debug");
//! logger::try_init_tracing()?;
//!
//! tracing::debug!("reached the console through the logger");
//! ```

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use super::level::Level;
use super::logger::Logger;

type Emit = dyn Fn(Level, fmt::Arguments<'_>) + Send + Sync;

/// A tracing layer that writes events through a [`Logger`].
pub struct LoggerLayer {
    emit: Box<Emit>,
}

impl LoggerLayer {
    /// Creates a layer routing events to the process-wide logger.
    #[must_use]
    pub fn global() -> Self {
        Self {
            emit: Box::new(super::global::log),
        }
    }

    /// Creates a layer routing events to `logger`.
    #[must_use]
    pub fn new<W>(logger: Arc<Logger<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            emit: Box::new(move |level: Level, args: fmt::Arguments<'_>| {
                logger.log(level, args);
            }),
        }
    }

    /// Map a tracing level to a logger level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Trace,
        }
    }
}

impl fmt::Debug for LoggerLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            (self.emit)(level, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a subscriber that routes tracing events to the process-wide
/// logger.
///
/// # Panics
///
/// Panics if a global default subscriber has already been set. Use
/// [`try_init_tracing`] when another component may have installed one.
pub fn init_tracing() {
    if let Err(error) = try_init_tracing() {
        panic!("failed to install the logger tracing subscriber: {error}");
    }
}

/// Installs a subscriber that routes tracing events to the process-wide
/// logger, reporting instead of panicking when one is already installed.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::global())
        .try_init()
}
