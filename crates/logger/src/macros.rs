//! crates/logger/src/macros.rs
//! Logging macros with format-string handling.
//!
//! A call with only a message passes the message through verbatim: braces in
//! it are never treated as placeholders. Once arguments follow, the first
//! argument is a format string interpreted by [`format_args!`]. Every macro
//! accepts a leading `logger: <expr>,` to target an explicit
//! [`Logger`](crate::Logger) instead of the process-wide one.

/// Logs at an explicit [`Level`](crate::Level).
///
/// # Examples
///
/// ```
/// use logger::{Level, Logger};
///
/// let logger = Logger::new(Vec::<u8>::new());
/// logger.set_timestamps(false);
///
/// logger::log!(logger: &logger, Level::Warn, "{}% used", 93);
/// logger::log!(logger: &logger, Level::Error, "100% {used}");
///
/// let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
/// assert_eq!(output, "WARN - 93% used\nERROR - 100% {used}\n");
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($fmt, $($arg)+))
    };
    (logger: $logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.log($level, ::std::format_args!("{}", $message))
    };
    ($level:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::log($level, ::std::format_args!($fmt, $($arg)+))
    };
    ($level:expr, $message:expr $(,)?) => {
        $crate::log($level, ::std::format_args!("{}", $message))
    };
}

/// Logs a trace-level message.
///
/// # Example
/// ```ignore
/// trace!("entering {}", name);
/// ```
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}

/// Logs a debug-level message.
///
/// # Example
/// ```ignore
/// debug!("cache size {}", size);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Logs an info-level message.
///
/// # Example
/// ```ignore
/// info!("count={}", 5);
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Logs a warning-level message.
///
/// # Example
/// ```ignore
/// warn!("retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Logs an error-level message.
///
/// # Example
/// ```ignore
/// error!("giving up after {} attempts", attempts);
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, Logger};

    fn quiet_logger() -> Logger<Vec<u8>> {
        let logger = Logger::new(Vec::new());
        logger.set_timestamps(false);
        logger.set_threshold(Level::Trace);
        logger
    }

    fn output(logger: Logger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_sink().into_inner()).expect("utf-8")
    }

    #[test]
    fn message_only_is_verbatim() {
        let logger = quiet_logger();
        crate::info!(logger: &logger, "no args");
        crate::info!(logger: &logger, "50% {done}");
        crate::info!(logger: &logger, "{}",);
        assert_eq!(output(logger), "INFO - no args\nINFO - 50% {done}\nINFO - {}\n");
    }

    #[test]
    fn arguments_are_interpolated() {
        let logger = quiet_logger();
        crate::info!(logger: &logger, "count={}", 5);
        crate::warn!(logger: &logger, "{:>4}|{:<3}|", "ab", 7);
        assert_eq!(output(logger), "INFO - count=5\nWARN -   ab|7  |\n");
    }

    #[test]
    fn message_may_be_any_display_value() {
        let logger = quiet_logger();
        let owned = String::from("owned text");
        crate::debug!(logger: &logger, owned);
        crate::error!(logger: &logger, 42);
        assert_eq!(output(logger), "DEBUG - owned text\nERROR - 42\n");
    }

    #[test]
    fn every_level_macro_uses_its_prefix() {
        let logger = quiet_logger();
        crate::trace!(logger: &logger, "t");
        crate::debug!(logger: &logger, "d");
        crate::info!(logger: &logger, "i");
        crate::warn!(logger: &logger, "w");
        crate::error!(logger: &logger, "e");
        assert_eq!(
            output(logger),
            "TRACE - t\nDEBUG - d\nINFO - i\nWARN - w\nERROR - e\n"
        );
    }

    #[test]
    fn log_macro_accepts_runtime_level() {
        let logger = quiet_logger();
        for level in [Level::Error, Level::Debug] {
            crate::log!(logger: &logger, level, "at {}", level);
        }
        assert_eq!(output(logger), "ERROR - at ERROR\nDEBUG - at DEBUG\n");
    }
}
