//! crates/logger/src/config.rs
//! Logger configuration combining the threshold with the console timestamp toggle.

use super::level::Level;
use super::logger::Logger;
use super::sink::ConsoleSink;

/// Settings applied to a [`Logger`] in one step.
///
/// With the `serde` feature enabled the configuration can be embedded in an
/// application's own configuration document; missing fields take their
/// default values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Most verbose level still emitted.
    pub level: Level,
    /// Whether console lines start with a `YYYY/MM/DD HH:MM:SS` timestamp.
    pub timestamps: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            timestamps: true,
        }
    }
}

impl LoggerConfig {
    /// Default configuration with the threshold taken from a level name.
    ///
    /// Unknown names select [`Level::Info`], matching [`Logger::set_level`].
    #[must_use]
    pub fn from_level_name(name: &str) -> Self {
        Self {
            level: Level::from_name(name),
            ..Self::default()
        }
    }

    /// Builds a new logger writing to `writer`.
    #[must_use]
    pub fn build<W>(&self, writer: W) -> Logger<W> {
        let mut sink = ConsoleSink::new(writer);
        sink.set_timestamps(self.timestamps);
        let logger = Logger::with_sink(sink);
        logger.set_threshold(self.level);
        logger
    }
}

impl<W> Logger<W> {
    /// Applies every setting in `config` to this logger.
    ///
    /// The observer slot is left untouched.
    pub fn apply(&self, config: &LoggerConfig) {
        self.set_threshold(config.level);
        self.set_timestamps(config.timestamps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fresh_logger() {
        let config = LoggerConfig::default();
        let logger = Logger::new(Vec::<u8>::new());
        assert_eq!(config.level, logger.level());
        assert_eq!(config.timestamps, logger.sink().timestamps());
    }

    #[test]
    fn from_level_name_is_lenient() {
        assert_eq!(LoggerConfig::from_level_name("Debug").level, Level::Debug);
        assert_eq!(LoggerConfig::from_level_name("chatty").level, Level::Info);
    }

    #[test]
    fn build_applies_every_field() {
        let config = LoggerConfig {
            level: Level::Error,
            timestamps: false,
        };
        let logger = config.build(Vec::<u8>::new());
        logger.warn(format_args!("dropped"));
        logger.error(format_args!("kept"));

        assert_eq!(logger.level(), Level::Error);
        assert_eq!(logger.into_sink().into_inner(), b"ERROR - kept\n".to_vec());
    }

    #[test]
    fn apply_reconfigures_existing_logger() {
        let logger = Logger::new(Vec::<u8>::new());
        logger.apply(&LoggerConfig {
            level: Level::Trace,
            timestamps: false,
        });
        logger.trace(format_args!("visible"));

        assert_eq!(logger.level(), Level::Trace);
        assert_eq!(logger.into_sink().into_inner(), b"TRACE - visible\n".to_vec());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn config_serde_roundtrip() {
            let config = LoggerConfig {
                level: Level::Warn,
                timestamps: false,
            };

            let json = serde_json::to_string(&config).unwrap();
            let decoded: LoggerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, decoded);
        }

        #[test]
        fn level_uses_lowercase_names() {
            let json = serde_json::to_string(&Level::Debug).unwrap();
            assert_eq!(json, "\"debug\"");
            assert!(serde_json::from_str::<Level>("\"verbose\"").is_err());
        }

        #[test]
        fn missing_fields_take_defaults() {
            let decoded: LoggerConfig = serde_json::from_str(r#"{"level":"trace"}"#).unwrap();
            assert_eq!(decoded.level, Level::Trace);
            assert!(decoded.timestamps);
        }
    }
}
