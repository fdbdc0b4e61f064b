//! crates/logger/src/level.rs
//! Severity levels, their display prefixes, and name lookup.

use std::fmt;
use std::str::FromStr;

/// Severity of a log entry.
///
/// Discriminants follow the classic console-logger numbering where a higher
/// value is more verbose. An entry is emitted when its level is less than or
/// equal to the logger's current threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Failures that need attention.
    Error = 1,
    /// Recoverable problems.
    Warn = 2,
    /// Normal operational messages.
    #[default]
    Info = 3,
    /// Diagnostic detail.
    Debug = 4,
    /// Very verbose diagnostic detail.
    Trace = 5,
}

/// Error returned by the strict level conversions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// The name did not match any level.
    #[error("unknown log level: {0:?}")]
    Unknown(String),
    /// The numeric value was outside `1..=5`.
    #[error("log level value {0} is out of range (expected 1-5)")]
    OutOfRange(u8),
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Numeric value of the level (`ERROR = 1` through `TRACE = 5`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a level.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Upper-case level name, e.g. `"WARN"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Prefix written in front of every message at this level.
    ///
    /// ```
    /// use logger::Level;
    ///
    /// assert_eq!(Level::Warn.prefix(), "WARN - ");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "ERROR - ",
            Self::Warn => "WARN - ",
            Self::Info => "INFO - ",
            Self::Debug => "DEBUG - ",
            Self::Trace => "TRACE - ",
        }
    }

    /// Looks up a level by name, ignoring case.
    ///
    /// Unknown names, including the empty string, fall back to
    /// [`Level::Info`]. Use [`str::parse`] when an unknown name should be
    /// reported instead.
    ///
    /// ```
    /// use logger::Level;
    ///
    /// assert_eq!(Level::from_name("DeBuG"), Level::Debug);
    /// assert_eq!(Level::from_name("verbose"), Level::Info);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or(Self::Info)
    }

    fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, LevelError> {
        Self::lookup(s).ok_or_else(|| LevelError::Unknown(s.to_owned()))
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, LevelError> {
        Self::from_value(value).ok_or(LevelError::OutOfRange(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}
