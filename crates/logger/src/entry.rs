//! crates/logger/src/entry.rs
//! A single formatted log entry.

use std::fmt;

use super::level::Level;

/// A formatted message paired with the level it was logged at.
///
/// Entries only exist between the threshold check and the moment the line
/// reaches the sink and observer; nothing retains them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    level: Level,
    message: String,
}

impl Entry {
    /// Renders `args` into a new entry.
    #[must_use]
    pub fn new(level: Level, args: fmt::Arguments<'_>) -> Self {
        let message = args
            .as_str()
            .map_or_else(|| fmt::format(args), str::to_owned);
        Self { level, message }
    }

    /// Level the entry was logged at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Message text without the level prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefix for the entry's level, e.g. `"INFO - "`.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.level.prefix()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())?;
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prepends_prefix() {
        let entry = Entry::new(Level::Warn, format_args!("disk {}% full", 91));
        assert_eq!(entry.to_string(), "WARN - disk 91% full");
        assert_eq!(entry.message(), "disk 91% full");
        assert_eq!(entry.level(), Level::Warn);
    }

    #[test]
    fn literal_arguments_are_copied_verbatim() {
        let entry = Entry::new(Level::Info, format_args!("{}", "100% {}"));
        assert_eq!(entry.to_string(), "INFO - 100% {}");
    }

    #[test]
    fn empty_message_keeps_prefix() {
        let entry = Entry::new(Level::Error, format_args!(""));
        assert_eq!(entry.to_string(), "ERROR - ");
    }
}
