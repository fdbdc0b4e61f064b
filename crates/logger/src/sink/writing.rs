use std::fmt::Write as _;
use std::io::{self, Write};

use time::OffsetDateTime;

use super::ConsoleSink;
use crate::entry::Entry;
use crate::timestamp;

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Writes a single entry stamped with the current time.
    pub fn write(&mut self, entry: &Entry) -> io::Result<()> {
        self.write_at(entry, timestamp::now())
    }

    /// Writes `entry` as if it had been logged at `at`.
    pub(crate) fn write_at(&mut self, entry: &Entry, at: OffsetDateTime) -> io::Result<()> {
        self.scratch.clear();
        if self.timestamps {
            timestamp::push_console_prefix(&mut self.scratch, at);
        }
        // Writing into a String cannot fail.
        let _ = writeln!(self.scratch, "{entry}");
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
