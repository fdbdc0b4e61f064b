use std::io;

use super::ConsoleSink;

impl ConsoleSink<io::Stderr> {
    /// Creates a sink writing to standard error, the classic console target.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> ConsoleSink<W> {
    /// Creates a sink with timestamps enabled.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
            timestamps: true,
        }
    }

    /// Reports whether lines start with a timestamp.
    #[must_use]
    pub const fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Enables or disables the timestamp prefix.
    pub fn set_timestamps(&mut self, timestamps: bool) {
        self.timestamps = timestamps;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for ConsoleSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
