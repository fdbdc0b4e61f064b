//! crates/logger/src/sink/mod.rs
//! Console sink that renders entries into an [`std::io::Write`] target.

use std::fmt;

mod constructors;
mod writing;

/// Line-oriented sink that renders [`Entry`](crate::Entry) values into a writer.
///
/// The sink owns the writer together with a reusable scratch buffer. Each
/// entry is rendered into the scratch buffer first and then handed to the
/// writer with a single `write_all`, so lines written through a shared sink
/// never interleave. By default every line starts with a
/// `YYYY/MM/DD HH:MM:SS ` timestamp and ends with a newline.
///
/// # Examples
///
/// ```
/// use logger::{ConsoleSink, Entry, Level};
///
/// let mut sink = ConsoleSink::new(Vec::<u8>::new());
/// sink.set_timestamps(false);
/// sink.write(&Entry::new(Level::Warn, format_args!("low disk")))?;
///
/// assert_eq!(sink.into_inner(), b"WARN - low disk\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct ConsoleSink<W> {
    writer: W,
    scratch: String,
    timestamps: bool,
}

impl<W> fmt::Debug for ConsoleSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("writer", &self.writer)
            .field("timestamps", &self.timestamps)
            .finish()
    }
}
