//! crates/logger/src/timestamp.rs
//! Timestamp rendering for console lines and observer payloads.

use time::OffsetDateTime;
#[cfg(feature = "observer")]
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

const CONSOLE_FALLBACK: &str = "1970/01/01 00:00:00";
#[cfg(feature = "observer")]
const RFC3339_FALLBACK: &str = "1970-01-01T00:00:00Z";

/// Current wall-clock time in the local offset.
///
/// The local offset cannot always be determined (notably once a process has
/// spawned threads on some Unix platforms); UTC is used in that case.
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Appends the console prefix for `at`, followed by a single space.
///
/// The prefix is `YYYY/MM/DD HH:MM:SS`, the classic console-logger layout.
pub(crate) fn push_console_prefix(buffer: &mut String, at: OffsetDateTime) {
    let layout = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    match at.format(layout) {
        Ok(text) => buffer.push_str(&text),
        Err(_) => buffer.push_str(CONSOLE_FALLBACK),
    }
    buffer.push(' ');
}

/// Formats `at` as RFC 3339 with whole-second precision.
///
/// UTC renders as `Z`, other offsets as `+hh:mm`/`-hh:mm`.
#[cfg(feature = "observer")]
pub(crate) fn rfc3339(at: OffsetDateTime) -> String {
    let whole = at.replace_nanosecond(0).unwrap_or(at);
    whole
        .format(&Rfc3339)
        .unwrap_or_else(|_| RFC3339_FALLBACK.to_owned())
}

/// Builds the observer payload: timestamp, one space, rendered entry.
#[cfg(feature = "observer")]
pub(crate) fn observed_line(at: OffsetDateTime, entry: &crate::Entry) -> String {
    use std::fmt::Write as _;

    let mut line = rfc3339(at);
    line.push(' ');
    let _ = write!(line, "{entry}");
    line
}
