//! Integration test for routing tracing events to the global logger.
//!
//! Installing a global tracing subscriber can only happen once per process,
//! so this binary holds a single test.

#![cfg(all(feature = "tracing", feature = "observer"))]

use std::sync::{Arc, Mutex};

/// Verifies tracing macros reach the global logger once `init_tracing` runs,
/// and that a second installation is reported instead of panicking.
#[test]
fn init_tracing_routes_to_global_logger() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let captured = Arc::clone(&seen);
    logger::set_observer(Some(Arc::new(move |line: &str| {
        captured.lock().unwrap().push(line.to_owned());
    })));
    logger::set_level("debug");

    logger::init_tracing();
    tracing::debug!(peer = "10.0.0.7", "handshake {}", "complete");
    tracing::trace!("above threshold");

    let second = logger::try_init_tracing();
    assert!(second.is_err(), "a subscriber is already installed");
    tracing::debug!("still routed");

    logger::set_observer(None);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].ends_with(" DEBUG - handshake complete"));
    assert!(seen[1].ends_with(" DEBUG - still routed"));
}
