//! crates/logger/src/observer.rs
//! Single-slot callback notified after each emitted entry.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Callback receiving `"<RFC3339 timestamp> <LEVEL> - <message>"` for every
/// entry that passes the threshold.
///
/// The observer runs synchronously on the thread that logged, after the
/// console line has been written, so a slow observer slows the caller down.
/// No internal lock is held while it runs: it may log again or replace
/// itself.
pub type Observer = Arc<dyn Fn(&str) + Send + Sync>;

/// Storage for at most one [`Observer`].
#[derive(Default)]
pub(crate) struct ObserverSlot {
    current: RwLock<Option<Observer>>,
}

impl ObserverSlot {
    /// Installs `observer`, returning whatever was registered before.
    pub(crate) fn replace(&self, observer: Option<Observer>) -> Option<Observer> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, observer)
    }

    /// Clones the registered observer out of the slot.
    pub(crate) fn get(&self) -> Option<Observer> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("set", &self.is_set())
            .finish()
    }
}
