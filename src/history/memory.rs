use std::fmt;

use parking_lot::RwLock;

use super::{History, LocationListener};
use crate::types::Location;

#[derive(Debug)]
struct HistoryStack {
    entries: Vec<Location>,
    cursor: usize,
}

impl HistoryStack {
    fn current(&self) -> Location {
        self.entries[self.cursor].clone()
    }
}

/// In-process history with back/forward navigation.
///
/// Listeners run after the stack lock is released, so a listener may read
/// [`History::current`] or navigate again.
pub struct MemoryHistory {
    inner: RwLock<HistoryStack>,
    listeners: RwLock<Vec<LocationListener>>,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            inner: RwLock::new(HistoryStack {
                entries: vec![initial],
                cursor: 0,
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Number of entries on the stack. Never zero: the initial location is
    /// always present.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Always `false`; see [`MemoryHistory::len`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    pub fn back(&self) -> bool {
        let location = {
            let mut guard = self.inner.write();
            if guard.cursor == 0 {
                return false;
            }
            guard.cursor -= 1;
            guard.current()
        };
        self.notify(&location);
        true
    }

    pub fn forward(&self) -> bool {
        let location = {
            let mut guard = self.inner.write();
            if guard.cursor + 1 >= guard.entries.len() {
                return false;
            }
            guard.cursor += 1;
            guard.current()
        };
        self.notify(&location);
        true
    }

    fn notify(&self, location: &Location) {
        let listeners = self.listeners.read().clone();
        tracing::event!(tracing::Level::TRACE, operation = "notify", pathname = %location.pathname, listeners = listeners.len() as u64);
        for listener in &listeners {
            listener(location);
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Location::new("/", ""))
    }
}

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("inner", &*self.inner.read())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl History for MemoryHistory {
    fn push(&self, location: Location) {
        {
            let mut guard = self.inner.write();
            let keep = guard.cursor + 1;
            guard.entries.truncate(keep);
            guard.entries.push(location.clone());
            guard.cursor = keep;
        }
        self.notify(&location);
    }

    fn replace(&self, location: Location) {
        {
            let mut guard = self.inner.write();
            let cursor = guard.cursor;
            guard.entries[cursor] = location.clone();
        }
        self.notify(&location);
    }

    fn current(&self) -> Location {
        self.inner.read().current()
    }

    fn subscribe(&self, listener: LocationListener) {
        let location = self.current();
        self.listeners.write().push(listener.clone());
        listener(&location);
    }
}
