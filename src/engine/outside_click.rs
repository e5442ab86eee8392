//! Boundary-click subscription for the search dropdown.
//!
//! The UI shell subscribes a handler while the dropdown is active and
//! drops the guard when it deactivates; clicks outside the search box
//! are delivered to every live handler.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Handlers {
    next_id: u64,
    by_id: HashMap<u64, Handler>,
}

/// Registry of outside-click handlers with scoped subscriptions.
#[derive(Clone, Default)]
pub struct OutsideClickRegistry {
    inner: Arc<Mutex<Handlers>>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. It stays live until the returned guard is
    /// dropped.
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> OutsideClickGuard {
        let mut handlers = self.inner.lock().unwrap();
        let id = handlers.next_id;
        handlers.next_id += 1;
        handlers.by_id.insert(id, Box::new(handler));
        OutsideClickGuard {
            inner: Arc::clone(&self.inner),
            id,
        }
    }

    /// Deliver one outside-click event to every live handler.
    pub fn notify_outside_click(&self) {
        let handlers = self.inner.lock().unwrap();
        for handler in handlers.by_id.values() {
            handler();
        }
    }
}

impl std::fmt::Debug for OutsideClickRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.lock().map(|h| h.by_id.len()).unwrap_or(0);
        f.debug_struct("OutsideClickRegistry")
            .field("handlers", &count)
            .finish()
    }
}

/// Releases its handler when dropped.
pub struct OutsideClickGuard {
    inner: Arc<Mutex<Handlers>>,
    id: u64,
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Ok(mut handlers) = self.inner.lock() {
            handlers.by_id.remove(&self.id);
        }
    }
}
