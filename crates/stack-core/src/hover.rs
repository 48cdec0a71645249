//! Component-scoped hover tracking.
//!
//! A [`HoverScope`] is owned by one component tree (a navigation list, a
//! sidebar) and passed explicitly to whatever needs to observe it. There
//! is no process-wide hover state: two scopes never see each other's
//! changes.

use std::fmt;

use tracing::trace;

/// Handle returned by [`HoverScope::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<K> = Box<dyn FnMut(Option<&K>)>;

/// Tracks which item in a component tree is hovered and notifies subscribers.
pub struct HoverScope<K> {
    /// The currently hovered key.
    current: Option<K>,
    /// Subscribers in subscription order.
    listeners: Vec<(SubscriptionId, Listener<K>)>,
    /// Next subscription id to hand out.
    next_id: u64,
}

impl<K: Clone + PartialEq + fmt::Debug> HoverScope<K> {
    /// Creates an empty scope with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the currently hovered key.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Returns whether `key` is the hovered item.
    pub fn is_hovered(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    /// Marks `key` as hovered.
    pub fn enter(&mut self, key: K) {
        self.set(Some(key));
    }

    /// Clears the hover if `key` is the hovered item.
    ///
    /// A stale `leave` from an item that already lost hover is ignored.
    pub fn leave(&mut self, key: &K) {
        if self.is_hovered(key) {
            self.set(None);
        }
    }

    /// Clears the hover unconditionally.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// Registers a listener called with the new hovered key on every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&K>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn set(&mut self, next: Option<K>) {
        if self.current == next {
            return;
        }
        trace!(from = ?self.current, to = ?next, "Hover changed");
        self.current = next;
        for (_, listener) in &mut self.listeners {
            listener(self.current.as_ref());
        }
    }
}

impl<K: Clone + PartialEq + fmt::Debug> Default for HoverScope<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for HoverScope<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverScope")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
