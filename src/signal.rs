// signal.rs

use std::fmt;

/// Handle returned by [`ChangeSignal::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Synchronous fan-out to listeners, in registration order.
///
/// Listeners are invoked on the caller's stack with a shared reference to
/// whatever the owner passes to [`ChangeSignal::emit`].
pub struct ChangeSignal<A: ?Sized> {
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(&A)>)>,
    next_id: u64,
}

impl<A: ?Sized> ChangeSignal<A> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&A) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was never registered or is already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(sid, _)| *sid == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn emit(&mut self, arg: &A) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<A: ?Sized> Default for ChangeSignal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for ChangeSignal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
