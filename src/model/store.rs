//! Observed state container
//!
//! Holds a state value and notifies subscribers after every update. The app
//! subscribes to mark the screen dirty; views read the state on draw.

use std::fmt;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S)>;

pub struct Store<S> {
    state: S,
    subscribers: Vec<(SubscriptionId, Subscriber<S>)>,
    next_id: u64,
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state. Reading never notifies.
    pub fn get(&self) -> &S {
        &self.state
    }

    /// Mutate the state, then notify every subscriber in subscription order
    pub fn update<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.state);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
        result
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
