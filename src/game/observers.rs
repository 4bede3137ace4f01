use core::sync::atomic::{AtomicBool, Ordering};

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::deck::CardProvider;
use crate::event::{GameEvent, SubscriptionId};
use crate::sync::Mutex;

use super::Game;

impl<P: CardProvider> Game<P> {
    /// Subscribes an observer to every event the game emits.
    ///
    /// Observers do not replace each other; each one receives every event in
    /// emission order. Events are queued while the command that raised them
    /// still holds the game, so commands issued from several threads are
    /// observed in the order they ran. Delivery happens once the game has
    /// been released: an observer may query the game, play a card, or
    /// subscribe and unsubscribe. Events raised from inside a callback are
    /// delivered after the current batch.
    ///
    /// Returns the ID to pass to [`Game::unsubscribe`].
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        let observer: super::Observer = Box::new(observer);
        self.observers.lock().push((id, Arc::new(Mutex::new(observer))));
        id
    }

    /// Removes an observer.
    ///
    /// Returns `false` if no observer is registered under `id`.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(subscription, _)| *subscription != id);
        observers.len() != before
    }

    /// Returns the number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    /// Queues events for delivery. Call while the command's locks are held.
    pub(super) fn enqueue(&self, events: Vec<GameEvent>) {
        if !events.is_empty() {
            self.pending.lock().extend(events);
        }
    }

    /// Delivers queued events unless another call is already doing so.
    ///
    /// Only one caller drains the queue at a time, which keeps the queue
    /// order and never runs an observer while it is already running.
    pub(super) fn dispatch(&self) {
        loop {
            if self.dispatching.swap(true, Ordering::AcqRel) {
                return;
            }

            {
                let _dispatching = Dispatching(&self.dispatching);
                loop {
                    let batch = core::mem::take(&mut *self.pending.lock());
                    if batch.is_empty() {
                        break;
                    }

                    let observers: Vec<_> = self
                        .observers
                        .lock()
                        .iter()
                        .map(|(_, observer)| Arc::clone(observer))
                        .collect();
                    for event in &batch {
                        for observer in &observers {
                            let mut callback = observer.lock();
                            (*callback)(event);
                        }
                    }
                }
            }

            // Events queued between the last drain and the release would
            // otherwise wait for the next command.
            if self.pending.lock().is_empty() {
                return;
            }
        }
    }
}

/// Clears the dispatch flag, even when an observer panics.
struct Dispatching<'a>(&'a AtomicBool);

impl Drop for Dispatching<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
