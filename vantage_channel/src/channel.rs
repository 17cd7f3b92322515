// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named-channel broadcaster.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::subscription::{Callback, SubscribeOptions, Subscription, SubscriptionId};

/// Synchronous publish/subscribe mediator keyed by channel name.
///
/// Each channel keeps its subscriptions in delivery order: descending
/// priority, and subscription order among equal priorities. [`publish`]
/// calls every matching subscription before returning.
///
/// An `EventChannel` is an ordinary owned value. Construct one at
/// composition time and hand it (or a borrow of it) to whatever needs to
/// publish or subscribe.
///
/// Callbacks receive only the payload. The registry is mutably borrowed for
/// the whole of [`publish`], so a callback cannot publish, subscribe or
/// remove on the channel that is delivering to it. With a channel shared
/// through `Rc<RefCell<_>>`, borrowing it from inside a callback fails (and
/// `borrow_mut` panics). Record follow-up work in the callback and apply it
/// after `publish` returns.
///
/// [`publish`]: EventChannel::publish
///
/// ## Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use vantage_channel::{EventChannel, SubscribeOptions};
///
/// let mut channel = EventChannel::<u32>::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// for priority in [1, 5, 3] {
///     let log = log.clone();
///     channel.subscribe_fn(
///         "x",
///         move |_: &u32| log.borrow_mut().push(priority),
///         SubscribeOptions::new().priority(priority),
///     );
/// }
///
/// channel.publish("x", &0);
/// assert_eq!(*log.borrow(), vec![5, 3, 1]);
/// ```
pub struct EventChannel<P> {
    channels: HashMap<String, Vec<Subscription<P>>>,
    next_id: u64,
}

impl<P> EventChannel<P> {
    /// Creates a channel registry with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `callback` on `channel`.
    ///
    /// A subscription with a call budget of zero never fires and is not
    /// stored; its handle is still unique.
    pub fn subscribe(
        &mut self,
        channel: &str,
        callback: Callback<P>,
        options: SubscribeOptions<P>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        if options.calls == Some(0) {
            tracing::trace!(channel, id = id.0, "dropping subscription with empty call budget");
            return id;
        }

        let priority = options.priority;
        let subs = self
            .channels
            .entry_ref(channel)
            .or_insert_with(Vec::new);
        // Insert after every subscription of equal or higher priority.
        let at = subs
            .iter()
            .position(|s| s.priority < priority)
            .unwrap_or(subs.len());
        subs.insert(
            at,
            Subscription {
                id,
                callback,
                predicate: options.predicate,
                priority,
                remaining: options.calls,
            },
        );
        tracing::trace!(channel, id = id.0, priority, "subscribed");
        id
    }

    /// Registers a closure on `channel`.
    ///
    /// The closure can only be removed through the returned handle; use
    /// [`subscribe`](Self::subscribe) with a shared [`Callback`] to remove by
    /// identity.
    pub fn subscribe_fn(
        &mut self,
        channel: &str,
        callback: impl Fn(&P) + 'static,
        options: SubscribeOptions<P>,
    ) -> SubscriptionId {
        self.subscribe(channel, Rc::new(callback), options)
    }

    /// Delivers `payload` to every matching subscription on `channel`.
    ///
    /// Returns the number of subscriptions that fired. Publishing on a
    /// channel nobody listens to is a no-op.
    pub fn publish(&mut self, channel: &str, payload: &P) -> usize {
        let Some(subs) = self.channels.get_mut(channel) else {
            tracing::trace!(channel, "publish without subscribers");
            return 0;
        };

        let mut fired = 0;
        for sub in subs.iter_mut() {
            if sub.deliver(payload) {
                fired += 1;
            }
        }

        let before = subs.len();
        subs.retain(|s| !s.is_exhausted());
        let expired = before - subs.len();
        if subs.is_empty() {
            self.channels.remove(channel);
        }

        tracing::trace!(channel, fired, expired, "published");
        fired
    }

    /// Removes every subscription on `channel` registered with `callback`.
    ///
    /// Callbacks are matched by identity. Returns how many subscriptions
    /// were removed; removing a callback that is not subscribed is a no-op.
    pub fn remove(&mut self, channel: &str, callback: &Callback<P>) -> usize {
        let Some(subs) = self.channels.get_mut(channel) else {
            return 0;
        };
        let before = subs.len();
        subs.retain(|s| !Rc::ptr_eq(&s.callback, callback));
        let removed = before - subs.len();
        if subs.is_empty() {
            self.channels.remove(channel);
        }
        removed
    }

    /// Removes the subscription identified by `id`, on whichever channel.
    ///
    /// Returns `false` if it was already removed or expired.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut emptied = None;
        let mut found = false;
        for (name, subs) in self.channels.iter_mut() {
            if let Some(at) = subs.iter().position(|s| s.id == id) {
                subs.remove(at);
                found = true;
                if subs.is_empty() {
                    emptied = Some(name.clone());
                }
                break;
            }
        }
        if let Some(name) = emptied {
            self.channels.remove(&name);
        }
        found
    }

    /// Number of live subscriptions on `channel`.
    #[must_use]
    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.channels.get(channel).map_or(0, Vec::len)
    }

    /// Returns `true` if `channel` has at least one live subscription.
    #[must_use]
    pub fn has_subscribers(&self, channel: &str) -> bool {
        self.subscriber_count(channel) > 0
    }

    /// Drops every subscription on every channel.
    pub fn clear(&mut self) {
        self.channels.clear();
    }
}

impl<P> Default for EventChannel<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventChannel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, subs) in &self.channels {
            map.entry(name, &subs.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use super::EventChannel;
    use crate::{Callback, SubscribeOptions};

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let mut channel = EventChannel::<i32>::new();
        assert_eq!(channel.publish("nobody", &1), 0);
        assert!(!channel.has_subscribers("nobody"));
    }

    #[test]
    fn equal_priorities_keep_subscription_order() {
        let mut channel = EventChannel::<()>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (tag, priority) in [('a', 0), ('b', 2), ('c', 0), ('d', 2)] {
            let log = log.clone();
            channel.subscribe_fn(
                "x",
                move |_: &()| log.borrow_mut().push(tag),
                SubscribeOptions::new().priority(priority),
            );
        }

        channel.publish("x", &());
        assert_eq!(*log.borrow(), vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn predicate_is_evaluated_per_publish() {
        let mut channel = EventChannel::<i32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let threshold = Rc::new(Cell::new(10));

        let sink = seen.clone();
        let limit = threshold.clone();
        channel.subscribe_fn(
            "n",
            move |n: &i32| sink.borrow_mut().push(*n),
            SubscribeOptions::new().predicate(move |n: &i32| *n > limit.get()),
        );

        channel.publish("n", &5);
        channel.publish("n", &15);
        threshold.set(0);
        channel.publish("n", &5);
        assert_eq!(*seen.borrow(), vec![15, 5]);
    }

    #[test]
    fn filtered_publish_does_not_spend_budget() {
        let mut channel = EventChannel::<i32>::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        channel.subscribe_fn(
            "n",
            move |_: &i32| counter.set(counter.get() + 1),
            SubscribeOptions::new()
                .calls(1)
                .predicate(|n: &i32| *n % 2 == 0),
        );

        assert_eq!(channel.publish("n", &1), 0);
        assert_eq!(channel.subscriber_count("n"), 1);
        assert_eq!(channel.publish("n", &2), 1);
        assert_eq!(channel.subscriber_count("n"), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn zero_call_budget_never_subscribes() {
        let mut channel = EventChannel::<()>::new();
        let first = channel.subscribe_fn("x", |_: &()| {}, SubscribeOptions::new().calls(0));
        let second = channel.subscribe_fn("x", |_: &()| {}, SubscribeOptions::new());
        assert_ne!(first, second);
        assert_eq!(channel.subscriber_count("x"), 1);
    }

    #[test]
    fn remove_matches_callback_identity_on_one_channel() {
        let mut channel = EventChannel::<()>::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let shared: Callback<()> = Rc::new(move |_: &()| counter.set(counter.get() + 1));
        let other: Callback<()> = Rc::new(|_: &()| {});

        channel.subscribe("a", shared.clone(), SubscribeOptions::new());
        channel.subscribe("a", shared.clone(), SubscribeOptions::new().priority(3));
        channel.subscribe("a", other.clone(), SubscribeOptions::new());
        channel.subscribe("b", shared.clone(), SubscribeOptions::new());

        assert_eq!(channel.remove("a", &shared), 2);
        assert_eq!(channel.subscriber_count("a"), 1);
        assert_eq!(channel.subscriber_count("b"), 1);

        // Removing again, or on an unknown channel, is a no-op.
        assert_eq!(channel.remove("a", &shared), 0);
        assert_eq!(channel.remove("zzz", &shared), 0);

        channel.publish("a", &());
        channel.publish("b", &());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unsubscribe_by_handle() {
        let mut channel = EventChannel::<()>::new();
        let keep = channel.subscribe_fn("x", |_: &()| {}, SubscribeOptions::new());
        let gone = channel.subscribe_fn("y", |_: &()| {}, SubscribeOptions::new());

        assert!(channel.unsubscribe(gone));
        assert!(!channel.unsubscribe(gone));
        assert!(!channel.has_subscribers("y"));
        assert!(channel.has_subscribers("x"));

        assert!(channel.unsubscribe(keep));
        channel.clear();
        assert_eq!(channel.subscriber_count("x"), 0);
    }
}
