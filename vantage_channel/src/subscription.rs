// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription options and handles.

use alloc::rc::Rc;
use core::fmt;

/// A subscriber callback.
///
/// Callbacks are reference counted so the same callback can be registered on
/// several channels and later removed by identity with
/// [`EventChannel::remove`](crate::EventChannel::remove).
pub type Callback<P> = Rc<dyn Fn(&P)>;

/// A per-publish filter over the payload.
pub type Predicate<P> = Rc<dyn Fn(&P) -> bool>;

/// Handle identifying one subscription.
///
/// Returned by [`EventChannel::subscribe`](crate::EventChannel::subscribe);
/// pass it to [`EventChannel::unsubscribe`](crate::EventChannel::unsubscribe)
/// to remove exactly that subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

/// Optional knobs for a subscription.
///
/// ```
/// use vantage_channel::SubscribeOptions;
///
/// let opts = SubscribeOptions::<i32>::new()
///     .priority(10)
///     .calls(3)
///     .predicate(|n: &i32| *n > 0);
/// assert_eq!(opts.priority_value(), 10);
/// assert_eq!(opts.calls_value(), Some(3));
/// ```
pub struct SubscribeOptions<P> {
    pub(crate) predicate: Option<Predicate<P>>,
    pub(crate) priority: i32,
    pub(crate) calls: Option<u32>,
}

impl<P> SubscribeOptions<P> {
    /// Default options: priority `0`, no predicate, unlimited calls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicate: None,
            priority: 0,
            calls: None,
        }
    }

    /// Delivery priority; higher priorities are called first.
    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Number of deliveries after which the subscription removes itself.
    #[must_use]
    pub fn calls(mut self, calls: u32) -> Self {
        self.calls = Some(calls);
        self
    }

    /// Only deliver payloads for which `predicate` returns `true`.
    #[must_use]
    pub fn predicate(mut self, predicate: impl Fn(&P) -> bool + 'static) -> Self {
        self.predicate = Some(Rc::new(predicate));
        self
    }

    /// The configured priority.
    #[must_use]
    pub fn priority_value(&self) -> i32 {
        self.priority
    }

    /// The configured call budget, if any.
    #[must_use]
    pub fn calls_value(&self) -> Option<u32> {
        self.calls
    }
}

impl<P> Default for SubscribeOptions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for SubscribeOptions<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            priority: self.priority,
            calls: self.calls,
        }
    }
}

impl<P> fmt::Debug for SubscribeOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscribeOptions")
            .field("predicate", &self.predicate.is_some())
            .field("priority", &self.priority)
            .field("calls", &self.calls)
            .finish()
    }
}

/// A live subscription stored in a channel's delivery list.
pub(crate) struct Subscription<P> {
    pub(crate) id: SubscriptionId,
    pub(crate) callback: Callback<P>,
    pub(crate) predicate: Option<Predicate<P>>,
    pub(crate) priority: i32,
    pub(crate) remaining: Option<u32>,
}

impl<P> Subscription<P> {
    /// Calls the subscriber if the predicate admits `payload`.
    ///
    /// Returns `true` if the callback ran.
    pub(crate) fn deliver(&mut self, payload: &P) -> bool {
        if self.is_exhausted() {
            return false;
        }
        if let Some(predicate) = &self.predicate {
            if !predicate(payload) {
                return false;
            }
        }
        (self.callback)(payload);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        true
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}
