// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_channel --heading-base-level=0

//! Vantage Channel: a synchronous, in-process publish/subscribe mediator.
//!
//! ## Overview
//!
//! [`EventChannel`] broadcasts payloads on named channels. Producers (for
//! example the pan controller in `vantage_gesture`) publish without knowing
//! who listens; consumers (a minimap, a coordinate readout) subscribe by
//! channel name.
//!
//! ## Delivery
//!
//! - [`EventChannel::publish`] calls every live subscription on the channel
//!   before it returns. Nothing is queued or deferred.
//! - Subscriptions are called in descending [`SubscribeOptions::priority`];
//!   equal priorities keep subscription order.
//! - A [`SubscribeOptions::predicate`] is evaluated against each payload; a
//!   subscription whose predicate rejects the payload is skipped.
//! - A [`SubscribeOptions::calls`] budget counts successful deliveries. The
//!   subscription removes itself once the budget is spent.
//! - Delivery is not re-entrant. The registry stays mutably borrowed until
//!   `publish` returns, so callbacks cannot publish, subscribe or remove on
//!   the same channel. A channel shared through `Rc<RefCell<_>>` cannot be
//!   borrowed from inside one of its callbacks; queue follow-up work and
//!   apply it once `publish` returns.
//!
//! ## Removal
//!
//! - [`EventChannel::remove`] drops every subscription on a channel that
//!   shares a [`Callback`] (matched by `Rc` identity).
//! - [`EventChannel::unsubscribe`] drops a single subscription by handle.
//!
//! Both are no-ops when nothing matches.
//!
//! ## Ownership
//!
//! There is no global registry. Construct an [`EventChannel`] where the
//! application is wired together and pass it to collaborators explicitly.
//! Callbacks are `Rc` based and the registry takes `&mut self` for every
//! mutation, so an `EventChannel` stays on the thread that owns it.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use vantage_channel::{EventChannel, SubscribeOptions};
//!
//! let mut channel = EventChannel::<&'static str>::new();
//! let hits = Rc::new(Cell::new(0));
//!
//! let counter = hits.clone();
//! channel.subscribe_fn(
//!     "pan:end",
//!     move |_| counter.set(counter.get() + 1),
//!     SubscribeOptions::new().calls(2),
//! );
//!
//! for _ in 0..3 {
//!     channel.publish("pan:end", &"done");
//! }
//! assert_eq!(hits.get(), 2);
//! assert!(!channel.has_subscribers("pan:end"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod channel;
mod subscription;

pub use channel::EventChannel;
pub use subscription::{Callback, Predicate, SubscribeOptions, SubscriptionId};
