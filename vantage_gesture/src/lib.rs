// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_gesture --heading-base-level=0

//! Vantage Gesture: pan and zoom-to-cursor controllers for viewports.
//!
//! ## Overview
//!
//! This crate maps low-level pointer input onto a viewport's affine
//! transform and announces what happened on an [`EventChannel`]:
//!
//! - [`PanController`]: primary-button drags translate the viewport. The
//!   linear part of the transform is never touched, and offsets are always
//!   measured from the drag origin.
//! - [`ZoomController`]: ctrl+wheel rescales the viewport around the cursor,
//!   clamped to the limits in a [`ZoomConfig`].
//! - [`Interaction`]: owns a viewport, a channel and both controllers, and
//!   routes [`GestureEvent`]s from a [`GestureSource`] to them.
//!
//! ## Events
//!
//! | Channel        | Payload                       | When                          |
//! |----------------|-------------------------------|-------------------------------|
//! | [`PAN_START`]  | [`ViewEvent::PanStart`]       | a pan begins                  |
//! | [`PAN_DRAG`]   | [`ViewEvent::PanDrag`]        | every pan step                |
//! | [`PAN_END`]    | [`ViewEvent::PanEnd`]         | drag end or pointer leave     |
//! | [`ZOOM_WHEEL`] | [`ViewEvent::Zoom`]           | every handled ctrl+wheel      |
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use vantage_channel::SubscribeOptions;
//! use vantage_event_state::input::{DragMove, GestureEvent};
//! use vantage_gesture::{Interaction, PAN_DRAG, ViewEvent, ZoomConfig};
//! use vantage_view2d::TransformViewport;
//!
//! let mut ix = Interaction::new(TransformViewport::new(), ZoomConfig::default());
//!
//! // A coordinate readout listening to pan progress.
//! let readout = Rc::new(Cell::new((0.0, 0.0)));
//! let sink = readout.clone();
//! ix.channel_mut().subscribe_fn(
//!     PAN_DRAG,
//!     move |e: &ViewEvent| {
//!         if let Some(p) = e.as_pan() {
//!             sink.set((p.x, p.y));
//!         }
//!     },
//!     SubscribeOptions::new(),
//! );
//!
//! ix.handle(GestureEvent::DragStart { button: None });
//! ix.handle(GestureEvent::DragMove(DragMove::new(12.0, -4.0)));
//! ix.handle(GestureEvent::PointerLeave);
//!
//! assert_eq!(readout.get(), (12.0, -4.0));
//! assert!(!ix.pan().is_active());
//! ```
//!
//! ## Configuration
//!
//! [`ZoomConfig`] is validated on construction; [`resolve_config`] fills a
//! [`PartialZoomConfig`] from the defaults (`min_scale = 0.5`,
//! `max_scale = 2.0`, `step = 0.001`). With the `serde` feature both types
//! can be deserialized, and deserializing a [`ZoomConfig`] validates it.
//!
//! ## Logging
//!
//! Gesture boundaries are logged at `debug` and individual steps at `trace`
//! through `tracing`. No subscriber is installed.
//!
//! [`EventChannel`]: vantage_channel::EventChannel
//! [`GestureEvent`]: vantage_event_state::input::GestureEvent
//! [`GestureSource`]: vantage_event_state::input::GestureSource
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod events;
mod interaction;
mod pan;
mod zoom;

pub use config::{ConfigError, PartialZoomConfig, ZoomConfig, resolve_config};
pub use events::{PAN_DRAG, PAN_END, PAN_START, PanEvent, ViewEvent, ZOOM_WHEEL, ZoomEvent};
pub use interaction::Interaction;
pub use pan::PanController;
pub use zoom::{ZoomController, ZoomStep};
