// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan controller.
//!
//! [`PanController`] turns a drag lifecycle into translation-only updates of
//! a [`Viewport`]'s transform and announces each step on the view event
//! channel ([`PAN_START`], [`PAN_DRAG`], [`PAN_END`]).
//!
//! ## Minimal example
//!
//! ```
//! use vantage_channel::EventChannel;
//! use vantage_event_state::input::{DragMove, PointerButton};
//! use vantage_gesture::{PanController, ViewEvent};
//! use vantage_view2d::{AffineTransform, TransformViewport, Viewport};
//!
//! let mut viewport = TransformViewport::with_transform(AffineTransform::translate(10.0, 10.0));
//! let mut channel = EventChannel::<ViewEvent>::new();
//! let mut pan = PanController::new();
//!
//! assert!(pan.start(Some(PointerButton::Primary), &mut viewport, &mut channel));
//! pan.drag(DragMove::new(5.0, -3.0), &mut viewport, &mut channel);
//! pan.end(&mut channel);
//!
//! assert_eq!(viewport.transform(), AffineTransform::translate(15.0, 7.0));
//! ```

use vantage_channel::EventChannel;
use vantage_event_state::drag::GestureState;
use vantage_event_state::input::{DragMove, PointerButton};
use vantage_view2d::Viewport;

use crate::events::{PAN_DRAG, PAN_END, PAN_START, PanEvent, ViewEvent};

/// Pans a viewport with primary-button drags.
///
/// The controller owns its [`GestureState`] and nothing else; the viewport
/// and the event channel are borrowed per call, so one controller can be
/// reused across viewports without aliasing either.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanController {
    state: GestureState,
}

impl PanController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Starts a pan from the viewport's current transform.
    ///
    /// Only the primary button starts a pan; a missing button is treated as
    /// primary. A start while a pan is already active is ignored. Returns
    /// `true` if a gesture started.
    pub fn start(
        &mut self,
        button: Option<PointerButton>,
        viewport: &mut impl Viewport,
        channel: &mut EventChannel<ViewEvent>,
    ) -> bool {
        if button.is_some_and(|b| !b.is_primary()) {
            tracing::trace!(button = ?button, "pan ignored for non-primary button");
            return false;
        }
        if self.state.is_active() {
            return false;
        }

        self.state = self.state.begin(viewport.transform());
        let event = self.snapshot();
        tracing::debug!(start_x = event.start_x, start_y = event.start_y, "pan start");
        channel.publish(PAN_START, &ViewEvent::PanStart(event));
        true
    }

    /// Moves the viewport to the drag origin plus the cumulative offset in `movement`.
    ///
    /// Ignored while idle. Missing or non-finite offsets count as zero.
    /// Returns `true` if the viewport was updated.
    pub fn drag(
        &mut self,
        movement: DragMove,
        viewport: &mut impl Viewport,
        channel: &mut EventChannel<ViewEvent>,
    ) -> bool {
        if !self.state.is_active() {
            return false;
        }

        self.state = self.state.moved(movement.delta());
        viewport.set_transform(self.state.transform());

        let event = self.snapshot();
        tracing::trace!(x = event.x, y = event.y, "pan drag");
        channel.publish(PAN_DRAG, &ViewEvent::PanDrag(event));
        true
    }

    /// Ends the pan in progress.
    ///
    /// Also used when the pointer leaves the canvas. Ending while idle does
    /// nothing and publishes nothing. Returns `true` if a gesture ended.
    pub fn end(&mut self, channel: &mut EventChannel<ViewEvent>) -> bool {
        if !self.state.is_active() {
            return false;
        }

        self.state = self.state.finished();
        let event = self.snapshot();
        tracing::debug!(x = event.x, y = event.y, "pan end");
        channel.publish(PAN_END, &ViewEvent::PanEnd(event));
        true
    }

    fn snapshot(&self) -> PanEvent {
        let offset = self.state.offset();
        PanEvent {
            delta_x: offset.x,
            delta_y: offset.y,
            start_x: self.state.start_x,
            start_y: self.state.start_y,
            x: self.state.current_x,
            y: self.state.current_y,
        }
    }
}
