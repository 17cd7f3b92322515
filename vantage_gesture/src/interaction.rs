// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition root: route gesture events to the pan and zoom controllers.

use vantage_channel::EventChannel;
use vantage_event_state::input::{GestureEvent, GestureSource};
use vantage_view2d::{CanvasBounds, Viewport};

use crate::config::ZoomConfig;
use crate::events::ViewEvent;
use crate::pan::PanController;
use crate::zoom::ZoomController;

/// Owns a viewport, its event channel, and one controller per gesture.
///
/// `Interaction` is where a host wires the pieces together. It makes sure
/// only one gesture drives the viewport at a time: wheel events are ignored
/// while a pan is in progress.
///
/// ```
/// use vantage_event_state::input::{DragMove, GestureEvent, PointerButton, WheelInput};
/// use vantage_gesture::{Interaction, ZoomConfig};
/// use vantage_view2d::{AffineTransform, TransformViewport, Viewport};
///
/// let mut ix = Interaction::new(TransformViewport::new(), ZoomConfig::default());
///
/// ix.handle(GestureEvent::DragStart { button: Some(PointerButton::Primary) });
/// ix.handle(GestureEvent::DragMove(DragMove::new(25.0, 0.0)));
/// ix.handle(GestureEvent::DragEnd);
/// assert_eq!(ix.viewport().transform(), AffineTransform::translate(25.0, 0.0));
///
/// assert!(ix.handle(GestureEvent::Wheel(WheelInput::ctrl(-500.0, 25.0, 0.0))));
/// assert!((ix.viewport().transform().scale_factor() - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Interaction<V> {
    viewport: V,
    channel: EventChannel<ViewEvent>,
    bounds: CanvasBounds,
    pan: PanController,
    zoom: ZoomController,
}

impl<V: Viewport> Interaction<V> {
    /// Wires a viewport with a fresh event channel and unmeasured canvas bounds.
    #[must_use]
    pub fn new(viewport: V, zoom: ZoomConfig) -> Self {
        Self::with_channel(viewport, zoom, EventChannel::new())
    }

    /// Wires a viewport with an existing event channel.
    #[must_use]
    pub fn with_channel(viewport: V, zoom: ZoomConfig, channel: EventChannel<ViewEvent>) -> Self {
        Self {
            viewport,
            channel,
            bounds: CanvasBounds::default(),
            pan: PanController::new(),
            zoom: ZoomController::new(zoom),
        }
    }

    /// Routes one event. Returns `true` if it changed gesture or viewport state.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::DragStart { button } => {
                self.pan
                    .start(button, &mut self.viewport, &mut self.channel)
            }
            GestureEvent::DragMove(movement) => {
                self.pan
                    .drag(movement, &mut self.viewport, &mut self.channel)
            }
            GestureEvent::DragEnd | GestureEvent::PointerLeave => self.pan.end(&mut self.channel),
            GestureEvent::Wheel(wheel) => {
                if self.pan.is_active() {
                    tracing::trace!("wheel ignored during pan");
                    return false;
                }
                self.zoom
                    .on_wheel(&wheel, &self.bounds, &mut self.viewport, &mut self.channel)
            }
        }
    }

    /// Routes every pending event from `source`, in order.
    ///
    /// Returns how many events were handled.
    pub fn drain(&mut self, source: &mut impl GestureSource) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_gesture() {
            if self.handle(event) {
                handled += 1;
            }
        }
        handled
    }

    /// The viewport being driven.
    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport, e.g. to reset it.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Consumes the interaction and returns the viewport.
    #[must_use]
    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// The event channel controllers publish on.
    #[must_use]
    pub fn channel(&self) -> &EventChannel<ViewEvent> {
        &self.channel
    }

    /// Mutable access to the event channel, for subscribing.
    pub fn channel_mut(&mut self) -> &mut EventChannel<ViewEvent> {
        &mut self.channel
    }

    /// Current canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Updates the canvas bounds, e.g. after a layout pass.
    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    /// The pan controller.
    #[must_use]
    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    /// The zoom controller.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }
}
