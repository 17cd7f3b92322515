// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Channel names and payloads published by the controllers.

/// Published when a pan gesture starts.
pub const PAN_START: &str = "pan:start";
/// Published on every pan step.
pub const PAN_DRAG: &str = "pan:drag";
/// Published when a pan gesture ends, including when the pointer leaves the canvas.
pub const PAN_END: &str = "pan:end";
/// Published for every handled ctrl+wheel zoom.
pub const ZOOM_WHEEL: &str = "zoom:wheel";

/// Pan progress, in the viewport's translation space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanEvent {
    /// Horizontal offset since the gesture started.
    pub delta_x: f64,
    /// Vertical offset since the gesture started.
    pub delta_y: f64,
    /// Horizontal translation when the gesture started.
    pub start_x: f64,
    /// Vertical translation when the gesture started.
    pub start_y: f64,
    /// Current horizontal translation.
    pub x: f64,
    /// Current vertical translation.
    pub y: f64,
}

/// Result of one zoom step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomEvent {
    /// Scale before the wheel event.
    pub previous_scale: f64,
    /// Scale after clamping.
    pub scale: f64,
    /// Cursor position relative to the canvas.
    pub x: f64,
    /// Cursor position relative to the canvas.
    pub y: f64,
    /// Content-space point pinned under the cursor.
    pub local_x: f64,
    /// Content-space point pinned under the cursor.
    pub local_y: f64,
}

/// Payload carried on the view event channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// See [`PAN_START`].
    PanStart(PanEvent),
    /// See [`PAN_DRAG`].
    PanDrag(PanEvent),
    /// See [`PAN_END`].
    PanEnd(PanEvent),
    /// See [`ZOOM_WHEEL`].
    Zoom(ZoomEvent),
}

impl ViewEvent {
    /// Channel name this payload is published on.
    #[must_use]
    pub fn channel(&self) -> &'static str {
        match self {
            Self::PanStart(_) => PAN_START,
            Self::PanDrag(_) => PAN_DRAG,
            Self::PanEnd(_) => PAN_END,
            Self::Zoom(_) => ZOOM_WHEEL,
        }
    }

    /// The pan payload, for any of the pan variants.
    #[must_use]
    pub fn as_pan(&self) -> Option<&PanEvent> {
        match self {
            Self::PanStart(e) | Self::PanDrag(e) | Self::PanEnd(e) => Some(e),
            Self::Zoom(_) => None,
        }
    }

    /// The zoom payload.
    #[must_use]
    pub fn as_zoom(&self) -> Option<&ZoomEvent> {
        match self {
            Self::Zoom(e) => Some(e),
            _ => None,
        }
    }
}
