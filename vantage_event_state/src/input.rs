// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture input vocabulary: what a drawable surface reports to the controllers.
//!
//! A host translates its native pointer and wheel events into
//! [`GestureEvent`]s and hands them over through a [`GestureSource`]. The
//! vocabulary is deliberately small:
//!
//! - a drag lifecycle ([`GestureEvent::DragStart`], [`GestureEvent::DragMove`],
//!   [`GestureEvent::DragEnd`]) whose move deltas are cumulative since the
//!   drag started,
//! - [`GestureEvent::PointerLeave`] when the pointer exits the canvas,
//! - [`GestureEvent::Wheel`] for wheel input with the ctrl modifier state.
//!
//! Missing or non-finite coordinates are read as zero so a single malformed
//! host event never aborts a gesture in progress.
//!
//! ## Minimal example
//!
//! ```
//! use std::collections::VecDeque;
//! use vantage_event_state::input::{DragMove, GestureEvent, GestureSource, PointerButton};
//!
//! let mut source: VecDeque<GestureEvent> = VecDeque::new();
//! source.push_back(GestureEvent::DragStart { button: Some(PointerButton::Primary) });
//! source.push_back(GestureEvent::DragMove(DragMove::new(4.0, -2.0)));
//! source.push_back(GestureEvent::DragEnd);
//!
//! let mut seen = 0;
//! while let Some(_event) = source.next_gesture() {
//!     seen += 1;
//! }
//! assert_eq!(seen, 3);
//! ```

use alloc::collections::VecDeque;

use kurbo::{Point, Vec2};

/// Identity of the pressed pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left), index 0.
    Primary,
    /// Auxiliary button (usually middle / wheel), index 1.
    Auxiliary,
    /// Secondary button (usually right), index 2.
    Secondary,
    /// Any other button, by index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM-style `button` index to a button.
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }

    /// DOM-style `button` index of this button.
    #[must_use]
    pub fn index(self) -> u16 {
        match self {
            Self::Primary => 0,
            Self::Auxiliary => 1,
            Self::Secondary => 2,
            Self::Other(n) => n,
        }
    }

    /// Returns `true` for the primary button.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self.index() == 0
    }
}

/// Pointer movement during a drag.
///
/// Deltas are cumulative since the drag started, not since the previous move.
/// Either component may be absent when the host could not measure it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragMove {
    /// Horizontal distance from the drag origin.
    pub dx: Option<f64>,
    /// Vertical distance from the drag origin.
    pub dy: Option<f64>,
}

impl DragMove {
    /// A move with both components present.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self {
            dx: Some(dx),
            dy: Some(dy),
        }
    }

    /// Cumulative offset, with missing or non-finite components read as zero.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        Vec2::new(finite_or_zero(self.dx), finite_or_zero(self.dy))
    }
}

/// A wheel event over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Vertical wheel delta; negative when the wheel rolls away from the user.
    pub delta_y: f64,
    /// Whether the ctrl modifier was held.
    pub ctrl_key: bool,
    /// Pointer position in page coordinates.
    pub page_x: f64,
    /// Pointer position in page coordinates.
    pub page_y: f64,
}

impl WheelInput {
    /// A wheel event with ctrl held, the combination that requests zoom.
    #[must_use]
    pub fn ctrl(delta_y: f64, page_x: f64, page_y: f64) -> Self {
        Self {
            delta_y,
            ctrl_key: true,
            page_x,
            page_y,
        }
    }

    /// Pointer position in page coordinates, non-finite components read as zero.
    #[must_use]
    pub fn page_point(&self) -> Point {
        Point::new(
            finite_or_zero(Some(self.page_x)),
            finite_or_zero(Some(self.page_y)),
        )
    }
}

/// One low-level event from a drawable surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A drag began; `button` is `None` when the host has no button info.
    DragStart {
        /// The pressed button, if known.
        button: Option<PointerButton>,
    },
    /// The pointer moved during a drag.
    DragMove(DragMove),
    /// The drag ended normally.
    DragEnd,
    /// The pointer left the canvas.
    PointerLeave,
    /// The wheel turned over the canvas.
    Wheel(WheelInput),
}

/// A surface that emits gesture events in the order they happened.
pub trait GestureSource {
    /// Returns the next pending event, or `None` when drained.
    fn next_gesture(&mut self) -> Option<GestureEvent>;
}

impl GestureSource for VecDeque<GestureEvent> {
    fn next_gesture(&mut self) -> Option<GestureEvent> {
        self.pop_front()
    }
}

impl<S: GestureSource + ?Sized> GestureSource for &mut S {
    fn next_gesture(&mut self) -> Option<GestureEvent> {
        (**self).next_gesture()
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    match v {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
