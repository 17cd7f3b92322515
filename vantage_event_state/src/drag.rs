// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture state: translate a viewport by the cumulative drag offset.
//!
//! ## Usage
//!
//! 1) Begin a gesture with [`GestureState::begin`], passing the viewport's current transform.
//! 2) On each move, call [`GestureState::moved`] with the offset since the gesture began.
//! 3) Read [`GestureState::transform`] and apply it to the viewport.
//! 4) Finish with [`GestureState::finished`] to return to the idle state.
//!
//! Every transition takes the state by value and returns the next one, so a
//! controller can keep the state in a plain field and nothing else observes
//! intermediate values.
//!
//! Offsets are always measured from the gesture's origin, never from the
//! previous move, so the result does not depend on how many moves the host
//! reports along the way.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use vantage_event_state::drag::GestureState;
//! use vantage_view2d::AffineTransform;
//!
//! let base = AffineTransform::translate(10.0, 20.0);
//! let state = GestureState::idle().begin(base);
//! assert!(state.is_active());
//!
//! let state = state.moved(Vec2::new(5.0, -5.0));
//! assert_eq!(state.current(), Vec2::new(15.0, 15.0));
//! assert_eq!(state.transform(), AffineTransform::translate(15.0, 15.0));
//!
//! let state = state.finished();
//! assert!(!state.is_active());
//! ```

use kurbo::Vec2;
use vantage_view2d::AffineTransform;

/// Tracks one pan gesture over a viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureState {
    /// Whether a gesture is in progress.
    pub active: bool,
    /// Horizontal translation of the viewport when the gesture began.
    pub start_x: f64,
    /// Vertical translation of the viewport when the gesture began.
    pub start_y: f64,
    /// Horizontal translation after the latest move.
    pub current_x: f64,
    /// Vertical translation after the latest move.
    pub current_y: f64,
    /// Viewport transform captured when the gesture began.
    pub base_transform: AffineTransform,
}

impl GestureState {
    /// The idle state: no gesture in progress.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Starts a gesture from `base`.
    ///
    /// A begin while a gesture is already active returns the state unchanged.
    #[must_use]
    pub fn begin(self, base: AffineTransform) -> Self {
        if self.active {
            return self;
        }
        let origin = base.translation();
        Self {
            active: true,
            start_x: origin.x,
            start_y: origin.y,
            current_x: origin.x,
            current_y: origin.y,
            base_transform: base,
        }
    }

    /// Applies the cumulative `offset` since the gesture began.
    ///
    /// Ignored while idle.
    #[must_use]
    pub fn moved(self, offset: Vec2) -> Self {
        if !self.active {
            return self;
        }
        Self {
            current_x: self.start_x + offset.x,
            current_y: self.start_y + offset.y,
            ..self
        }
    }

    /// Ends the gesture, keeping the last coordinates for inspection.
    #[must_use]
    pub fn finished(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Translation the gesture started from.
    #[must_use]
    pub fn start(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }

    /// Translation after the latest move.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        Vec2::new(self.current_x, self.current_y)
    }

    /// Offset between the current and starting translation.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.current() - self.start()
    }

    /// The base transform with its translation replaced by the current one.
    ///
    /// The linear part of the base transform is never touched.
    #[must_use]
    pub fn transform(&self) -> AffineTransform {
        self.base_transform
            .with_translation(self.current_x, self.current_y)
    }
}
