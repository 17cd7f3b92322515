// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_event_state --heading-base-level=0

//! Vantage Event State: gesture input and pan state for viewports.
//!
//! This crate holds the two pieces of per-interaction state that sit between
//! a drawable surface and the Vantage controllers:
//!
//! - [`input`]: the events a surface reports (drag lifecycle, pointer leave,
//!   wheel) and the [`input::GestureSource`] trait that yields them.
//! - [`drag`]: [`drag::GestureState`], a small state machine turning
//!   cumulative drag offsets into a translated viewport transform.
//!
//! Neither module knows about rendering or about the event channel; they
//! accept plain values and return plain values. The controllers in
//! `vantage_gesture` own one [`drag::GestureState`] each and decide what to
//! publish.
//!
//! ## Pan state
//!
//! ```rust
//! use kurbo::Vec2;
//! use vantage_event_state::drag::GestureState;
//! use vantage_event_state::input::{DragMove, PointerButton};
//! use vantage_view2d::AffineTransform;
//!
//! // Only the primary button (or an unknown one) starts a pan.
//! assert!(PointerButton::from_index(0).is_primary());
//!
//! let mut state = GestureState::idle().begin(AffineTransform::IDENTITY);
//! for step in [DragMove::new(1.0, 1.0), DragMove::new(3.0, 2.0), DragMove::new(6.0, 4.0)] {
//!     state = state.moved(step.delta());
//! }
//! // Only the last cumulative offset matters.
//! assert_eq!(state.current(), Vec2::new(6.0, 4.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod drag;
pub mod input;
