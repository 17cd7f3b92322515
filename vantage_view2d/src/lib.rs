// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_view2d --heading-base-level=0

//! Vantage View 2D: affine view transforms and viewport contracts.
//!
//! This crate provides the value types shared by the Vantage gesture
//! controllers:
//! - [`AffineTransform`]: an immutable 2D affine matrix in SVG coefficient
//!   order (`a b c d e f`).
//! - [`Viewport`]: the get/set transform contract a rendering surface
//!   implements for its viewport group.
//! - [`TransformViewport`]: a headless, in-memory viewport.
//! - [`CanvasBounds`]: the canvas' on-screen offset, used to map page
//!   coordinates into canvas-local ones.
//!
//! It does **not** draw anything. Callers are expected to:
//! - Implement [`Viewport`] for their scene's viewport group (or render from
//!   a [`TransformViewport`]).
//! - Feed pointer and wheel input into the controllers from
//!   `vantage_gesture`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_view2d::{AffineTransform, TransformViewport, Viewport};
//!
//! let mut view = TransformViewport::new();
//! view.set_transform(AffineTransform::translate(40.0, 10.0).compose(AffineTransform::scale(2.0)));
//!
//! // Content point (5, 5) is drawn at (50, 20) on the canvas.
//! assert_eq!(view.world_to_view_point(Point::new(5.0, 5.0)), Point::new(50.0, 20.0));
//!
//! // And back again, e.g. for a coordinate readout.
//! let content = view.view_to_world_point(Point::new(50.0, 20.0));
//! assert!((content.x - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are values. Controllers derive a new transform and hand it
//!   to [`Viewport::set_transform`]; nothing holds a mutable alias to a
//!   viewport's matrix.
//! - Scale is read as `sqrt(a² + c²)`, which is the uniform zoom factor for
//!   the scale+translate matrices produced by the controllers.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod viewport;

pub use transform::AffineTransform;
pub use viewport::{CanvasBounds, TransformViewport, TransformViewportDebugInfo, Viewport};
