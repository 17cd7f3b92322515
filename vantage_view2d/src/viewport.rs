// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::transform::AffineTransform;

/// A transformable viewport group inside a fixed-size canvas.
///
/// This is the only contract the gesture controllers need from a rendering
/// surface: read the current transform at gesture start, write a new one on
/// every step.
pub trait Viewport {
    /// Returns the transform currently applied to the viewport.
    fn transform(&self) -> AffineTransform;

    /// Replaces the transform applied to the viewport.
    fn set_transform(&mut self, transform: AffineTransform);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn transform(&self) -> AffineTransform {
        (**self).transform()
    }

    fn set_transform(&mut self, transform: AffineTransform) {
        (**self).set_transform(transform);
    }
}

/// In-memory viewport holding an affine transform.
///
/// `TransformViewport` is a headless stand-in for the SVG viewport group. It
/// can be used directly by hosts that render from the transform themselves,
/// and it converts points between canvas space and content space.
#[derive(Clone, Debug, Default)]
pub struct TransformViewport {
    transform: AffineTransform,
    revision: u64,
}

impl TransformViewport {
    /// Creates a viewport at the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a viewport starting from `transform`.
    #[must_use]
    pub fn with_transform(transform: AffineTransform) -> Self {
        Self {
            transform,
            revision: 0,
        }
    }

    /// Number of effective transform changes since construction.
    ///
    /// Setting a transform equal to the current one does not bump the revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale_factor()
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.translation()
    }

    /// Converts a content-space point into canvas coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.transform.apply(pt)
    }

    /// Converts a canvas-space point into content coordinates.
    ///
    /// A singular transform has no inverse; the point is returned unchanged.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.transform.invert_point(pt).unwrap_or(pt)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformViewportDebugInfo {
        TransformViewportDebugInfo {
            transform: self.transform,
            scale: self.scale(),
            translation: self.translation(),
            revision: self.revision,
        }
    }
}

impl Viewport for TransformViewport {
    fn transform(&self) -> AffineTransform {
        self.transform
    }

    fn set_transform(&mut self, transform: AffineTransform) {
        if self.transform == transform {
            return;
        }
        self.transform = transform;
        self.revision += 1;
    }
}

/// Debug snapshot of a [`TransformViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct TransformViewportDebugInfo {
    /// Current transform.
    pub transform: AffineTransform,
    /// Uniform scale factor derived from the transform.
    pub scale: f64,
    /// Translation component of the transform.
    pub translation: Vec2,
    /// Number of effective transform changes.
    pub revision: u64,
}

/// On-screen placement of the canvas element.
///
/// Wheel events report page coordinates; subtracting the canvas offset yields
/// coordinates local to the canvas' top-left corner. A canvas that has not
/// been measured yet has no offset and is treated as sitting at `(0, 0)`.
/// A non-finite offset counts as unmeasured.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasBounds {
    offset: Option<Point>,
}

impl CanvasBounds {
    /// Bounds for a canvas whose top-left corner sits at `(left, top)`.
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            offset: Some(Point::new(left, top)),
        }
    }

    /// Bounds for a canvas with no measured size.
    #[must_use]
    pub fn unmeasured() -> Self {
        Self { offset: None }
    }

    /// Updates the measured offset.
    pub fn set_offset(&mut self, offset: Option<Point>) {
        self.offset = offset;
    }

    /// The measured offset, if any.
    #[must_use]
    pub fn offset(&self) -> Option<Point> {
        self.offset
    }

    /// Maps a page-space point into canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, page: Point) -> Point {
        let offset = self
            .offset
            .filter(|o| o.is_finite())
            .unwrap_or(Point::ORIGIN);
        (page - offset).to_point()
    }
}
