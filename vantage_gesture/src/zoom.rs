// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ctrl+wheel zoom-to-cursor controller.
//!
//! The content point under the cursor stays under the cursor while the
//! scale changes:
//!
//! 1) Read the current scale `s = sqrt(a² + c²)` and translation `(e, f)`.
//! 2) Express the cursor in content space *before* rescaling:
//!    `local = ((mouse_x - e) / s, (mouse_y - f) / s)`.
//! 3) `s' = clamp(s - step · delta_y, min_scale, max_scale)`.
//! 4) Rebuild the matrix as `translate(mouse) ∘ scale(s') ∘ translate(-local)`.
//!
//! A degenerate scale reads as `1.0` and a non-finite translation reads as
//! the origin, so a corrupted matrix is replaced rather than propagated.
//!
//! Rebuilding replaces the whole matrix; any rotation in the previous
//! transform is dropped. When the scale is pinned at a limit the cursor
//! point is still re-pinned, so further wheel input keeps the content under
//! the cursor stable instead of being rejected.

use kurbo::Point;
use vantage_channel::EventChannel;
use vantage_event_state::input::WheelInput;
use vantage_view2d::{AffineTransform, CanvasBounds, Viewport};

use crate::config::{ConfigError, PartialZoomConfig, ZoomConfig, resolve_config};
use crate::events::{ViewEvent, ZOOM_WHEEL, ZoomEvent};

/// Outcome of a zoom computation, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    /// The rebuilt transform.
    pub transform: AffineTransform,
    /// Scale read from the transform the step started from.
    pub previous_scale: f64,
    /// Scale of the rebuilt transform.
    pub scale: f64,
    /// Cursor position in canvas-local coordinates.
    pub anchor: Point,
    /// Content-space point kept under the cursor.
    pub local: Point,
}

/// Zooms a viewport around the cursor on ctrl+wheel.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomController {
    config: ZoomConfig,
}

impl ZoomController {
    /// Creates a controller from an already validated configuration.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self { config }
    }

    /// Creates a controller with explicit limits and step.
    pub fn with_limits(min_scale: f64, max_scale: f64, step: f64) -> Result<Self, ConfigError> {
        ZoomConfig::new(min_scale, max_scale, step).map(Self::new)
    }

    /// Creates a controller from a partial configuration, defaulting missing fields.
    pub fn from_partial(partial: PartialZoomConfig) -> Result<Self, ConfigError> {
        resolve_config(partial).map(Self::new)
    }

    /// The controller's configuration.
    #[must_use]
    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    /// Returns `true` if `wheel` asks for a zoom.
    ///
    /// Only ctrl+wheel with a finite, non-zero vertical delta zooms. Anything
    /// else is ordinary scrolling and should be left to the host.
    #[must_use]
    pub fn accepts(wheel: &WheelInput) -> bool {
        wheel.ctrl_key && wheel.delta_y != 0.0 && wheel.delta_y.is_finite()
    }

    /// Computes the zoom step for a wheel `delta_y` at canvas-local `anchor`.
    ///
    /// This is pure; [`ZoomController::on_wheel`] applies and announces it.
    #[must_use]
    pub fn zoom_about(&self, current: AffineTransform, anchor: Point, delta_y: f64) -> ZoomStep {
        let mut scale = current.scale_factor();
        if !(scale.is_finite() && scale > 0.0) {
            scale = 1.0;
        }
        let origin = if current.e().is_finite() && current.f().is_finite() {
            Point::new(current.e(), current.f())
        } else {
            tracing::trace!("non-finite translation read as origin");
            Point::ORIGIN
        };

        let local = Point::new(
            (anchor.x - origin.x) / scale,
            (anchor.y - origin.y) / scale,
        );
        let new_scale = self.config.clamp_scale(scale - self.config.step() * delta_y);

        let transform = AffineTransform::translate(anchor.x, anchor.y)
            .compose(AffineTransform::scale(new_scale))
            .compose(AffineTransform::translate(-local.x, -local.y));

        ZoomStep {
            transform,
            previous_scale: scale,
            scale: new_scale,
            anchor,
            local,
        }
    }

    /// Handles a wheel event over the canvas.
    ///
    /// Returns `false` without touching the viewport when the event is not a
    /// zoom request (see [`ZoomController::accepts`]). Otherwise the new
    /// transform is applied, [`ZOOM_WHEEL`] is published, and `true` is
    /// returned.
    pub fn on_wheel(
        &self,
        wheel: &WheelInput,
        bounds: &CanvasBounds,
        viewport: &mut impl Viewport,
        channel: &mut EventChannel<ViewEvent>,
    ) -> bool {
        if !Self::accepts(wheel) {
            return false;
        }

        let anchor = bounds.to_local(wheel.page_point());
        let step = self.zoom_about(viewport.transform(), anchor, wheel.delta_y);
        viewport.set_transform(step.transform);

        tracing::debug!(
            previous_scale = step.previous_scale,
            scale = step.scale,
            x = anchor.x,
            y = anchor.y,
            "zoom"
        );
        let event = ZoomEvent {
            previous_scale: step.previous_scale,
            scale: step.scale,
            x: anchor.x,
            y: anchor.y,
            local_x: step.local.x,
            local_y: step.local.y,
        };
        channel.publish(ZOOM_WHEEL, &ViewEvent::Zoom(event));
        true
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use vantage_channel::EventChannel;
    use vantage_event_state::input::WheelInput;
    use vantage_view2d::{AffineTransform, CanvasBounds, TransformViewport, Viewport};

    use super::ZoomController;
    use crate::config::{ConfigError, ZoomConfig};

    const EPS: f64 = 1e-9;

    #[test]
    fn large_delta_clamps_to_limits() {
        let zoom = ZoomController::default();
        let anchor = Point::new(0.0, 0.0);

        let out = zoom.zoom_about(AffineTransform::IDENTITY, anchor, 100_000.0);
        assert_eq!(out.scale, 0.5);

        let inn = zoom.zoom_about(AffineTransform::IDENTITY, anchor, -100_000.0);
        assert_eq!(inn.scale, 2.0);
    }

    #[test]
    fn scale_stays_within_limits_for_any_delta() {
        let zoom = ZoomController::default();
        let mut t = AffineTransform::IDENTITY;
        for delta in [-50.0, 900.0, -3000.0, 1.0, 0.25, -0.25, 4e6, -4e6] {
            t = zoom.zoom_about(t, Point::new(33.0, 12.0), delta).transform;
            let s = t.scale_factor();
            assert!((0.5 - EPS..=2.0 + EPS).contains(&s), "scale {s} out of range");
        }
    }

    #[test]
    fn cursor_point_is_fixed() {
        let zoom = ZoomController::default();
        let anchor = Point::new(50.0, 50.0);

        // Wheel up by 100 units: 1.0 -> 1.1.
        let step = zoom.zoom_about(AffineTransform::IDENTITY, anchor, -100.0);
        assert!((step.scale - 1.1).abs() < EPS);
        assert_eq!(step.local, Point::new(50.0, 50.0));

        let t = step.transform;
        assert!(((anchor.x - t.e()) / step.scale - step.local.x).abs() < EPS);
        assert!(((anchor.y - t.f()) / step.scale - step.local.y).abs() < EPS);

        let mapped = t.apply(step.local);
        assert!((mapped.x - anchor.x).abs() < EPS);
        assert!((mapped.y - anchor.y).abs() < EPS);
    }

    #[test]
    fn cursor_point_is_fixed_from_panned_and_scaled_start() {
        let zoom = ZoomController::default();
        let start = AffineTransform::translate(-40.0, 25.0).compose(AffineTransform::scale(1.5));
        let anchor = Point::new(120.0, 80.0);
        let content = start.invert_point(anchor).unwrap();

        let step = zoom.zoom_about(start, anchor, 200.0);
        assert!((step.scale - 1.3).abs() < EPS);
        assert!((step.local.x - content.x).abs() < EPS);
        assert!((step.local.y - content.y).abs() < EPS);

        let mapped = step.transform.apply(content);
        assert!((mapped.x - anchor.x).abs() < EPS);
        assert!((mapped.y - anchor.y).abs() < EPS);
    }

    #[test]
    fn saturated_zoom_still_repins_cursor() {
        let zoom = ZoomController::default();
        let at_max = AffineTransform::scale(2.0);

        let anchor = Point::new(30.0, 10.0);
        let content = at_max.invert_point(anchor).unwrap();
        let step = zoom.zoom_about(at_max, anchor, -500.0);

        assert_eq!(step.scale, 2.0);
        let mapped = step.transform.apply(content);
        assert!((mapped.x - anchor.x).abs() < EPS);
        assert!((mapped.y - anchor.y).abs() < EPS);
    }

    #[test]
    fn degenerate_scale_is_treated_as_one() {
        let zoom = ZoomController::default();
        let step = zoom.zoom_about(AffineTransform::scale(0.0), Point::new(4.0, 4.0), -10.0);
        assert_eq!(step.previous_scale, 1.0);
        assert!(step.scale.is_finite());
    }

    #[test]
    fn non_finite_translation_falls_back_to_origin() {
        let zoom = ZoomController::default();
        let anchor = Point::new(10.0, 10.0);

        for corrupt in [
            AffineTransform::from_coeffs(1.0, 0.0, 0.0, 1.0, f64::NAN, 0.0),
            AffineTransform::from_coeffs(1.0, 0.0, 0.0, 1.0, 0.0, f64::INFINITY),
        ] {
            let step = zoom.zoom_about(corrupt, anchor, -100.0);
            assert_eq!(step.local, anchor);
            assert!(step.transform.coeffs().iter().all(|c| c.is_finite()));

            let mapped = step.transform.apply(step.local);
            assert!((mapped.x - anchor.x).abs() < EPS);
            assert!((mapped.y - anchor.y).abs() < EPS);
        }
    }

    #[test]
    fn non_finite_canvas_offset_leaves_viewport_finite() {
        let zoom = ZoomController::default();
        let mut vp = TransformViewport::new();
        let mut channel = EventChannel::new();
        let bounds = CanvasBounds::new(f64::NAN, 0.0);

        assert!(zoom.on_wheel(
            &WheelInput::ctrl(-100.0, 10.0, 10.0),
            &bounds,
            &mut vp,
            &mut channel
        ));

        let t = vp.transform();
        assert!(t.coeffs().iter().all(|c| c.is_finite()));
        assert!((t.scale_factor() - 1.1).abs() < EPS);
        let mapped = t.apply(Point::new(10.0, 10.0));
        assert!((mapped.x - 10.0).abs() < EPS);
        assert!((mapped.y - 10.0).abs() < EPS);
    }

    #[test]
    fn wheel_without_ctrl_or_delta_is_ignored() {
        let zoom = ZoomController::default();
        let mut vp = TransformViewport::new();
        let mut channel = EventChannel::new();
        let bounds = CanvasBounds::default();

        let plain = WheelInput {
            delta_y: -120.0,
            ctrl_key: false,
            page_x: 5.0,
            page_y: 5.0,
        };
        assert!(!zoom.on_wheel(&plain, &bounds, &mut vp, &mut channel));
        assert!(!zoom.on_wheel(&WheelInput::ctrl(0.0, 5.0, 5.0), &bounds, &mut vp, &mut channel));
        assert!(!zoom.on_wheel(
            &WheelInput::ctrl(f64::NAN, 5.0, 5.0),
            &bounds,
            &mut vp,
            &mut channel
        ));
        assert_eq!(vp.revision(), 0);
    }

    #[test]
    fn canvas_offset_shifts_the_anchor() {
        let zoom = ZoomController::default();
        let mut vp = TransformViewport::new();
        let mut channel = EventChannel::new();
        let bounds = CanvasBounds::new(100.0, 200.0);

        assert!(zoom.on_wheel(
            &WheelInput::ctrl(-1000.0, 110.0, 210.0),
            &bounds,
            &mut vp,
            &mut channel
        ));

        let t = vp.transform();
        assert_eq!(t.scale_factor(), 2.0);
        let mapped = t.apply(Point::new(10.0, 10.0));
        assert!((mapped.x - 10.0).abs() < EPS);
        assert!((mapped.y - 10.0).abs() < EPS);
    }

    #[test]
    fn construction_validates_limits() {
        assert!(matches!(
            ZoomController::with_limits(2.0, 1.0, 0.001),
            Err(ConfigError::InvalidScaleRange { .. })
        ));
        assert!(matches!(
            ZoomController::with_limits(0.5, 2.0, 0.0),
            Err(ConfigError::NonPositiveStep(_))
        ));
        let zoom = ZoomController::with_limits(0.1, 10.0, 0.01).unwrap();
        assert_eq!(zoom.config(), ZoomConfig::new(0.1, 10.0, 0.01).unwrap());
    }
}
