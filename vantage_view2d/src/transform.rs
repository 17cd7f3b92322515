// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// 2D affine matrix applied to a viewport group.
///
/// Coefficients follow the SVG `matrix(a b c d e f)` convention:
///
/// ```text
/// x' = a·x + c·y + e
/// y' = b·x + d·y + f
/// ```
///
/// `a`, `b`, `c`, `d` form the linear part and `e`, `f` the translation.
/// Transforms are plain values: controllers derive a new one and hand it to
/// [`crate::Viewport::set_transform`] rather than mutating a shared matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform(Affine);

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Creates a transform from its six coefficients.
    #[must_use]
    pub const fn from_coeffs(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self(Affine::new([a, b, c, d, e, f]))
    }

    /// A pure translation by `(x, y)`.
    #[must_use]
    pub fn translate(x: f64, y: f64) -> Self {
        Self(Affine::translate(Vec2::new(x, y)))
    }

    /// A uniform scale about the origin.
    #[must_use]
    pub fn scale(factor: f64) -> Self {
        Self(Affine::scale(factor))
    }

    /// Returns the composition `self ∘ other`: `other` is applied first.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Maps a point from content space into canvas space.
    #[must_use]
    pub fn apply(self, pt: Point) -> Point {
        self.0 * pt
    }

    /// Maps a canvas‑space point back into content space.
    ///
    /// Returns `None` when the matrix is singular or not finite.
    #[must_use]
    pub fn invert_point(self, pt: Point) -> Option<Point> {
        let det = self.0.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(self.0.inverse() * pt)
    }

    /// Returns a copy with the translation replaced and the linear part kept.
    #[must_use]
    pub fn with_translation(self, e: f64, f: f64) -> Self {
        let [a, b, c, d, _, _] = self.0.as_coeffs();
        Self::from_coeffs(a, b, c, d, e, f)
    }

    /// Uniform scale factor, `sqrt(a² + c²)`.
    #[must_use]
    pub fn scale_factor(self) -> f64 {
        Vec2::new(self.a(), self.c()).hypot()
    }

    /// Translation component `(e, f)`.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        self.0.translation()
    }

    /// The six coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn coeffs(self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Coefficient `a`.
    #[must_use]
    pub fn a(self) -> f64 {
        self.0.as_coeffs()[0]
    }

    /// Coefficient `b`.
    #[must_use]
    pub fn b(self) -> f64 {
        self.0.as_coeffs()[1]
    }

    /// Coefficient `c`.
    #[must_use]
    pub fn c(self) -> f64 {
        self.0.as_coeffs()[2]
    }

    /// Coefficient `d`.
    #[must_use]
    pub fn d(self) -> f64 {
        self.0.as_coeffs()[3]
    }

    /// Coefficient `e` (horizontal translation).
    #[must_use]
    pub fn e(self) -> f64 {
        self.0.as_coeffs()[4]
    }

    /// Coefficient `f` (vertical translation).
    #[must_use]
    pub fn f(self) -> f64 {
        self.0.as_coeffs()[5]
    }

    /// Returns `true` if every coefficient differs by at most `eps`.
    #[must_use]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs().iter())
            .all(|(l, r)| (l - r).abs() <= eps)
    }

    /// The underlying Kurbo matrix.
    #[must_use]
    pub fn as_affine(self) -> Affine {
        self.0
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for AffineTransform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<AffineTransform> for Affine {
    fn from(transform: AffineTransform) -> Self {
        transform.0
    }
}
