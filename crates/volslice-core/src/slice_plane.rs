//! Planes used to cut the volume bounding box.

use glam::Vec3;

/// An infinite plane given by a point on it and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlane {
    /// A point on the plane.
    origin: Vec3,
    /// Unit normal of the plane.
    normal: Vec3,
}

impl SlicePlane {
    /// Creates a plane through `origin`. The normal is normalized.
    #[must_use]
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Creates a plane whose normal is already unit length.
    ///
    /// Skips renormalization so that exact basis vectors stay bit-identical.
    #[must_use]
    pub fn from_unit_normal(origin: Vec3, normal: Vec3) -> Self {
        debug_assert!(normal.is_normalized(), "normal must be unit length");
        Self { origin, normal }
    }

    /// Returns the point the plane was built through.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are on the side the normal points to.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        (point - self.origin).dot(self.normal)
    }

    /// Projects a point onto the plane.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.signed_distance(point) * self.normal
    }

    /// Intersects the segment `a -> b` with the plane.
    ///
    /// Returns the parameter `t` with `a + (b - a) * t` on the plane, or
    /// `None` when the segment is parallel to the plane (including segments
    /// lying in it) or the crossing falls outside `[0, 1]`.
    #[must_use]
    pub fn edge_parameter(&self, a: Vec3, b: Vec3) -> Option<f32> {
        let d = b - a;
        let n_dot_d = self.normal.dot(d);
        if n_dot_d == 0.0 {
            return None;
        }
        let t = -self.normal.dot(a - self.origin) / n_dot_d;
        (0.0..=1.0).contains(&t).then_some(t)
    }
}

impl Default for SlicePlane {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            normal: Vec3::Z,
        }
    }
}
