//! Angular ordering of planar polygon vertices.
//!
//! Plane/box intersection points come out in box-edge order. Drawing them as
//! a triangle fan needs them in order around the polygon, which for a convex
//! cross-section is the angular order around its centroid.

use glam::Vec3;
use volslice_core::ViewBasis;

/// Orders points of a view-aligned polygon counter-clockwise as seen by the
/// viewer.
///
/// Holds the camera basis by value, so the sort needs no access to the
/// slicer that produced the points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexSorter {
    up: Vec3,
    right: Vec3,
    /// Slice plane normal, pointing back toward the viewer.
    normal: Vec3,
}

impl VertexSorter {
    /// Creates a sorter for polygons lying in planes with the given normal.
    ///
    /// `right x up` must equal `normal` for a counter-clockwise result.
    #[must_use]
    pub fn new(up: Vec3, right: Vec3, normal: Vec3) -> Self {
        Self { up, right, normal }
    }

    /// Creates a sorter for view-aligned planes of the given viewer.
    #[must_use]
    pub fn from_view(view: &impl ViewBasis) -> Self {
        Self::new(view.up(), view.right(), -view.forward())
    }

    /// The plane normal used for ordering.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Monotonic angle surrogate of an in-plane direction.
    ///
    /// The first half turn maps to `[-1, 1]` and the second to `[1, 3]`, so
    /// values increase counter-clockwise starting just past `right`.
    #[must_use]
    pub fn sort_value(&self, direction: Vec3) -> f32 {
        let v = direction.normalize_or_zero();
        let val = self.up.cross(v).dot(self.normal);
        if v.cross(self.right).dot(self.normal) >= 0.0 {
            2.0 - val
        } else {
            val
        }
    }

    /// Reorders `indices` (into `vertices`) around the centroid of the
    /// points they reference.
    ///
    /// Points with equal sort values keep their relative order.
    pub fn sort(&self, vertices: &[Vec3], indices: &mut [u16]) {
        if indices.len() < 2 {
            return;
        }

        let centroid = indices
            .iter()
            .map(|&i| vertices[usize::from(i)])
            .sum::<Vec3>()
            / indices.len() as f32;

        let mut keyed: Vec<(f32, u16)> = indices
            .iter()
            .map(|&i| (self.sort_value(vertices[usize::from(i)] - centroid), i))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (slot, (_, index)) in indices.iter_mut().zip(keyed) {
            *slot = index;
        }
    }
}
