//! Axis-aligned bounding box of a volume.
//!
//! The box is centered at the origin and never changes after construction.
//! Corners are numbered so that bit 0 of the index selects `+x`, bit 1 selects
//! `+y` and bit 2 selects `+z`; every edge joins two corners whose indices
//! differ in exactly one bit.

use glam::Vec3;

use crate::error::{Result, VolsliceError};

/// Number of corners of a box.
pub const BOX_CORNER_COUNT: usize = 8;

/// Number of edges of a box.
pub const BOX_EDGE_COUNT: usize = 12;

/// A box edge as a pair of corner indices (`first < second`).
pub type Edge = (u8, u8);

/// Corner positions and edges of an origin-centered axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    size: Vec3,
    vertices: [Vec3; BOX_CORNER_COUNT],
    edges: [Edge; BOX_EDGE_COUNT],
}

impl BoundingBox {
    /// Creates a box with the given width (x), height (y) and depth (z).
    ///
    /// Use [`BoundingBox::try_new`] when the dimensions come from user data.
    #[must_use]
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0 && depth > 0.0,
            "box dimensions must be positive"
        );
        let size = Vec3::new(width, height, depth);
        let half = size * 0.5;

        let vertices = std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            )
        });

        Self {
            size,
            vertices,
            edges: box_edges(),
        }
    }

    /// Creates a box, rejecting zero, negative or non-finite dimensions.
    pub fn try_new(width: f32, height: f32, depth: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height) && valid(depth)) {
            return Err(VolsliceError::InvalidDimensions(format!(
                "box {width} x {height} x {depth}"
            )));
        }
        Ok(Self::new(width, height, depth))
    }

    /// Creates a box from a size vector.
    pub fn from_size(size: Vec3) -> Result<Self> {
        Self::try_new(size.x, size.y, size.z)
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Extent along z.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.size.z
    }

    /// Extent along all three axes.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Center of the box. Always the origin.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// The corner with the smallest coordinates.
    #[must_use]
    pub fn minimum(&self) -> Vec3 {
        self.vertices[0]
    }

    /// The corner with the largest coordinates.
    #[must_use]
    pub fn maximum(&self) -> Vec3 {
        self.vertices[BOX_CORNER_COUNT - 1]
    }

    /// The eight corners in stable index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3; BOX_CORNER_COUNT] {
        &self.vertices
    }

    /// The twelve edges as corner index pairs.
    #[must_use]
    pub fn edges(&self) -> &[Edge; BOX_EDGE_COUNT] {
        &self.edges
    }

    /// Returns the end points of an edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge: Edge) -> (Vec3, Vec3) {
        (
            self.vertices[usize::from(edge.0)],
            self.vertices[usize::from(edge.1)],
        )
    }

    /// Returns whether a point lies inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        let min = self.minimum();
        let max = self.maximum();
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Pairs every corner with the neighbour obtained by flipping one axis bit.
fn box_edges() -> [Edge; BOX_EDGE_COUNT] {
    let mut edges = [(0, 0); BOX_EDGE_COUNT];
    let mut n = 0;
    for axis_bit in [1u8, 2, 4] {
        for corner in 0..BOX_CORNER_COUNT as u8 {
            if corner & axis_bit == 0 {
                edges[n] = (corner, corner | axis_bit);
                n += 1;
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts() {
        let bounds = BoundingBox::new(2.0, 3.0, 4.0);
        assert_eq!(bounds.vertices().len(), 8);
        assert_eq!(bounds.edges().len(), 12);
    }

    #[test]
    fn test_vertex_magnitudes() {
        let bounds = BoundingBox::new(2.0, 3.0, 4.0);
        for v in bounds.vertices() {
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.5);
            assert_eq!(v.z.abs(), 2.0);
        }
    }

    #[test]
    fn test_vertices_unique() {
        let bounds = BoundingBox::new(1.0, 1.0, 1.0);
        let vertices = bounds.vertices();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                assert_ne!(vertices[i], vertices[j]);
            }
        }
    }

    #[test]
    fn test_min_max_are_opposite() {
        let bounds = BoundingBox::new(0.4, 0.5, 0.7);
        assert_eq!(bounds.minimum(), -bounds.maximum());
        assert_eq!(bounds.maximum(), Vec3::new(0.2, 0.25, 0.35));
        assert_eq!(bounds.maximum() - bounds.minimum(), bounds.size());
    }

    #[test]
    fn test_edges_differ_in_one_axis() {
        let bounds = BoundingBox::new(1.0, 2.0, 3.0);
        for &(a, b) in bounds.edges() {
            assert!(a < b);
            assert_eq!((a ^ b).count_ones(), 1);

            let (pa, pb) = bounds.edge_endpoints((a, b));
            let differing = (pa - pb).to_array().iter().filter(|c| **c != 0.0).count();
            assert_eq!(differing, 1);
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let bounds = BoundingBox::default();
        let edges = bounds.edges();
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                assert_ne!(edges[i], edges[j]);
            }
        }
    }

    #[test]
    fn test_every_corner_has_three_edges() {
        let bounds = BoundingBox::default();
        for corner in 0..8u8 {
            let degree = bounds
                .edges()
                .iter()
                .filter(|(a, b)| *a == corner || *b == corner)
                .count();
            assert_eq!(degree, 3);
        }
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        assert!(BoundingBox::try_new(0.0, 1.0, 1.0).is_err());
        assert!(BoundingBox::try_new(1.0, -1.0, 1.0).is_err());
        assert!(BoundingBox::try_new(1.0, 1.0, f32::NAN).is_err());
        assert!(BoundingBox::try_new(1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_contains() {
        let bounds = BoundingBox::new(1.0, 1.0, 1.0);
        assert!(bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::splat(0.5)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.51, 0.0)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_edges_span_box_dimensions(
                width in 0.01f32..100.0,
                height in 0.01f32..100.0,
                depth in 0.01f32..100.0,
            ) {
                let bounds = BoundingBox::new(width, height, depth);
                let total: f32 = bounds
                    .edges()
                    .iter()
                    .map(|&edge| {
                        let (a, b) = bounds.edge_endpoints(edge);
                        (b - a).length()
                    })
                    .sum();
                let expected = 4.0 * (width + height + depth);
                prop_assert!((total - expected).abs() <= expected * 1e-5);
                prop_assert!(bounds.vertices().iter().all(|&v| bounds.contains(v)));
                prop_assert!(bounds.center().length() < 1e-6);
            }
        }
    }
}
