//! View-aligned slicing of a bounding box.
//!
//! [`BoxSlicer`] cuts the volume bounding box with a stack of evenly spaced
//! planes perpendicular to the viewing direction. Each cut is a convex
//! polygon; all polygons share one vertex buffer and one 16-bit index buffer
//! in which every polygon is a triangle fan terminated by
//! [`PRIMITIVE_RESTART_INDEX`].

use glam::Vec3;
use volslice_core::{BoundingBox, Result, SlicePlane, ViewBasis, VolsliceError, BOX_CORNER_COUNT};

use crate::vertex_sorter::VertexSorter;

/// Index value that ends one triangle fan and starts the next.
pub const PRIMITIVE_RESTART_INDEX: u16 = u16::MAX;

/// Largest number of vertices addressable without colliding with the
/// restart index.
pub const MAX_VERTICES: usize = PRIMITIVE_RESTART_INDEX as usize;

/// Intersects view-aligned planes with a box and keeps the resulting polygons.
///
/// Buffers are replaced on every [`BoxSlicer::slice`] call; slices borrowed
/// from the getters are only meaningful until then.
#[derive(Debug, Clone, Default)]
pub struct BoxSlicer {
    vertices: Vec<Vec3>,
    indices: Vec<u16>,
    slice_count: u32,
    sampling_length: f32,
}

impl BoxSlicer {
    /// Creates a slicer with empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest and farthest eye distance of the box corners.
    #[must_use]
    pub fn depth_range(bounds: &BoundingBox, view: &impl ViewBasis) -> (f32, f32) {
        bounds
            .vertices()
            .iter()
            .map(|&corner| view.view_distance(corner))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), d| {
                (min.min(d), max.max(d))
            })
    }

    /// Spacing that fits `num_samples` planes inside the box's depth extent,
    /// leaving half a spacing of margin at either end.
    #[must_use]
    pub fn sampling_length_for(
        bounds: &BoundingBox,
        view: &impl ViewBasis,
        num_samples: u32,
    ) -> f32 {
        let (min_distance, max_distance) = Self::depth_range(bounds, view);
        (max_distance - min_distance) / (num_samples as f32 + 1.0)
    }

    /// Slices the box with planes roughly `sample_length` apart.
    ///
    /// The plane count is `round(depth / sample_length)`, capped at
    /// `max_slices` unless it is 0. The planes are then spread evenly so the
    /// first and last sit half a spacing inside the box. Planes are emitted
    /// back to front.
    pub fn slice(
        &mut self,
        bounds: &BoundingBox,
        view: &impl ViewBasis,
        sample_length: f32,
        max_slices: u32,
    ) -> Result<()> {
        self.vertices.clear();
        self.indices.clear();
        self.slice_count = 0;
        self.sampling_length = 0.0;

        if !(sample_length.is_finite() && sample_length > 0.0) {
            return Err(VolsliceError::InvalidSampleLength(sample_length));
        }

        let (min_distance, max_distance) = Self::depth_range(bounds, view);
        let total_length = max_distance - min_distance;

        let requested = (total_length / sample_length).round() as u32;
        let slice_count = if max_slices > 0 && requested > max_slices {
            log::debug!("clamping {requested} slices to {max_slices}");
            max_slices
        } else {
            requested
        };
        let spacing = total_length / (slice_count as f32 + 1.0);

        let sorter = VertexSorter::from_view(view);
        let eye = view.eye();
        let forward = view.forward();

        for i in 1..=slice_count {
            let distance = max_distance - i as f32 * spacing;
            let plane = SlicePlane::from_unit_normal(eye + forward * distance, sorter.normal());
            if let Err(err) = self.slice_plane_with(bounds, &plane, &sorter) {
                self.vertices.clear();
                self.indices.clear();
                return Err(err);
            }
        }

        self.slice_count = slice_count;
        self.sampling_length = spacing;

        log::debug!(
            "sliced depth {total_length:.4} into {slice_count} planes ({} polygons, {} vertices)",
            self.polygon_count(),
            self.vertices.len()
        );
        Ok(())
    }

    /// Appends the cross-section of the box with the view-aligned plane
    /// through `point`.
    ///
    /// Returns the number of vertices added; 0 means the plane missed the
    /// box and nothing (not even a restart index) was appended.
    pub fn slice_plane(
        &mut self,
        bounds: &BoundingBox,
        view: &impl ViewBasis,
        point: Vec3,
    ) -> Result<usize> {
        let sorter = VertexSorter::from_view(view);
        let plane = SlicePlane::from_unit_normal(point, sorter.normal());
        self.slice_plane_with(bounds, &plane, &sorter)
    }

    fn slice_plane_with(
        &mut self,
        bounds: &BoundingBox,
        plane: &SlicePlane,
        sorter: &VertexSorter,
    ) -> Result<usize> {
        let polygon_start = self.indices.len();
        let vertex_start = self.vertices.len();

        // A corner shared by several cut edges contributes one vertex
        let mut corner_used = [false; BOX_CORNER_COUNT];

        for &(first, second) in bounds.edges() {
            let (a, b) = bounds.edge_endpoints((first, second));
            let Some(t) = plane.edge_parameter(a, b) else {
                continue;
            };

            let point = if t == 0.0 {
                if std::mem::replace(&mut corner_used[usize::from(first)], true) {
                    continue;
                }
                a
            } else if t == 1.0 {
                if std::mem::replace(&mut corner_used[usize::from(second)], true) {
                    continue;
                }
                b
            } else {
                a + (b - a) * t
            };

            if let Err(err) = self.push_vertex(point) {
                self.vertices.truncate(vertex_start);
                self.indices.truncate(polygon_start);
                return Err(err);
            }
        }

        let added = self.vertices.len() - vertex_start;
        if added > 0 {
            sorter.sort(&self.vertices, &mut self.indices[polygon_start..]);
            self.indices.push(PRIMITIVE_RESTART_INDEX);
        }
        Ok(added)
    }

    fn push_vertex(&mut self, point: Vec3) -> Result<()> {
        let index = self.vertices.len();
        if index >= MAX_VERTICES {
            return Err(VolsliceError::IndexOverflow {
                vertices: index + 1,
            });
        }
        self.indices.push(index as u16);
        self.vertices.push(point);
        Ok(())
    }

    /// Intersection points of all polygons.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Polygon indices, each polygon followed by [`PRIMITIVE_RESTART_INDEX`].
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// The restart value used in [`BoxSlicer::indices`].
    #[must_use]
    pub fn primitive_restart_index(&self) -> u16 {
        PRIMITIVE_RESTART_INDEX
    }

    /// Number of planes used by the last [`BoxSlicer::slice`].
    #[must_use]
    pub fn slice_count(&self) -> u32 {
        self.slice_count
    }

    /// Plane spacing used by the last [`BoxSlicer::slice`].
    #[must_use]
    pub fn sampling_length(&self) -> f32 {
        self.sampling_length
    }

    /// Number of polygons in the index buffer.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.indices
            .iter()
            .filter(|&&i| i == PRIMITIVE_RESTART_INDEX)
            .count()
    }

    /// Index runs of the individual polygons, restart index excluded.
    pub fn polygons(&self) -> impl Iterator<Item = &[u16]> + '_ {
        self.indices
            .split(|&i| i == PRIMITIVE_RESTART_INDEX)
            .filter(|run| !run.is_empty())
    }

    /// Returns whether the last slice produced no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
