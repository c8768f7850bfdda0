//! GPU-ready packing of slicer output.
//!
//! The slicer produces triangle fans separated by a primitive restart index.
//! [`SliceMesh`] holds a copy of that output as plain-old-data so it can be
//! uploaded by any graphics API, and expands the fans into a triangle list for
//! APIs that have no fan topology.

use std::ops::Range;

use crate::box_slicer::{BoxSlicer, PRIMITIVE_RESTART_INDEX};

/// A slice polygon vertex as laid out in the vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SliceVertex {
    /// Object-space position; also the 3D texture coordinate after the
    /// box-to-texture transform in the shader.
    pub position: [f32; 3],
}

/// Vertex and index data for one frame of slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceMesh {
    vertices: Vec<SliceVertex>,
    indices: Vec<u16>,
}

impl SliceMesh {
    /// Copies the current output of a slicer.
    #[must_use]
    pub fn from_slicer(slicer: &BoxSlicer) -> Self {
        Self {
            vertices: slicer
                .vertices()
                .iter()
                .map(|v| SliceVertex {
                    position: v.to_array(),
                })
                .collect(),
            indices: slicer.indices().to_vec(),
        }
    }

    /// Packed vertices.
    #[must_use]
    pub fn vertices(&self) -> &[SliceVertex] {
        &self.vertices
    }

    /// Fan indices with restart markers.
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Vertex buffer contents.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (16-bit, restart value 65535).
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Position of each fan in the index buffer, restart marker excluded.
    ///
    /// Useful for issuing one draw per polygon where restart is unavailable.
    #[must_use]
    pub fn fan_ranges(&self) -> Vec<Range<u32>> {
        let mut ranges = Vec::new();
        let mut start = 0u32;
        for (i, &index) in self.indices.iter().enumerate() {
            if index == PRIMITIVE_RESTART_INDEX {
                let end = i as u32;
                if end > start {
                    ranges.push(start..end);
                }
                start = end + 1;
            }
        }
        ranges
    }

    /// Expands every fan into independent triangles.
    ///
    /// A fan `v0 v1 ... vn` becomes `(v0, v1, v2), (v0, v2, v3), ...`, so the
    /// winding of the fan is preserved. Polygons with fewer than three
    /// vertices produce no triangles.
    #[must_use]
    pub fn to_triangle_list(&self) -> Vec<u16> {
        let mut triangles = Vec::new();
        for fan in self
            .indices
            .split(|&i| i == PRIMITIVE_RESTART_INDEX)
            .filter(|fan| fan.len() >= 3)
        {
            let hub = fan[0];
            for pair in fan[1..].windows(2) {
                triangles.extend_from_slice(&[hub, pair[0], pair[1]]);
            }
        }
        triangles
    }

    /// Number of triangles drawn for this mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices
            .split(|&i| i == PRIMITIVE_RESTART_INDEX)
            .map(|fan| fan.len().saturating_sub(2))
            .sum()
    }

    /// Returns whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
