//! volslice: view-aligned slice geometry for volume rendering.
//!
//! A volume is drawn by cutting its bounding box with many planes
//! perpendicular to the viewing direction and blending the textured
//! cross-sections back to front. This crate computes those cross-sections:
//! convex polygons packed into one vertex buffer and one 16-bit index buffer
//! of triangle fans separated by a primitive restart index.
//!
//! # Quick Start
//!
//! ```no_run
//! use volslice::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // 512 x 512 x 300 CT volume with anisotropic voxels
//!     let volume = VolumeGeometry::new(
//!         UVec3::new(512, 512, 300),
//!         Vec3::new(0.7, 0.7, 1.5),
//!     )?;
//!     let mut context = RenderContext::new(volume, Options::default());
//!
//!     context.camera_mut().orbit(0.4, 0.2);
//!     context.update_slices()?;
//!
//!     let mesh = context.mesh();
//!     println!("{} triangles", mesh.triangle_count());
//!     Ok(())
//! }
//! ```
//!
//! # Lower-level use
//!
//! [`BoxSlicer`] works with any [`ViewBasis`], so a renderer that owns its
//! own camera can slice directly:
//!
//! ```
//! use volslice::*;
//!
//! let view = ViewFrame::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let mut slicer = BoxSlicer::new();
//! slicer.slice(&BoundingBox::default(), &view, 0.25, 0).unwrap();
//! assert_eq!(slicer.polygon_count(), 4);
//! ```

// Accessors on the context are plain getters
#![allow(clippy::must_use_candidate)]

mod context;

pub use context::RenderContext;

// Re-export core types
pub use volslice_core::{
    bounding_box::{BoundingBox, Edge, BOX_CORNER_COUNT, BOX_EDGE_COUNT},
    error::{Result, VolsliceError},
    options::{Options, CONFIG_FILE_NAME},
    slice_plane::SlicePlane,
    view::{ViewBasis, ViewFrame, ViewOrientation},
    volume::VolumeGeometry,
    Mat4, UVec3, Vec3, Vec4,
};

// Re-export render types
pub use volslice_render::{
    BoxSlicer, Camera, ProjectionMode, SliceMesh, SliceVertex, VertexSorter, MAX_VERTICES,
    PRIMITIVE_RESTART_INDEX,
};

/// Installs the `env_logger` backend for the `log` facade.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
