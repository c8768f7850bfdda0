//! Rendering-side geometry for volslice.
//!
//! This crate provides what a slice-based volume renderer needs each frame:
//! - [`Camera`] with an orthonormal view basis
//! - [`BoxSlicer`], which cuts the volume bounds into view-aligned polygons
//! - [`VertexSorter`], the angular ordering used to make those polygons drawable
//! - [`SliceMesh`], the slicer output packed for GPU upload

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Slice and vertex counts are bounded far below the float mantissa and u16 range
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Exact comparisons mark plane hits on box corners
#![allow(clippy::float_cmp)]

pub mod box_slicer;
pub mod camera;
pub mod slice_mesh;
pub mod vertex_sorter;

pub use box_slicer::{BoxSlicer, MAX_VERTICES, PRIMITIVE_RESTART_INDEX};
pub use camera::{Camera, ProjectionMode};
pub use slice_mesh::{SliceMesh, SliceVertex};
pub use vertex_sorter::VertexSorter;
