//! Core types for volslice.
//!
//! This crate provides the plain data the slicing engine works on:
//! - [`BoundingBox`] with fixed corner numbering and edge list
//! - [`SlicePlane`] for plane/segment intersection
//! - the [`ViewBasis`] trait and a value implementation, [`ViewFrame`]
//! - [`VolumeGeometry`] describing a loaded image volume
//! - persistent [`Options`] and the crate-wide error type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Corner indices are known to fit in u8
#![allow(clippy::cast_possible_truncation)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bounding_box;
pub mod error;
pub mod options;
pub mod slice_plane;
pub mod view;
pub mod volume;

pub use bounding_box::{BoundingBox, Edge, BOX_CORNER_COUNT, BOX_EDGE_COUNT};
pub use error::{Result, VolsliceError};
pub use options::Options;
pub use slice_plane::SlicePlane;
pub use view::{ViewBasis, ViewFrame, ViewOrientation};
pub use volume::VolumeGeometry;

// Re-export glam types for convenience
pub use glam::{Mat4, UVec3, Vec3, Vec4};
