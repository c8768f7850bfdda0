//! Error types for volslice.

use thiserror::Error;

/// The main error type for volslice operations.
#[derive(Error, Debug)]
pub enum VolsliceError {
    /// A box or volume was given a zero, negative or non-finite extent.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Voxel spacing must be positive and finite along every axis.
    #[error("invalid voxel size: [{x}, {y}, {z}]")]
    InvalidVoxelSize { x: f32, y: f32, z: f32 },

    /// Sampling length passed to the slicer was non-positive or non-finite.
    #[error("invalid sampling length: {0}")]
    InvalidSampleLength(f32),

    /// The slice polygons need more vertices than 16-bit indices can address.
    #[error("slice geometry exceeds the 16-bit index range ({vertices} vertices)")]
    IndexOverflow { vertices: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for volslice operations.
pub type Result<T> = std::result::Result<T, VolsliceError>;
