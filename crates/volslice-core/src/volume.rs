//! Geometry of a loaded image volume.
//!
//! The voxel buffer itself lives with the loader; this descriptor only keeps
//! what slicing needs: voxel counts, voxel spacing and the derived bounds.

use glam::{UVec3, Vec3};

use crate::bounding_box::BoundingBox;
use crate::error::{Result, VolsliceError};

/// Voxel grid extent, spacing and bounding box of a volume.
///
/// The bounding box is the physical extent normalized to unit diagonal, so
/// volumes of any size render at a comparable scale.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeGeometry {
    /// Number of voxels along x (columns), y (rows) and z (images).
    dimensions: UVec3,
    /// Size of one voxel in millimetres.
    voxel_size: Vec3,
    bounds: BoundingBox,
}

impl VolumeGeometry {
    /// Creates the descriptor for a `dimensions` voxel grid with the given spacing.
    pub fn new(dimensions: UVec3, voxel_size: Vec3) -> Result<Self> {
        if dimensions.cmpeq(UVec3::ZERO).any() {
            return Err(VolsliceError::InvalidDimensions(format!(
                "volume {} x {} x {} voxels",
                dimensions.x, dimensions.y, dimensions.z
            )));
        }
        let bounds = normalized_bounds(dimensions, voxel_size)?;
        Ok(Self {
            dimensions,
            voxel_size,
            bounds,
        })
    }

    /// Number of voxels along each axis.
    #[must_use]
    pub fn dimensions(&self) -> UVec3 {
        self.dimensions
    }

    /// Total number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> u64 {
        u64::from(self.dimensions.x) * u64::from(self.dimensions.y) * u64::from(self.dimensions.z)
    }

    /// Size of one voxel in millimetres.
    #[must_use]
    pub fn voxel_size(&self) -> Vec3 {
        self.voxel_size
    }

    /// Physical extent of the whole volume in millimetres.
    #[must_use]
    pub fn size_mm(&self) -> Vec3 {
        self.dimensions.as_vec3() * self.voxel_size
    }

    /// Normalized bounding box of the volume.
    #[must_use]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Changes the voxel spacing and rebuilds the bounds.
    ///
    /// The new box is fully built before it replaces the old one; on error
    /// the descriptor is left untouched.
    pub fn set_voxel_size(&mut self, voxel_size: Vec3) -> Result<()> {
        let bounds = normalized_bounds(self.dimensions, voxel_size)?;
        self.voxel_size = voxel_size;
        self.bounds = bounds;
        log::debug!(
            "voxel size set to {voxel_size:?}, bounds {:?}",
            self.bounds.size()
        );
        Ok(())
    }
}

fn normalized_bounds(dimensions: UVec3, voxel_size: Vec3) -> Result<BoundingBox> {
    if !voxel_size.is_finite() || voxel_size.cmple(Vec3::ZERO).any() {
        return Err(VolsliceError::InvalidVoxelSize {
            x: voxel_size.x,
            y: voxel_size.y,
            z: voxel_size.z,
        });
    }
    let size_mm = dimensions.as_vec3() * voxel_size;
    BoundingBox::from_size(size_mm.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_have_unit_diagonal() {
        let volume = VolumeGeometry::new(UVec3::new(512, 512, 200), Vec3::new(0.7, 0.7, 1.5))
            .unwrap();
        let diagonal = volume.bounds().maximum() - volume.bounds().minimum();
        assert!((diagonal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounds_keep_physical_proportions() {
        let volume =
            VolumeGeometry::new(UVec3::new(100, 100, 50), Vec3::new(1.0, 1.0, 2.0)).unwrap();
        let size = volume.bounds().size();
        assert!((size.x - size.z).abs() < 1e-6);
        assert!((size.x - size.y).abs() < 1e-6);
        assert_eq!(volume.size_mm(), Vec3::new(100.0, 100.0, 100.0));
    }

    #[test]
    fn test_set_voxel_size_replaces_bounds() {
        let mut volume = VolumeGeometry::new(UVec3::new(10, 10, 10), Vec3::ONE).unwrap();
        let before = volume.bounds().clone();
        volume.set_voxel_size(Vec3::new(1.0, 1.0, 3.0)).unwrap();
        assert_ne!(volume.bounds(), &before);
        assert!(volume.bounds().depth() > volume.bounds().width());
    }

    #[test]
    fn test_invalid_voxel_size_keeps_old_bounds() {
        let mut volume = VolumeGeometry::new(UVec3::new(10, 20, 30), Vec3::ONE).unwrap();
        let before = volume.clone();
        let result = volume.set_voxel_size(Vec3::new(1.0, 0.0, 1.0));
        assert!(matches!(
            result,
            Err(VolsliceError::InvalidVoxelSize { .. })
        ));
        assert_eq!(volume, before);
    }

    #[test]
    fn test_empty_volume_rejected() {
        let result = VolumeGeometry::new(UVec3::new(0, 10, 10), Vec3::ONE);
        assert!(matches!(result, Err(VolsliceError::InvalidDimensions(_))));
    }

    #[test]
    fn test_voxel_count() {
        let volume = VolumeGeometry::new(UVec3::new(512, 512, 300), Vec3::ONE).unwrap();
        assert_eq!(volume.voxel_count(), 512 * 512 * 300);
    }
}
