//! Per-viewer rendering state.

use volslice_core::{Options, Result, VolumeGeometry};
use volslice_render::{BoxSlicer, Camera, SliceMesh};

/// Everything needed to produce slice geometry for one view of one volume.
///
/// Any change that can move the slices marks the context dirty; the next
/// [`RenderContext::update_slices`] call then re-slices.
#[derive(Debug, Clone)]
pub struct RenderContext {
    volume: VolumeGeometry,
    camera: Camera,
    slicer: BoxSlicer,
    options: Options,
    dirty: bool,
    moving: bool,
}

impl RenderContext {
    /// Creates a context with the camera framing the volume from the
    /// configured default orientation.
    #[must_use]
    pub fn new(volume: VolumeGeometry, options: Options) -> Self {
        let mut camera = Camera::new(1.0);
        camera.set_orientation(options.default_orientation);
        let bounds = volume.bounds();
        camera.look_at_box(bounds.minimum(), bounds.maximum());

        Self {
            volume,
            camera,
            slicer: BoxSlicer::new(),
            options,
            dirty: true,
            moving: false,
        }
    }

    /// The volume being sliced.
    pub fn volume(&self) -> &VolumeGeometry {
        &self.volume
    }

    /// Replaces the volume, keeping the camera where it is.
    pub fn set_volume(&mut self, volume: VolumeGeometry) {
        self.volume = volume;
        self.dirty = true;
    }

    /// The camera slices are aligned to.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access. Slices are recomputed on the next update.
    pub fn camera_mut(&mut self) -> &mut Camera {
        self.dirty = true;
        &mut self.camera
    }

    /// Slice density and orientation settings.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The slicer holding the most recent geometry.
    pub fn slicer(&self) -> &BoxSlicer {
        &self.slicer
    }

    /// Returns whether the camera is being interacted with.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Switches between the interactive and the still slice density.
    pub fn set_moving(&mut self, moving: bool) {
        if self.moving != moving {
            self.moving = moving;
            self.dirty = true;
        }
    }

    /// Returns whether the next update will re-slice.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces a re-slice on the next update.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Re-slices the volume if anything changed since the last update.
    ///
    /// Returns `Ok(true)` when new geometry was produced. On error the
    /// slicer is left empty and the context stays dirty.
    pub fn update_slices(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }

        let bounds = self.volume.bounds();
        let target = self.options.target_slices(self.moving);
        let sample_length = BoxSlicer::sampling_length_for(bounds, &self.camera, target);
        self.slicer
            .slice(bounds, &self.camera, sample_length, self.options.max_slices)?;
        self.dirty = false;

        log::debug!(
            "sliced volume into {} planes ({} vertices)",
            self.slicer.slice_count(),
            self.slicer.vertices().len()
        );
        Ok(true)
    }

    /// GPU-ready copy of the current slices.
    pub fn mesh(&self) -> SliceMesh {
        SliceMesh::from_slicer(&self.slicer)
    }
}
