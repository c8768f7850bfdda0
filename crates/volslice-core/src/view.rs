//! Read-only view basis consumed by the slicer.
//!
//! Anything that can report an eye position, an orthonormal right/up/forward
//! basis and a view matrix can drive slicing. [`ViewFrame`] is the plain value
//! implementation; interactive cameras implement [`ViewBasis`] themselves.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Standard anatomical viewing directions for a volume stored as axial images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewOrientation {
    /// Looking along the image stack (-Z), rows up.
    #[default]
    Axial,
    /// Looking front to back (+Y), stack up.
    Coronal,
    /// Looking from the side (-X), stack up.
    Sagittal,
}

impl ViewOrientation {
    /// Viewing direction for this orientation.
    #[must_use]
    pub fn forward(self) -> Vec3 {
        match self {
            ViewOrientation::Axial => Vec3::NEG_Z,
            ViewOrientation::Coronal => Vec3::Y,
            ViewOrientation::Sagittal => Vec3::NEG_X,
        }
    }

    /// Up direction for this orientation.
    #[must_use]
    pub fn up(self) -> Vec3 {
        match self {
            ViewOrientation::Axial => Vec3::Y,
            ViewOrientation::Coronal | ViewOrientation::Sagittal => Vec3::Z,
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewOrientation::Axial => "axial",
            ViewOrientation::Coronal => "coronal",
            ViewOrientation::Sagittal => "sagittal",
        }
    }
}

/// Eye position, orthonormal basis and view matrix of a viewer.
///
/// Implementations must keep `right`, `up` and `forward` unit length and
/// mutually orthogonal, with `right x up == -forward` (right-handed, looking
/// down the negative view-space z axis).
pub trait ViewBasis {
    /// Eye position in world space.
    fn eye(&self) -> Vec3;

    /// Unit up vector.
    fn up(&self) -> Vec3;

    /// Unit right vector.
    fn right(&self) -> Vec3;

    /// Unit viewing direction.
    fn forward(&self) -> Vec3;

    /// World-to-view transform.
    fn view_matrix(&self) -> Mat4;

    /// Distance of a world-space point in front of the eye, measured along
    /// the viewing direction.
    fn view_distance(&self, point: Vec3) -> f32 {
        -self.view_matrix().transform_point3(point).z
    }
}

/// A fixed view basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    view: Mat4,
}

impl ViewFrame {
    /// Derives the basis from a view matrix.
    ///
    /// The columns of the inverse view matrix are the right, up and backward
    /// axes followed by the eye position.
    #[must_use]
    pub fn from_view(view: Mat4) -> Self {
        let inverse = view.inverse();
        Self {
            eye: inverse.w_axis.truncate(),
            right: inverse.x_axis.truncate(),
            up: inverse.y_axis.truncate(),
            forward: -inverse.z_axis.truncate(),
            view,
        }
    }

    /// Builds a frame looking from `eye` toward `target`.
    ///
    /// `up` only needs to be roughly upward; it is re-orthogonalized.
    #[must_use]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);
        Self {
            eye,
            right,
            up,
            forward,
            view: Mat4::look_at_rh(eye, target, up),
        }
    }
}

impl Default for ViewFrame {
    fn default() -> Self {
        Self::from_view(Mat4::IDENTITY)
    }
}

impl ViewBasis for ViewFrame {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn right(&self) -> Vec3 {
        self.right
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }
}
