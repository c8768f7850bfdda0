//! Camera and view management.

use glam::{Mat4, Quat, Vec3};
use volslice_core::{ViewBasis, ViewOrientation};

/// Camera projection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// A 3D camera orbiting a volume.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector. Need not be orthogonal to the viewing direction.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Projection mode.
    pub projection_mode: ProjectionMode,
    /// Orthographic scale (used when `projection_mode` is Orthographic).
    pub ortho_scale: f32,
}

impl Camera {
    /// Creates a new camera with default settings.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
            projection_mode: ProjectionMode::Perspective,
            ortho_scale: 1.0,
        }
    }

    /// Creates a camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
            ..Self::default()
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection_mode {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_height = self.ortho_scale;
                let half_width = half_height * self.aspect_ratio;
                // Symmetric depth range around the eye so the whole volume
                // survives clipping while orbiting.
                let dist = (self.position - self.target).length();
                let ortho_depth = (dist + self.far).max(self.ortho_scale * 100.0);
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    -ortho_depth,
                    ortho_depth,
                )
            }
        }
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Returns the up direction made orthogonal to the viewing direction.
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Orbits the camera around the target.
    ///
    /// `delta_x` turns around the up vector, `delta_y` tilts around the
    /// right vector. Tilting stops short of looking straight along `up`.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let axis_up = self.up.normalize();
        let offset = self.position - self.target;

        let yaw = Quat::from_axis_angle(axis_up, -delta_x);
        let pitch = Quat::from_axis_angle(self.right(), -delta_y);

        let tilted = yaw * pitch * offset;
        let offset = if tilted.normalize().dot(axis_up).abs() < 0.999 {
            tilted
        } else {
            yaw * offset
        };
        self.position = self.target + offset;
    }

    /// Pans the camera.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let offset = self.right() * delta_x + self.up_vector() * delta_y;
        self.translate(offset);
    }

    /// Moves eye and target together.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Zooms the camera (moves toward/away from target for perspective,
    /// adjusts `ortho_scale` for orthographic).
    pub fn zoom(&mut self, delta: f32) {
        match self.projection_mode {
            ProjectionMode::Perspective => {
                let direction = self.forward();
                let new_distance = (self.distance() - delta).max(0.1);
                self.position = self.target - direction * new_distance;
            }
            ProjectionMode::Orthographic => {
                // delta > 0 zooms in; proportional so the feel is scale independent
                let zoom_factor = 1.0 - delta * 0.4;
                self.ortho_scale = (self.ortho_scale * zoom_factor).clamp(0.01, 1000.0);
            }
        }
    }

    /// Frames the given bounding box, keeping the current viewing direction.
    pub fn look_at_box(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let size = (max - min).length();
        let extents = max - min;
        let direction = self.forward();

        self.target = center;
        self.position = center - direction * size * 1.5;
        self.near = size * 0.001;
        self.far = size * 100.0;

        // Fit the larger of height or width/aspect_ratio
        let half_height = extents.y.max(extents.x / self.aspect_ratio) * 0.6;
        self.ortho_scale = half_height.max(0.1);
    }

    /// Looks along an anatomical direction, keeping target and distance.
    pub fn set_orientation(&mut self, orientation: ViewOrientation) {
        let distance = self.distance();
        self.up = orientation.up();
        self.position = self.target - orientation.forward() * distance;
    }

    /// Adopts an arbitrary view matrix.
    ///
    /// The eye and basis are read from the inverse matrix; the target is
    /// placed along the new viewing direction at the current distance.
    pub fn set_view(&mut self, view: Mat4) {
        let inverse = view.inverse();
        let distance = self.distance();
        let forward = -inverse.z_axis.truncate();

        self.position = inverse.w_axis.truncate();
        self.up = inverse.y_axis.truncate();
        self.target = self.position + forward * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

impl ViewBasis for Camera {
    fn eye(&self) -> Vec3 {
        self.position
    }

    fn up(&self) -> Vec3 {
        self.up_vector()
    }

    fn right(&self) -> Vec3 {
        Camera::right(self)
    }

    fn forward(&self) -> Vec3 {
        Camera::forward(self)
    }

    fn view_matrix(&self) -> Mat4 {
        Camera::view_matrix(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::default();
        assert_eq!(camera.projection_mode, ProjectionMode::Perspective);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
        assert_vec_near(camera.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn test_projection_mode_perspective() {
        let camera = Camera::new(1.0);
        let proj = camera.projection_matrix();
        assert!(proj.w_axis.z != 0.0);
    }

    #[test]
    fn test_projection_mode_orthographic() {
        let mut camera = Camera::new(1.0);
        camera.projection_mode = ProjectionMode::Orthographic;
        camera.ortho_scale = 5.0;
        let proj = camera.projection_matrix();
        assert!((proj.w_axis.w - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_basis_matches_view_matrix() {
        let camera = Camera::looking_at(Vec3::new(1.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y);
        let inverse = camera.view_matrix().inverse();

        assert_vec_near(ViewBasis::right(&camera), inverse.x_axis.truncate());
        assert_vec_near(ViewBasis::up(&camera), inverse.y_axis.truncate());
        assert_vec_near(ViewBasis::forward(&camera), -inverse.z_axis.truncate());
        assert_vec_near(ViewBasis::eye(&camera), inverse.w_axis.truncate());
    }

    #[test]
    fn test_up_vector_is_orthogonal() {
        // Up deliberately not perpendicular to the gaze
        let camera = Camera::looking_at(Vec3::new(0.0, 0.2, -10.0), Vec3::ZERO, Vec3::Y);
        assert!(camera.up_vector().dot(camera.forward()).abs() < 1e-6);
        assert!((camera.up_vector().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_perspective() {
        let mut camera = Camera::new(1.0);
        camera.position = Vec3::new(0.0, 0.0, 5.0);
        camera.target = Vec3::ZERO;

        let initial_distance = camera.distance();
        camera.zoom(1.0);

        assert!(
            camera.distance() < initial_distance,
            "Perspective zoom in should decrease distance"
        );
    }

    #[test]
    fn test_zoom_orthographic() {
        let mut camera = Camera::new(1.0);
        camera.projection_mode = ProjectionMode::Orthographic;
        camera.ortho_scale = 5.0;

        camera.zoom(1.0);

        assert!(
            camera.ortho_scale < 5.0,
            "Orthographic zoom in should decrease scale"
        );
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y);
        camera.orbit(0.7, 0.3);
        assert!((camera.distance() - 4.0).abs() < 1e-4);
        assert!(camera.position != Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_orbit_stops_at_pole() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO, Vec3::Y);
        camera.orbit(0.0, std::f32::consts::FRAC_PI_2);
        assert!(camera.forward().dot(Vec3::Y).abs() < 0.999);
        assert!(camera.right().is_finite());
    }

    #[test]
    fn test_pan_moves_target() {
        let mut camera = Camera::default();
        let before = camera.target;
        camera.pan(1.0, 0.0);
        assert_vec_near(camera.target - before, Vec3::X);
    }

    #[test]
    fn test_set_orientation() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y);
        camera.set_orientation(ViewOrientation::Sagittal);
        assert_vec_near(camera.forward(), Vec3::NEG_X);
        assert_vec_near(camera.up_vector(), Vec3::Z);
        assert!((camera.distance() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_view_round_trip() {
        let source = Camera::looking_at(Vec3::new(3.0, 1.0, -2.0), Vec3::ZERO, Vec3::Y);
        let mut camera = Camera::default();
        camera.set_view(source.view_matrix());

        assert_vec_near(camera.position, source.position);
        assert_vec_near(camera.forward(), source.forward());
        assert_vec_near(camera.up_vector(), source.up_vector());
    }

    #[test]
    fn test_look_at_box() {
        let mut camera = Camera::new(1.0);
        camera.look_at_box(Vec3::splat(-0.5), Vec3::splat(0.5));
        assert_eq!(camera.target, Vec3::ZERO);
        assert!(camera.distance() > 1.0);
        assert_vec_near(camera.forward(), Vec3::NEG_Z);
    }
}
