//! Look-at camera with view/projection matrices for picking.

use glam::{DMat4, DVec3};
use orrery_math::Ray;

/// Camera position and look-at point. The pair the fly-to animation
/// interpolates and the renderer collaborator consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
}

impl CameraPose {
    /// Create a pose from a position and look-at target.
    pub fn new(position: DVec3, target: DVec3) -> Self {
        Self { position, target }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        // The classic opening shot: above and behind the ecliptic, looking
        // at the sun.
        Self {
            position: DVec3::new(0.0, 30.0, 90.0),
            target: DVec3::ZERO,
        }
    }
}

/// A perspective camera built from a [`CameraPose`] plus projection
/// parameters. Only consumed for pointer picking and the render snapshot;
/// actual rasterization belongs to the external renderer.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Current pose (position + look-at target).
    pub pose: CameraPose,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    /// Width / height.
    pub aspect_ratio: f64,
    /// Near clip plane distance (positive).
    pub near: f64,
    /// Far clip plane distance (positive, > near).
    pub far: f64,
}

impl Camera {
    /// Compute the view matrix for the current pose.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.pose.position, self.pose.target, DVec3::Y)
    }

    /// Compute the perspective projection matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio after a window resize.
    pub fn set_aspect_ratio(&mut self, width: f64, height: f64) {
        self.aspect_ratio = width / height;
    }

    /// Build a world-space ray through a point in normalized device
    /// coordinates (`x` and `y` in `[-1, 1]`, +y up).
    pub fn pick_ray(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let inverse = self.view_projection_matrix().inverse();
        let near = inverse.project_point3(DVec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(DVec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pose: CameraPose::default(),
            fov_y: 75_f64.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}
