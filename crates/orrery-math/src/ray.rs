//! Ray primitive and ray/sphere intersection for pointer picking.

use glam::DVec3;

/// A half-line in world space with a unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: DVec3,
    /// Unit direction vector.
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray from an origin and a (not necessarily unit) direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// The point at parameter `t` along the ray.
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the nearest intersection with a sphere,
    /// or `None` if the sphere is missed or lies entirely behind the origin.
    ///
    /// An origin inside the sphere yields the exit distance, so picking
    /// still works when the camera has flown inside a body's hit volume.
    pub fn sphere_intersection(&self, center: DVec3, radius: f64) -> Option<f64> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        if far >= 0.0 {
            return Some(far);
        }
        None
    }
}
