//! The renderer collaborator seam: static geometry prepared once at
//! startup and the per-frame numeric state.

use bytemuck::{Pod, Zeroable};

use orrery_camera::Camera;
use orrery_sim::World;

use crate::orbit::orbit_path_points;
use crate::starfield::{StarVertex, StarfieldGenerator};

/// Closed orbit circle for one body.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    /// Body id this path belongs to.
    pub body_id: String,
    /// Line-strip points (first == last).
    pub points: Vec<[f32; 3]>,
}

/// Geometry that never changes after startup: the starfield backdrop and
/// one orbit circle per orbiting body.
#[derive(Debug, Clone)]
pub struct StaticGeometry {
    /// Background star point cloud.
    pub stars: Vec<StarVertex>,
    /// Orbit circles, in catalog order, sun excluded.
    pub orbit_paths: Vec<OrbitPath>,
}

impl StaticGeometry {
    /// Build the backdrop for a world.
    pub fn build(world: &World, starfield: &StarfieldGenerator, orbit_segments: u32) -> Self {
        let orbit_paths = world
            .bodies()
            .iter()
            .filter(|b| !b.record.is_sun())
            .map(|b| OrbitPath {
                body_id: b.record.id.clone(),
                points: orbit_path_points(b.record.orbital_radius, orbit_segments),
            })
            .collect();
        Self {
            stars: starfield.generate(),
            orbit_paths,
        }
    }
}

/// GPU instance data for one body mesh.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BodyInstance {
    /// World-space position.
    pub position: [f32; 3],
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Self-rotation angle in radians, applied about +y by the renderer.
    pub spin_angle: f32,
    /// Padding to a 16-byte multiple.
    pub _padding: [f32; 3],
}

/// Everything the renderer needs to paint one frame.
///
/// `body_ids` parallels `bodies` so the renderer can map instances to
/// textures/materials; the instances themselves stay Pod for direct upload.
#[derive(Debug, Clone)]
pub struct SceneSnapshot {
    /// One instance per body, in catalog order.
    pub bodies: Vec<BodyInstance>,
    /// Body ids parallel to `bodies`.
    pub body_ids: Vec<String>,
    /// Camera position.
    pub camera_position: [f32; 3],
    /// Camera look-at target.
    pub camera_target: [f32; 3],
}

impl SceneSnapshot {
    /// Capture the current world and camera state.
    pub fn capture(world: &World, camera: &Camera) -> Self {
        let mut bodies = Vec::with_capacity(world.bodies().len());
        let mut body_ids = Vec::with_capacity(world.bodies().len());
        for body in world.bodies() {
            let p = body.position();
            bodies.push(BodyInstance {
                position: [p.x as f32, p.y as f32, p.z as f32],
                radius: body.record.display_size as f32,
                spin_angle: body.spin_angle as f32,
                _padding: [0.0; 3],
            });
            body_ids.push(body.record.id.clone());
        }
        Self {
            bodies,
            body_ids,
            camera_position: [
                camera.pose.position.x as f32,
                camera.pose.position.y as f32,
                camera.pose.position.z as f32,
            ],
            camera_target: [
                camera.pose.target.x as f32,
                camera.pose.target.y as f32,
                camera.pose.target.z as f32,
            ],
        }
    }
}

/// The rendering collaborator seam. Given the numeric frame state, paint one
/// frame; the core never reaches past this trait.
pub trait Renderer {
    /// Receive the static backdrop once, before the first frame.
    fn prepare(&mut self, geometry: &StaticGeometry);

    /// Paint one frame from the snapshot.
    fn render(&mut self, snapshot: &SceneSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_catalog::Catalog;

    fn world() -> World {
        World::new(&Catalog::load_embedded().unwrap(), 0)
    }

    #[test]
    fn test_snapshot_covers_every_body_in_order() {
        let world = world();
        let snapshot = SceneSnapshot::capture(&world, &Camera::default());
        assert_eq!(snapshot.bodies.len(), 9);
        assert_eq!(snapshot.body_ids.len(), 9);
        assert_eq!(snapshot.body_ids[0], "sun");
        for (instance, body) in snapshot.bodies.iter().zip(world.bodies()) {
            let p = body.position();
            assert!((instance.position[0] - p.x as f32).abs() < 1e-6);
            assert!((instance.position[2] - p.z as f32).abs() < 1e-6);
            assert!((instance.radius - body.record.display_size as f32).abs() < 1e-6);
        }
    }

    #[test]
    fn test_snapshot_tracks_camera_pose() {
        let world = world();
        let mut camera = Camera::default();
        camera.pose.position = glam::DVec3::new(1.0, 2.0, 3.0);
        camera.pose.target = glam::DVec3::new(4.0, 5.0, 6.0);
        let snapshot = SceneSnapshot::capture(&world, &camera);
        assert_eq!(snapshot.camera_position, [1.0, 2.0, 3.0]);
        assert_eq!(snapshot.camera_target, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_instance_data_alignment() {
        let size = std::mem::size_of::<BodyInstance>();
        assert_eq!(size % 16, 0, "size={size}");
    }

    #[test]
    fn test_static_geometry_has_one_path_per_planet() {
        let world = world();
        let starfield = StarfieldGenerator::new(42, 100, 1000.0);
        let geometry = StaticGeometry::build(&world, &starfield, 128);

        assert_eq!(geometry.stars.len(), 100);
        assert_eq!(geometry.orbit_paths.len(), 8, "sun gets no orbit circle");
        for path in &geometry.orbit_paths {
            assert_ne!(path.body_id, "sun");
            assert_eq!(path.points.len(), 129);
            let radius = world
                .body(&path.body_id)
                .unwrap()
                .record
                .orbital_radius as f32;
            let p = path.points[0];
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_renderer_trait_is_object_safe() {
        struct CountingRenderer {
            frames: u32,
        }
        impl Renderer for CountingRenderer {
            fn prepare(&mut self, _geometry: &StaticGeometry) {}
            fn render(&mut self, _snapshot: &SceneSnapshot) {
                self.frames += 1;
            }
        }

        let world = world();
        let snapshot = SceneSnapshot::capture(&world, &Camera::default());
        let mut counting = CountingRenderer { frames: 0 };
        counting.render(&snapshot);
        counting.render(&snapshot);
        assert_eq!(counting.frames, 2);

        // Must remain usable behind a trait object.
        let mut boxed: Box<dyn Renderer> = Box::new(counting);
        boxed.render(&snapshot);
    }
}
