//! Headless renderer: stands in for the external GPU renderer when running
//! without a windowing system.

use orrery_scene::{Renderer, SceneSnapshot, StaticGeometry};
use tracing::{debug, trace};

/// Logs frame state instead of painting it.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    frames: u64,
}

impl Renderer for TraceRenderer {
    fn prepare(&mut self, geometry: &StaticGeometry) {
        debug!(
            "static geometry: {} stars, {} orbit paths",
            geometry.stars.len(),
            geometry.orbit_paths.len(),
        );
    }

    fn render(&mut self, snapshot: &SceneSnapshot) {
        self.frames += 1;
        trace!(
            "frame {}: {} bodies, camera at ({:.1}, {:.1}, {:.1})",
            self.frames,
            snapshot.bodies.len(),
            snapshot.camera_position[0],
            snapshot.camera_position[1],
            snapshot.camera_position[2],
        );
    }
}
