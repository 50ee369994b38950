//! Pointer-pick resolution: unproject the cursor through the camera and
//! test every body's hit sphere; nearest hit wins.

use orrery_camera::Camera;
use orrery_sim::World;

/// Convert a window-pixel position to normalized device coordinates
/// (`x` right, `y` up, both in `[-1, 1]` inside the window).
pub fn window_to_ndc(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    ((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}

/// Resolve a pointer pick to the nearest body under the cursor.
///
/// Each body's hit volume is a sphere of its display size at its current
/// position. Returns `None` when nothing is hit; a miss is expected, not an
/// error.
pub fn pick_body<'w>(world: &'w World, camera: &Camera, ndc_x: f64, ndc_y: f64) -> Option<&'w str> {
    let ray = camera.pick_ray(ndc_x, ndc_y);

    let mut nearest: Option<(f64, &str)> = None;
    for body in world.bodies() {
        if let Some(t) = ray.sphere_intersection(body.position(), body.record.display_size)
            && nearest.is_none_or(|(best, _)| t < best)
        {
            nearest = Some((t, body.record.id.as_str()));
        }
    }

    if let Some((t, id)) = nearest {
        tracing::debug!("pointer pick hit {id:?} at distance {t:.2}");
    }
    nearest.map(|(_, id)| id)
}
