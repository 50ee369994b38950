//! Mutable per-body simulation state.

use glam::DVec3;
use orrery_catalog::BodyRecord;

/// A catalog record paired with its mutable orbital state.
///
/// `orbital_angle` and `spin_angle` grow without bound; they wrap implicitly
/// because only their sine and cosine are ever consumed.
#[derive(Debug, Clone)]
pub struct BodyState {
    /// The immutable catalog record for this body.
    pub record: BodyRecord,
    /// Current angle along the orbit in radians.
    pub orbital_angle: f64,
    /// Current self-rotation angle in radians.
    pub spin_angle: f64,
}

impl BodyState {
    /// World-space position derived from the current orbital angle.
    ///
    /// Always `(cos(a)·r, 0, sin(a)·r)`; the sun's radius is 0, which puts
    /// it at the origin for any angle.
    pub fn position(&self) -> DVec3 {
        let r = self.record.orbital_radius;
        DVec3::new(
            self.orbital_angle.cos() * r,
            0.0,
            self.orbital_angle.sin() * r,
        )
    }
}
