//! The world: owned collection of body states plus the global speed
//! multiplier, mutated only by [`World::tick`] on the update thread.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_catalog::Catalog;

use crate::body::BodyState;

/// The frame rate the catalog's angular rates were authored against.
///
/// Rates are radians per 1/60 s frame, so a tick advances each angle by
/// `rate * multiplier * dt * 60`. At an actual 60 Hz the factors cancel and
/// one frame advances exactly one authored step.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Owned simulation state for every celestial body.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<BodyState>,
    speed_multiplier: f64,
}

impl World {
    /// Build a world from a catalog, seeding each orbiting body's initial
    /// angle uniformly in `[0, 2π)` so planets do not start aligned.
    ///
    /// The same seed and catalog always produce the same starting angles.
    pub fn new(catalog: &Catalog, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bodies = catalog
            .bodies()
            .iter()
            .map(|record| {
                let orbital_angle = if record.is_sun() {
                    0.0
                } else {
                    rng.random::<f64>() * std::f64::consts::TAU
                };
                BodyState {
                    record: record.clone(),
                    orbital_angle,
                    spin_angle: 0.0,
                }
            })
            .collect();

        log::debug!("World seeded with {} bodies (seed {seed})", catalog.len());
        Self {
            bodies,
            speed_multiplier: 1.0,
        }
    }

    /// Advance every body's orbital and spin angle by `dt_seconds` of
    /// wall-clock time. Total over all real inputs; a zero or negative
    /// delta is a no-op or rewind respectively.
    pub fn tick(&mut self, dt_seconds: f64) {
        let scale = self.speed_multiplier * dt_seconds * REFERENCE_FRAME_RATE;
        for body in &mut self.bodies {
            body.orbital_angle += body.record.orbital_speed * scale;
            body.spin_angle += body.record.spin_speed * scale;
        }
    }

    /// The current user-controlled speed multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Set the speed multiplier. The core applies it unclamped; the input
    /// control owns its own bounds.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
    }

    /// All body states in catalog order.
    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    /// Look up a body state by id.
    pub fn body(&self, id: &str) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_seed(seed: u64) -> World {
        World::new(&Catalog::load_embedded().unwrap(), seed)
    }

    fn angles(world: &World) -> Vec<(f64, f64)> {
        world
            .bodies()
            .iter()
            .map(|b| (b.orbital_angle, b.spin_angle))
            .collect()
    }

    #[test]
    fn test_nominal_frame_advances_by_authored_rate() {
        let mut world = world_with_seed(7);
        let before = world.body("earth").unwrap().orbital_angle;
        world.tick(1.0 / 60.0);
        let after = world.body("earth").unwrap().orbital_angle;
        // The *60 normalization and the 1/60 step cancel exactly.
        assert!(((after - before) - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_tick_is_additive_over_delta_splits() {
        let mut split = world_with_seed(3);
        let mut whole = split.clone();

        split.tick(0.013);
        split.tick(0.021);
        whole.tick(0.034);

        for (a, b) in angles(&split).iter().zip(angles(&whole).iter()) {
            assert!((a.0 - b.0).abs() < 1e-12);
            assert!((a.1 - b.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let mut world = world_with_seed(3);
        let before = angles(&world);
        world.tick(0.0);
        assert_eq!(before, angles(&world));
    }

    #[test]
    fn test_frame_rate_does_not_change_trajectory() {
        let mut at_30hz = world_with_seed(11);
        let mut at_144hz = at_30hz.clone();

        for _ in 0..30 {
            at_30hz.tick(1.0 / 30.0);
        }
        for _ in 0..144 {
            at_144hz.tick(1.0 / 144.0);
        }

        // One second of wall-clock time either way.
        for (a, b) in angles(&at_30hz).iter().zip(angles(&at_144hz).iter()) {
            assert!((a.0 - b.0).abs() < 1e-9, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_speed_multiplier_scales_angle_delta() {
        let mut normal = world_with_seed(5);
        let mut fast = normal.clone();
        fast.set_speed_multiplier(2.5);

        let base = normal.body("mars").unwrap().orbital_angle;
        normal.tick(0.5);
        fast.tick(0.5);

        let d_normal = normal.body("mars").unwrap().orbital_angle - base;
        let d_fast = fast.body("mars").unwrap().orbital_angle - base;
        assert!((d_fast - d_normal * 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_sun_spins_but_never_orbits() {
        let mut world = world_with_seed(9);
        world.tick(10.0);
        let sun = world.body("sun").unwrap();
        assert_eq!(sun.orbital_angle, 0.0);
        assert!(sun.position().length() < 1e-12);
        assert!(sun.spin_angle > 0.0);
    }

    #[test]
    fn test_position_magnitude_invariant_after_ticks() {
        let mut world = world_with_seed(13);
        for _ in 0..500 {
            world.tick(0.016);
        }
        for body in world.bodies() {
            let r = body.position().length();
            assert!(
                (r - body.record.orbital_radius).abs() < 1e-9,
                "{}: |position| = {r}, radius = {}",
                body.record.id,
                body.record.orbital_radius
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_starting_angles() {
        let a = world_with_seed(42);
        let b = world_with_seed(42);
        assert_eq!(angles(&a), angles(&b));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = world_with_seed(1);
        let b = world_with_seed(2);
        let differing = angles(&a)
            .iter()
            .zip(angles(&b).iter())
            .filter(|(x, y)| (x.0 - y.0).abs() > 1e-6)
            .count();
        assert!(differing >= 7, "only {differing} bodies differ");
    }

    #[test]
    fn test_starting_angles_within_full_turn() {
        let world = world_with_seed(77);
        for body in world.bodies() {
            assert!((0.0..std::f64::consts::TAU).contains(&body.orbital_angle));
            assert_eq!(body.spin_angle, 0.0);
        }
    }
}
