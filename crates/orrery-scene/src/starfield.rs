//! Background starfield: deterministic random points in a cube around the
//! system, generated once and uploaded by the renderer as a point cloud.

use bytemuck::{Pod, Zeroable};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// GPU vertex for a single background star.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarVertex {
    /// Position in scene units.
    pub position: [f32; 3],
    /// Brightness in `[0, 1]`.
    pub brightness: f32,
}

/// Generates a deterministic star catalog from a seed.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
    half_extent: f32,
}

impl StarfieldGenerator {
    /// Create a generator placing `star_count` stars in a cube of
    /// `2 * half_extent` per side centered on the origin.
    pub fn new(seed: u64, star_count: u32, half_extent: f32) -> Self {
        Self {
            seed,
            star_count,
            half_extent,
        }
    }

    /// Generate the star vertices. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<StarVertex> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            let position = [
                (rng.random::<f32>() - 0.5) * 2.0 * self.half_extent,
                (rng.random::<f32>() - 0.5) * 2.0 * self.half_extent,
                (rng.random::<f32>() - 0.5) * 2.0 * self.half_extent,
            ];
            // Mostly bright with a dim tail so the backdrop has depth.
            let brightness = 0.4 + rng.random::<f32>() * 0.6;
            stars.push(StarVertex {
                position,
                brightness,
            });
        }

        stars
    }
}
