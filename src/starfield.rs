//! Decorative background stars
//!
//! Uses its own fixed-seed RNG so the backdrop is identical every frame and
//! every run, and never disturbs the gameplay stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Seed for the background layout
pub const STARFIELD_SEED: u64 = 12345;
/// Stars in the stock backdrop
pub const DEFAULT_STAR_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Gray level, 0.3 to ~0.96
    pub brightness: f32,
}

/// Lay out `count` stars across a `bounds`-sized playfield
pub fn generate(bounds: Vec2, count: usize) -> Vec<Star> {
    let mut rng = Pcg32::seed_from_u64(STARFIELD_SEED);
    (0..count)
        .map(|_| {
            let pos = Vec2::new(rng.random_range(0.0..bounds.x), rng.random_range(0.0..bounds.y));
            let brightness = 0.3 + rng.random_range(0..100) as f32 / 150.0;
            Star { pos, brightness }
        })
        .collect()
}
