//! Cosmetic particles
//!
//! Particles never feed back into gameplay. They only exist so renderers have
//! something to draw for explosions, muzzle flashes and shield impacts.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::direction_from_angle;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub const MUZZLE_FLASH_COLOR: Color = Color::new(0.3, 0.9, 1.0, 1.0);
pub const SHIELD_IMPACT_COLOR: Color = Color::new(0.2, 0.8, 1.0, 0.8);
pub const DEATH_FIRE_COLOR: Color = Color::new(1.0, 0.3, 0.0, 1.0);
pub const DEATH_PLASMA_COLOR: Color = Color::new(0.2, 0.6, 1.0, 1.0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left to live
    pub life: f32,
    pub max_life: f32,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            color,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Faded alpha for rendering
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).max(0.0) * self.color.a
    }
}

/// Parameters for a radial particle burst
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub count: usize,
    /// Speed range in px/s (min, max)
    pub speed: (f32, f32),
    pub life: f32,
}

pub const ENEMY_EXPLOSION: Burst = Burst {
    count: 12,
    speed: (50.0, 150.0),
    life: 0.6,
};

pub const SHIELD_IMPACT: Burst = Burst {
    count: 15,
    speed: (80.0, 200.0),
    life: 0.4,
};

pub const DEATH_EXPLOSION: Burst = Burst {
    count: 40,
    speed: (100.0, 350.0),
    life: 1.5,
};

pub const MUZZLE_FLASH_COUNT: usize = 5;
pub const MUZZLE_FLASH_SPEED: f32 = 200.0;
pub const MUZZLE_FLASH_LIFE: f32 = 0.2;
/// Half-angle of the muzzle flash cone (radians, 30 degrees)
pub const MUZZLE_FLASH_SPREAD: f32 = std::f32::consts::PI / 6.0;

/// Emit particles flying out in random directions from `pos`
pub fn emit_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    pos: Vec2,
    burst: Burst,
    mut color: impl FnMut(&mut R) -> Color,
) {
    particles.reserve(burst.count);
    for _ in 0..burst.count {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(burst.speed.0..burst.speed.1);
        let tint = color(rng);
        particles.push(Particle::new(
            pos,
            direction_from_angle(angle) * speed,
            burst.life,
            tint,
        ));
    }
}

/// The big two-tone blast when the craft is lost
pub fn emit_death_explosion<R: Rng>(particles: &mut Vec<Particle>, rng: &mut R, pos: Vec2) {
    emit_burst(particles, rng, pos, DEATH_EXPLOSION, |rng| {
        if rng.random_bool(0.5) {
            DEATH_FIRE_COLOR
        } else {
            DEATH_PLASMA_COLOR
        }
    });
}

/// Emit a narrow cone of fast particles along `direction`
pub fn emit_muzzle_flash<R: Rng>(particles: &mut Vec<Particle>, rng: &mut R, pos: Vec2, direction: Vec2) {
    let heading = direction.y.atan2(direction.x);
    for _ in 0..MUZZLE_FLASH_COUNT {
        let angle = heading + rng.random_range(-MUZZLE_FLASH_SPREAD..MUZZLE_FLASH_SPREAD);
        particles.push(Particle::new(
            pos,
            direction_from_angle(angle) * MUZZLE_FLASH_SPEED,
            MUZZLE_FLASH_LIFE,
            MUZZLE_FLASH_COLOR,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_fades_and_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, SHIELD_IMPACT_COLOR);
        assert!((p.alpha() - 0.8).abs() < 1e-6);

        p.update(0.5);
        assert!((p.pos.x - 5.0).abs() < 1e-6);
        assert!((p.alpha() - 0.4).abs() < 1e-6);
        assert!(p.is_alive());

        p.update(0.5);
        assert!(!p.is_alive());
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_burst_speeds_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit_burst(&mut particles, &mut rng, Vec2::ONE, SHIELD_IMPACT, |_| SHIELD_IMPACT_COLOR);

        assert_eq!(particles.len(), SHIELD_IMPACT.count);
        for p in &particles {
            let speed = p.vel.length();
            assert!(speed >= 80.0 - 1e-3 && speed <= 200.0 + 1e-3);
            assert_eq!(p.pos, Vec2::ONE);
            assert_eq!(p.max_life, SHIELD_IMPACT.life);
        }
    }

    #[test]
    fn test_muzzle_flash_follows_aim() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        emit_muzzle_flash(&mut particles, &mut rng, Vec2::ZERO, Vec2::NEG_Y);

        assert_eq!(particles.len(), MUZZLE_FLASH_COUNT);
        for p in &particles {
            // Within 30 degrees of straight down
            assert!(p.vel.normalize().dot(Vec2::NEG_Y) >= MUZZLE_FLASH_SPREAD.cos() - 1e-4);
        }
    }
}
