//! Alien enemies
//!
//! Aliens home in on the craft with a capped-speed steering rule. A freshly
//! spawned alien scales in over a fraction of a second and its collider grows
//! with it, so nothing can be hit (or hit back) the instant it appears.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particle::Color;
use crate::direction_from_angle;
use crate::normalize_or_zero;
use crate::tuning::Tuning;

/// Alien variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Balanced default
    #[default]
    Scout,
    /// Fastest, most fragile
    Hunter,
    /// Slow and tough
    Brute,
}

impl EnemyKind {
    pub fn base_health(&self) -> f32 {
        match self {
            EnemyKind::Scout => 35.0,
            EnemyKind::Hunter => 25.0,
            EnemyKind::Brute => 70.0,
        }
    }

    /// Speed cap as a multiple of the base enemy speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            EnemyKind::Scout => 6.0,
            EnemyKind::Hunter => 8.0,
            EnemyKind::Brute => 5.0,
        }
    }

    pub fn appendage_count(&self) -> usize {
        match self {
            EnemyKind::Brute => 6,
            _ => 4,
        }
    }

    /// Explosion color when hit
    pub fn color(&self) -> Color {
        match self {
            EnemyKind::Scout => Color::new(0.3, 0.9, 0.3, 1.0),
            EnemyKind::Hunter => Color::new(0.9, 0.3, 0.9, 1.0),
            EnemyKind::Brute => Color::new(0.9, 0.2, 0.2, 1.0),
        }
    }
}

/// A wiggling tentacle, purely cosmetic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appendage {
    pub base_angle: f32,
    pub length: f32,
    pub segments: u32,
    pub phase: f32,
}

impl Appendage {
    pub const SEGMENTS: u32 = 4;

    /// Offset of a segment's tip from the alien center at the given clock
    pub fn segment_position(&self, segment: u32, clock: f32) -> Vec2 {
        let t = segment as f32 / self.segments as f32;
        let angle = self.base_angle + (clock * 3.0 + self.phase + t * PI).sin() * 0.3;
        let seg_len = self.length / self.segments as f32;
        direction_from_angle(angle) * seg_len * (segment + 1) as f32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: f32,
    /// Speed cap (px/s)
    pub speed: f32,
    pub acceleration: f32,
    pub active: bool,
    /// Spawn-in progress, 0 on spawn and 1 when fully materialized
    pub spawn_progress: f32,
    spawn_in_rate: f32,
    pub radius: f32,
    pub clock: f32,
    pub appendages: Vec<Appendage>,
}

impl Enemy {
    /// Build an alien of `kind` for a 1-based wave number
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, wave: u32, tuning: &Tuning) -> Self {
        let wave_multiplier = 1.0 + wave.saturating_sub(1) as f32 * tuning.enemy_speed_per_wave;
        let speed = tuning.enemy_base_speed * kind.speed_multiplier() * wave_multiplier;

        let count = kind.appendage_count();
        let appendages = (0..count)
            .map(|i| Appendage {
                base_angle: 2.0 * PI * i as f32 / count as f32 + PI * 0.5,
                length: tuning.enemy_radius * 0.8,
                segments: Appendage::SEGMENTS,
                phase: i as f32 * PI * 0.5,
            })
            .collect();

        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            health: kind.base_health(),
            speed,
            acceleration: tuning.enemy_acceleration,
            active: true,
            spawn_progress: 0.0,
            spawn_in_rate: tuning.enemy_spawn_in_rate,
            radius: tuning.enemy_radius,
            clock: 0.0,
            appendages,
        }
    }

    /// Advance animation and steer toward `target`
    pub fn update(&mut self, dt: f32, target: Vec2) {
        if self.spawn_progress < 1.0 {
            self.spawn_progress = (self.spawn_progress + dt * self.spawn_in_rate).min(1.0);
        }

        self.clock += dt;

        let dir = normalize_or_zero(target - self.pos);
        self.vel += dir * self.acceleration * dt;
        if self.vel.length() > self.speed {
            self.vel = normalize_or_zero(self.vel) * self.speed;
        }
        self.pos += self.vel * dt;
    }

    /// Apply damage; dropping to zero health deactivates for good
    pub fn take_damage(&mut self, damage: f32) {
        self.health -= damage;
        if self.health <= 0.0 {
            self.active = false;
        }
    }

    /// Collider radius, growing with spawn-in progress
    pub fn collision_radius(&self) -> f32 {
        self.radius * self.spawn_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(kind: EnemyKind, wave: u32) -> Enemy {
        Enemy::new(1, kind, Vec2::ZERO, wave, &Tuning::default())
    }

    #[test]
    fn test_kind_stats() {
        let scout = enemy(EnemyKind::Scout, 1);
        let hunter = enemy(EnemyKind::Hunter, 1);
        let brute = enemy(EnemyKind::Brute, 1);

        assert_eq!(scout.health, 35.0);
        assert_eq!(hunter.health, 25.0);
        assert_eq!(brute.health, 70.0);
        assert!(hunter.speed > scout.speed && scout.speed > brute.speed);
        assert!((scout.speed - 21.0).abs() < 1e-4);

        assert_eq!(scout.appendages.len(), 4);
        assert_eq!(hunter.appendages.len(), 4);
        assert_eq!(brute.appendages.len(), 6);
    }

    #[test]
    fn test_later_waves_are_faster() {
        let w1 = enemy(EnemyKind::Scout, 1);
        let w6 = enemy(EnemyKind::Scout, 6);
        assert!((w6.speed - w1.speed * 1.4).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_in_grows_collider() {
        let mut e = enemy(EnemyKind::Scout, 1);
        assert_eq!(e.collision_radius(), 0.0);

        e.update(0.1, Vec2::new(100.0, 0.0));
        assert!(e.collision_radius() > 0.0 && e.collision_radius() < e.radius);

        e.update(1.0, Vec2::new(100.0, 0.0));
        assert_eq!(e.spawn_progress, 1.0);
        assert_eq!(e.collision_radius(), e.radius);
    }

    #[test]
    fn test_steers_toward_target_with_speed_cap() {
        let mut e = enemy(EnemyKind::Hunter, 1);
        for _ in 0..600 {
            e.update(1.0 / 60.0, Vec2::new(10_000.0, 0.0));
            assert!(e.vel.length() <= e.speed + 1e-3);
        }
        assert!(e.pos.x > 0.0);
        assert!(e.pos.y.abs() < 1e-3);
        assert!((e.vel.length() - e.speed).abs() < 1e-3);
    }

    #[test]
    fn test_no_nan_when_on_target() {
        let mut e = enemy(EnemyKind::Scout, 1);
        e.update(0.016, Vec2::ZERO);
        assert!(e.pos.is_finite());
        assert!(e.vel.is_finite());
    }

    #[test]
    fn test_take_damage_deactivates_once() {
        let mut e = enemy(EnemyKind::Hunter, 1);
        e.take_damage(20.0);
        assert!(e.active);
        e.take_damage(20.0);
        assert!(!e.active);
        e.take_damage(20.0);
        assert!(!e.active);
        e.take_damage(-100.0);
        assert!(!e.active);
    }

    #[test]
    fn test_appendage_segments_reach_length() {
        let e = enemy(EnemyKind::Brute, 1);
        let a = &e.appendages[0];
        let tip = a.segment_position(a.segments - 1, 0.0);
        assert!((tip.length() - a.length).abs() < 1e-4);
    }
}
