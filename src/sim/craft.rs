//! The player's craft
//!
//! The craft is never removed from the session. It is "dead" once its shield
//! runs dry, which the coordinator checks after collision resolution.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shield::Shield;
use crate::error::ShootError;
use crate::tuning::Tuning;

/// Speed above which the thrusters animate at full rate
const THRUSTER_SPEED_THRESHOLD: f32 = 10.0;
const THRUSTER_RATE_MOVING: f32 = 8.0;
const THRUSTER_RATE_IDLE: f32 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Facing angle in radians, recomputed every update from the aim target
    pub rotation: f32,
    pub shield: Shield,
    pub shoot_cooldown: f32,
    cooldown_duration: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub thruster_phase: f32,
}

impl Craft {
    /// A fresh craft at the playfield center
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.center(),
            vel: Vec2::ZERO,
            radius: tuning.craft_radius,
            rotation: 0.0,
            shield: Shield::new(tuning),
            shoot_cooldown: 0.0,
            cooldown_duration: tuning.shoot_cooldown,
            ammo: tuning.max_ammo,
            max_ammo: tuning.max_ammo,
            thruster_phase: 0.0,
        }
    }

    /// Integrate movement, clamp to the playfield, face the aim target
    pub fn update(&mut self, dt: f32, aim: Vec2, bounds: Vec2) {
        self.pos += self.vel * dt;
        let inset = Vec2::splat(self.radius);
        // Playfields narrower than the craft pin it to the center
        self.pos = self.pos.clamp(inset.min(bounds * 0.5), (bounds - inset).max(bounds * 0.5));

        let to_aim = aim - self.pos;
        self.rotation = to_aim.y.atan2(to_aim.x);

        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }

        self.shield.update(dt);

        let rate = if self.vel.length() > THRUSTER_SPEED_THRESHOLD {
            THRUSTER_RATE_MOVING
        } else {
            THRUSTER_RATE_IDLE
        };
        self.thruster_phase += dt * rate;
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown <= 0.0 && self.ammo > 0
    }

    /// Consume a shot and restart the cooldown
    ///
    /// Refuses rather than firing when [`Craft::can_shoot`] is false, so ammo
    /// never goes below zero.
    pub fn shoot(&mut self) -> Result<(), ShootError> {
        if self.ammo == 0 {
            return Err(ShootError::OutOfAmmo);
        }
        if self.shoot_cooldown > 0.0 {
            return Err(ShootError::OnCooldown);
        }
        self.shoot_cooldown = self.cooldown_duration;
        self.ammo -= 1;
        Ok(())
    }

    pub fn reload(&mut self) {
        self.ammo = self.max_ammo;
    }

    /// Route a hit through the shield, returning bled-through damage
    pub fn take_damage(&mut self, damage: f32) -> f32 {
        self.shield.absorb_damage(damage)
    }

    pub fn is_alive(&self) -> bool {
        !self.shield.is_depleted()
    }

    /// Engine glow brightness (0.2-1.0) for renderers
    pub fn thruster_intensity(&self) -> f32 {
        0.6 + 0.4 * self.thruster_phase.sin()
    }
}
