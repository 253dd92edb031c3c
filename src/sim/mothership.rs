//! Motherships that drop aliens while crossing the playfield
//!
//! A mothership patrols a band near the top of the playfield, wrapping around
//! horizontally, and releases one alien every spawn interval until its payload
//! is empty. Spawning is polled: the coordinator calls
//! [`Mothership::should_spawn`] every frame and creates the alien itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Amplitude of the vertical bob (px/s)
const BOB_SPEED: f32 = 15.0;
/// Bob frequency (rad/s of clock)
const BOB_FREQUENCY: f32 = 2.0;
/// How far past the edges a ship travels before wrapping
const WRAP_MARGIN: f32 = 100.0;
/// Patrol band measured down from the top edge (y grows upward)
const BAND_TOP_INSET: f32 = 40.0;
const BAND_BOTTOM_INSET: f32 = 150.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mothership {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub active: bool,
    pub clock: f32,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    /// Aliens still aboard
    pub remaining: u32,
    speed: f32,
}

impl Mothership {
    pub fn new(id: u32, pos: Vec2, payload: u32, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::new(tuning.mothership_speed, 0.0),
            size: tuning.mothership_size,
            active: true,
            clock: 0.0,
            spawn_timer: 0.0,
            spawn_interval: tuning.mothership_spawn_interval,
            remaining: payload,
            speed: tuning.mothership_speed,
        }
    }

    /// Where a new ship enters: just off the left edge, inside the patrol band
    pub fn entry_position(bounds: Vec2) -> Vec2 {
        Vec2::new(-WRAP_MARGIN, bounds.y - (BAND_TOP_INSET + BAND_BOTTOM_INSET) * 0.5)
    }

    pub fn update(&mut self, dt: f32, bounds: Vec2) {
        self.clock += dt;

        self.vel = Vec2::new(self.speed, (self.clock * BOB_FREQUENCY).sin() * BOB_SPEED);
        self.pos += self.vel * dt;

        if self.pos.x > bounds.x + WRAP_MARGIN {
            self.pos.x = -WRAP_MARGIN;
        }

        let band_low = bounds.y - BAND_BOTTOM_INSET;
        let band_high = bounds.y - BAND_TOP_INSET;
        self.pos.y = self.pos.y.clamp(band_low.min(band_high), band_high);

        if self.remaining > 0 {
            self.spawn_timer += dt;
        }
    }

    /// Release one alien if the timer is up; resets the timer when it does
    pub fn should_spawn(&mut self) -> bool {
        if self.remaining > 0 && self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            self.remaining -= 1;
            return true;
        }
        false
    }

    /// Drop point beneath the hull
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - self.size * 0.8)
    }

    pub fn has_finished_spawning(&self) -> bool {
        self.remaining == 0
    }

    /// Core glow pulse (0.8-1.0) for renderers
    pub fn pulse(&self) -> f32 {
        0.9 + 0.1 * (self.clock * 3.0).sin()
    }
}
