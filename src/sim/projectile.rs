//! Plasma bolts fired by the craft

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    /// Seconds until the bolt fizzles out
    pub life: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, life: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            active: true,
            life,
        }
    }

    /// Move, and deactivate on expiry or when leaving `[0, bounds]`
    pub fn update(&mut self, dt: f32, bounds: Vec2) {
        self.pos += self.vel * dt;
        self.life -= dt;

        let outside = self.pos.x < 0.0
            || self.pos.x > bounds.x
            || self.pos.y < 0.0
            || self.pos.y > bounds.y;
        if outside || self.life <= 0.0 {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(1200.0, 800.0);

    #[test]
    fn test_expires_after_lifetime() {
        let mut p = Projectile::new(1, Vec2::new(600.0, 400.0), Vec2::ZERO, 6.0, 1.0);
        p.update(0.6, BOUNDS);
        assert!(p.active);
        p.update(0.6, BOUNDS);
        assert!(!p.active);
    }

    #[test]
    fn test_leaves_playfield() {
        let mut p = Projectile::new(1, Vec2::new(1190.0, 400.0), Vec2::new(540.0, 0.0), 6.0, 3.0);
        p.update(0.01, BOUNDS);
        assert!(p.active);
        p.update(0.05, BOUNDS);
        assert!(!p.active);
    }
}
