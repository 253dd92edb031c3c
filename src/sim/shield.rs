//! Regenerating energy shield
//!
//! The shield is the craft's only hit pool. It soaks a fixed fraction of every
//! hit and lets the rest bleed through, and regenerates after a quiet period
//! along a curve that speeds up the emptier it is.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub max_energy: f32,
    pub energy: f32,
    pub regen_rate: f32,
    pub regen_delay: f32,
    pub time_since_hit: f32,
    /// Fraction of incoming damage absorbed by the shield
    pub efficiency: f32,
}

impl Shield {
    /// A fully charged shield
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            max_energy: tuning.shield_max_energy,
            energy: tuning.shield_max_energy,
            regen_rate: tuning.shield_regen_rate,
            regen_delay: tuning.shield_regen_delay,
            time_since_hit: 0.0,
            efficiency: tuning.shield_efficiency,
        }
    }

    /// Advance the regen timer and regenerate if the delay has passed
    pub fn update(&mut self, dt: f32) {
        self.time_since_hit += dt;

        if self.time_since_hit > self.regen_delay && self.energy < self.max_energy {
            let depletion = (self.max_energy - self.energy) / self.max_energy;
            let multiplier = depletion * depletion;
            self.energy += self.regen_rate * dt * (0.5 + multiplier);
            self.energy = self.energy.min(self.max_energy);
        }
    }

    /// Absorb a hit, returning the damage that bled through
    pub fn absorb_damage(&mut self, incoming: f32) -> f32 {
        self.time_since_hit = 0.0;

        let absorbed = incoming * self.efficiency;
        let mut bled = incoming * (1.0 - self.efficiency);

        self.energy -= absorbed;
        if self.energy < 0.0 {
            bled += -self.energy;
            self.energy = 0.0;
        }

        bled
    }

    /// Charge as a fraction of max (0-1)
    pub fn percentage(&self) -> f32 {
        self.energy / self.max_energy
    }

    pub fn is_depleted(&self) -> bool {
        self.energy <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shield() -> Shield {
        Shield::new(&Tuning::default())
    }

    #[test]
    fn test_full_shield_hit() {
        let mut s = shield();
        let bled = s.absorb_damage(20.0);
        assert!((bled - 3.0).abs() < 1e-4);
        assert!((s.energy - 83.0).abs() < 1e-4);
        assert_eq!(s.time_since_hit, 0.0);
    }

    #[test]
    fn test_percentage() {
        let mut s = shield();
        assert_eq!(s.percentage(), 1.0);
        s.energy = 25.0;
        assert!((s.percentage() - 0.25).abs() < 1e-6);
        s.absorb_damage(1000.0);
        assert_eq!(s.percentage(), 0.0);
    }

    #[test]
    fn test_overflow_bleeds_through() {
        let mut s = shield();
        s.energy = 10.0;
        // 40 * 0.85 = 34 absorbed, 24 of it overflows; 40 * 0.15 = 6 bleeds anyway
        let bled = s.absorb_damage(40.0);
        assert_eq!(s.energy, 0.0);
        assert!((bled - 30.0).abs() < 1e-4);
        assert!(s.is_depleted());
    }

    #[test]
    fn test_no_regen_during_delay() {
        let mut s = shield();
        s.absorb_damage(50.0);
        let after_hit = s.energy;
        s.update(1.0);
        s.update(0.9);
        assert_eq!(s.energy, after_hit);
    }

    #[test]
    fn test_regen_from_empty_is_monotonic_and_bounded() {
        let mut s = shield();
        s.energy = 0.0;
        s.time_since_hit = s.regen_delay + 0.1;
        let mut last = s.energy;
        for _ in 0..(60 * 20) {
            s.update(1.0 / 60.0);
            assert!(s.energy >= last);
            assert!(s.energy <= s.max_energy);
            last = s.energy;
        }
        assert!(s.energy > 50.0);
    }

    #[test]
    fn test_regen_faster_when_depleted() {
        let mut low = shield();
        low.energy = 10.0;
        low.time_since_hit = 5.0;
        let mut high = shield();
        high.energy = 90.0;
        high.time_since_hit = 5.0;

        low.update(0.1);
        high.update(0.1);
        assert!(low.energy - 10.0 > high.energy - 90.0);
    }

    proptest! {
        #[test]
        fn update_stays_in_bounds(
            start in 0.0f32..=100.0,
            since in 0.0f32..10.0,
            steps in proptest::collection::vec(0.0f32..0.5, 1..50),
        ) {
            let mut s = shield();
            s.energy = start;
            s.time_since_hit = since;
            for dt in steps {
                s.update(dt);
                prop_assert!(s.energy >= 0.0 && s.energy <= s.max_energy);
            }
        }

        #[test]
        fn absorb_never_negative(start in 0.0f32..=100.0, damage in 0.0f32..500.0) {
            let mut s = shield();
            s.energy = start;
            let bled = s.absorb_damage(damage);
            prop_assert!(bled >= 0.0);
            prop_assert!(s.energy >= 0.0);
        }
    }
}
