//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the stock
//! game; a JSON document can override any subset of fields, so a minimal file
//! only names the values it wants to change:
//!
//! ```json
//! { "wave_base_count": 8, "shield_efficiency": 0.9 }
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// How a wave introduces its enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnMode {
    /// All enemies appear at once just outside the playfield edges
    #[default]
    Edge,
    /// A mothership crosses the top of the playfield dropping enemies
    Mothership,
}

/// Runtime-tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Craft ===
    pub craft_radius: f32,
    /// Movement speed the driver assigns for full stick deflection (px/s)
    pub craft_move_speed: f32,
    pub max_ammo: u32,
    /// Seconds between shots
    pub shoot_cooldown: f32,

    // === Shield ===
    pub shield_max_energy: f32,
    /// Energy per second before the depletion curve is applied
    pub shield_regen_rate: f32,
    /// Seconds without a hit before regeneration starts
    pub shield_regen_delay: f32,
    /// Fraction of incoming damage taken by the shield (rest bleeds through)
    pub shield_efficiency: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_lifetime: f32,
    pub projectile_damage: f32,

    // === Enemies ===
    pub enemy_radius: f32,
    /// Base speed unit; each kind caps its speed at a multiple of this
    pub enemy_base_speed: f32,
    pub enemy_acceleration: f32,
    /// Spawn-in progress per second (progress runs 0 to 1)
    pub enemy_spawn_in_rate: f32,
    /// Extra speed multiplier added per wave after the first
    pub enemy_speed_per_wave: f32,

    // === Waves ===
    pub wave_base_count: u32,
    pub wave_count_increment: u32,
    /// Distance outside the playfield edge where enemies appear
    pub spawn_margin: f32,
    /// Hunters can appear once the wave number exceeds this
    pub hunter_after_wave: u32,
    pub hunter_chance: f64,
    /// Brutes can appear once the wave number exceeds this
    pub brute_after_wave: u32,
    pub brute_chance: f64,
    pub spawn_mode: SpawnMode,

    // === Motherships ===
    pub mothership_speed: f32,
    pub mothership_size: f32,
    pub mothership_spawn_interval: f32,

    // === Scoring & damage ===
    pub kill_score: u64,
    pub wave_bonus_per_wave: u64,
    pub contact_damage_base: f32,
    pub contact_damage_per_depth: f32,
    /// An out-of-ammo craft only loses when an enemy is this close
    pub ammo_danger_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: 1200.0,
            playfield_height: 800.0,

            craft_radius: 22.0,
            craft_move_speed: 3.5 * 60.0,
            max_ammo: 30,
            shoot_cooldown: 0.25,

            shield_max_energy: 100.0,
            shield_regen_rate: 15.0,
            shield_regen_delay: 2.0,
            shield_efficiency: 0.85,

            projectile_speed: 9.0 * 60.0,
            projectile_radius: 6.0,
            projectile_lifetime: 3.0,
            projectile_damage: 30.0,

            enemy_radius: 20.0,
            enemy_base_speed: 3.5,
            enemy_acceleration: 120.0,
            enemy_spawn_in_rate: 3.0,
            enemy_speed_per_wave: 0.08,

            wave_base_count: 5,
            wave_count_increment: 2,
            spawn_margin: 50.0,
            hunter_after_wave: 2,
            hunter_chance: 0.35,
            brute_after_wave: 4,
            brute_chance: 0.20,
            spawn_mode: SpawnMode::Edge,

            mothership_speed: 60.0,
            mothership_size: 35.0,
            mothership_spawn_interval: 1.5,

            kill_score: 15,
            wave_bonus_per_wave: 100,
            contact_damage_base: 0.8,
            contact_damage_per_depth: 0.1,
            ammo_danger_radius: 150.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("craft_radius", self.craft_radius),
            ("shield_max_energy", self.shield_max_energy),
            ("projectile_radius", self.projectile_radius),
            ("projectile_lifetime", self.projectile_lifetime),
            ("enemy_radius", self.enemy_radius),
            ("enemy_spawn_in_rate", self.enemy_spawn_in_rate),
            ("mothership_spawn_interval", self.mothership_spawn_interval),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::OutOfRange {
                    name,
                    value,
                    expected: "> 0",
                });
            }
        }

        let non_negative = [
            ("shield_regen_rate", self.shield_regen_rate),
            ("shield_regen_delay", self.shield_regen_delay),
            ("shoot_cooldown", self.shoot_cooldown),
            ("projectile_damage", self.projectile_damage),
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_acceleration", self.enemy_acceleration),
            ("enemy_speed_per_wave", self.enemy_speed_per_wave),
            ("spawn_margin", self.spawn_margin),
            ("contact_damage_base", self.contact_damage_base),
            ("contact_damage_per_depth", self.contact_damage_per_depth),
            ("ammo_danger_radius", self.ammo_danger_radius),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::OutOfRange {
                    name,
                    value,
                    expected: ">= 0",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.shield_efficiency) {
            return Err(TuningError::OutOfRange {
                name: "shield_efficiency",
                value: self.shield_efficiency,
                expected: "0.0 ..= 1.0",
            });
        }

        // Checked at full precision; these feed `random_bool` directly
        let chances = [
            ("hunter_chance", self.hunter_chance),
            ("brute_chance", self.brute_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(TuningError::OutOfRange {
                    name,
                    value: value as f32,
                    expected: "0.0 ..= 1.0",
                });
            }
        }

        if self.max_ammo == 0 {
            return Err(TuningError::OutOfRange {
                name: "max_ammo",
                value: 0.0,
                expected: ">= 1",
            });
        }

        Ok(())
    }

    /// Playfield size as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Playfield center, where the craft starts
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds() * 0.5
    }

    /// Enemy count for a 1-based wave number
    pub fn wave_enemy_count(&self, wave: u32) -> u32 {
        wave.saturating_sub(1)
            .saturating_mul(self.wave_count_increment)
            .saturating_add(self.wave_base_count)
    }
}
