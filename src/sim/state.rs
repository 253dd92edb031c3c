//! Game state and session entry points
//!
//! [`GameState`] owns every entity in a session. Presentation code reads it
//! through [`GameState::snapshot`] and only mutates it through the `request_*`
//! and `set_move_intent` entry points (or [`super::tick`]).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::enemy::Enemy;
use super::mothership::Mothership;
use super::particle::Particle;
use super::projectile::Projectile;
use super::wave::start_wave;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first restart
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Shield collapsed
    GameOverShield,
    /// Out of ammo with an alien in striking range
    GameOverAmmo,
}

impl GamePhase {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOverShield | GamePhase::GameOverAmmo)
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the gameplay RNG
    pub seed: u64,
    /// Gameplay RNG: spawn positions, kinds and particle scatter
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Seconds spent in the current phase
    pub state_time: f32,
    /// Current wave (1-based; 0 before the first wave)
    pub wave: u32,
    pub wave_active: bool,
    pub score: u64,
    pub kills: u32,
    pub craft: Craft,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub motherships: Vec<Mothership>,
    /// Next entity ID
    next_id: u32,
}

/// Read-only view handed to renderers and HUDs each frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub state_time: f32,
    pub wave: u32,
    pub wave_active: bool,
    pub score: u64,
    pub kills: u32,
    pub craft: &'a Craft,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Enemy],
    pub particles: &'a [Particle],
    pub motherships: &'a [Mothership],
}

impl GameState {
    /// Create a session in the menu with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session in the menu with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            craft: Craft::new(&tuning),
            tuning,
            phase: GamePhase::Menu,
            state_time: 0.0,
            wave: 0,
            wave_active: false,
            score: 0,
            kills: 0,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            motherships: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a fresh run: new craft, empty field, counters zeroed
    ///
    /// The RNG keeps advancing across runs.
    pub fn reset(&mut self) {
        self.craft = Craft::new(&self.tuning);
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.motherships.clear();
        self.wave = 0;
        self.score = 0;
        self.kills = 0;
        self.wave_active = false;
        self.enter_phase(GamePhase::Playing);
    }

    /// Switch phase and restart the phase timer
    pub(crate) fn enter_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.state_time = 0.0;
    }

    /// Restart from the menu or a game-over screen; ignored mid-game
    pub fn request_restart(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            log::debug!("Restart ignored while playing");
            return false;
        }
        self.reset();
        log::info!("New game started");
        true
    }

    /// Refill the magazine on demand (only while playing)
    pub fn request_reload(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.craft.reload();
        log::debug!("Reloaded ({} rounds)", self.craft.ammo);
        true
    }

    /// Launch the next wave if playing and the field is clear
    pub fn request_wave(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.wave_active {
            log::debug!("Wave request ignored (phase {:?}, wave active {})", self.phase, self.wave_active);
            return false;
        }
        start_wave(self);
        true
    }

    /// Set the craft's velocity from player input
    pub fn set_move_intent(&mut self, vel: Vec2) {
        self.craft.vel = vel;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            state_time: self.state_time,
            wave: self.wave,
            wave_active: self.wave_active,
            score: self.score,
            kills: self.kills,
            craft: &self.craft,
            projectiles: &self.projectiles,
            enemies: &self.enemies,
            particles: &self.particles,
            motherships: &self.motherships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_in_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.wave, 0);
        assert!(!state.wave_active);
        assert!(state.craft.is_alive());
    }

    #[test]
    fn test_restart_only_outside_play() {
        let mut state = GameState::new(1);
        assert!(state.request_restart());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.request_restart());

        state.enter_phase(GamePhase::GameOverAmmo);
        state.score = 500;
        state.craft.ammo = 0;
        assert!(state.request_restart());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.craft.ammo, state.tuning.max_ammo);
    }

    #[test]
    fn test_wave_request_gated() {
        let mut state = GameState::new(1);
        assert!(!state.request_wave());
        assert_eq!(state.wave, 0);

        state.request_restart();
        assert!(state.request_wave());
        assert_eq!(state.wave, 1);
        assert!(!state.request_wave());
        assert_eq!(state.wave, 1);
    }

    #[test]
    fn test_reload_only_while_playing() {
        let mut state = GameState::new(1);
        state.craft.ammo = 3;
        assert!(!state.request_reload());
        assert_eq!(state.craft.ammo, 3);

        state.request_restart();
        state.craft.ammo = 3;
        assert!(state.request_reload());
        assert_eq!(state.craft.ammo, state.tuning.max_ammo);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(3);
        state.request_restart();
        state.request_wave();
        let json = serde_json::to_value(state.snapshot()).expect("snapshot serializes");
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["wave"], 1);
        assert_eq!(json["enemies"].as_array().map(|a| a.len()), Some(5));
    }
}
