//! Wave orchestration
//!
//! Waves normally drop all their aliens at once just outside a random
//! playfield edge. With [`SpawnMode::Mothership`] a single mothership carries
//! the wave instead and releases it over time.

use glam::Vec2;
use rand::Rng;

use super::enemy::{Enemy, EnemyKind};
use super::mothership::Mothership;
use super::state::GameState;
use crate::tuning::{SpawnMode, Tuning};

/// Begin the next wave
pub fn start_wave(state: &mut GameState) {
    state.wave += 1;
    state.wave_active = true;
    let count = state.tuning.wave_enemy_count(state.wave);

    log::info!("Wave {} - {} aliens incoming!", state.wave, count);

    match state.tuning.spawn_mode {
        SpawnMode::Edge => {
            for _ in 0..count {
                let pos = edge_spawn_position(&mut state.rng, &state.tuning);
                spawn_enemy(state, pos);
            }
        }
        SpawnMode::Mothership => {
            let id = state.next_entity_id();
            let pos = Mothership::entry_position(state.tuning.bounds());
            state
                .motherships
                .push(Mothership::new(id, pos, count, &state.tuning));
        }
    }
}

/// Create one alien of a rolled kind for the current wave
pub fn spawn_enemy(state: &mut GameState, pos: Vec2) {
    let kind = roll_enemy_kind(&mut state.rng, state.wave, &state.tuning);
    let id = state.next_entity_id();
    log::debug!("Spawned {:?} #{} at ({:.0}, {:.0})", kind, id, pos.x, pos.y);
    state
        .enemies
        .push(Enemy::new(id, kind, pos, state.wave, &state.tuning));
}

/// A point just outside one of the four playfield edges
pub fn edge_spawn_position<R: Rng>(rng: &mut R, tuning: &Tuning) -> Vec2 {
    let (w, h) = (tuning.playfield_width, tuning.playfield_height);
    let margin = tuning.spawn_margin;
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..w), -margin),
        1 => Vec2::new(rng.random_range(0.0..w), h + margin),
        2 => Vec2::new(-margin, rng.random_range(0.0..h)),
        _ => Vec2::new(w + margin, rng.random_range(0.0..h)),
    }
}

/// Pick an alien kind; tougher kinds unlock in later waves
///
/// The Brute roll happens after (and can override) the Hunter roll.
pub fn roll_enemy_kind<R: Rng>(rng: &mut R, wave: u32, tuning: &Tuning) -> EnemyKind {
    let mut kind = EnemyKind::Scout;
    if wave > tuning.hunter_after_wave && rng.random_bool(tuning.hunter_chance) {
        kind = EnemyKind::Hunter;
    }
    if wave > tuning.brute_after_wave && rng.random_bool(tuning.brute_chance) {
        kind = EnemyKind::Brute;
    }
    kind
}

/// Move motherships, release due aliens, retire empty ships
pub fn update_motherships(state: &mut GameState, dt: f32) {
    let bounds = state.tuning.bounds();
    let mut drops = Vec::new();

    for ship in state.motherships.iter_mut().filter(|m| m.active) {
        ship.update(dt, bounds);
        if ship.should_spawn() {
            drops.push(ship.spawn_position());
        }
        if ship.has_finished_spawning() {
            ship.active = false;
        }
    }

    for pos in drops {
        spawn_enemy(state, pos);
    }
}
