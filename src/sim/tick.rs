//! Per-frame simulation step
//!
//! Frame order while playing: craft, firing, out-of-ammo check, entity
//! movement, collision response, compaction, wave completion. Dead entities
//! are only flagged during the frame and removed in one pass at the end, so
//! every stage sees the same entity list.

use glam::Vec2;

use super::collision::circle_collision;
use super::particle::{
    ENEMY_EXPLOSION, Particle, SHIELD_IMPACT, SHIELD_IMPACT_COLOR, emit_burst,
    emit_death_explosion, emit_muzzle_flash,
};
use super::projectile::Projectile;
use super::state::{GamePhase, GameState};
use super::wave::update_motherships;
use crate::{direction_from_angle, normalize_or_zero};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired craft velocity (px/s)
    pub move_intent: Vec2,
    /// Aim target in playfield coordinates
    pub aim: Vec2,
    /// Fire held
    pub fire: bool,
    /// Manual reload
    pub reload: bool,
    /// Start/retry from the menu or a game-over screen
    pub restart: bool,
    /// Launch the next wave
    pub start_wave: bool,
}

/// Apply one frame of input, then advance the simulation by `dt`
///
/// `dt` is used as given; clamping long stalls is the driver's job.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.request_restart();
    }
    if input.reload {
        state.request_reload();
    }
    if state.phase == GamePhase::Playing {
        state.set_move_intent(input.move_intent);
    }
    if input.start_wave {
        state.request_wave();
    }

    update(state, dt, input.aim, input.fire);
}

/// Advance the simulation by `dt`
pub fn update(state: &mut GameState, dt: f32, aim: Vec2, fire: bool) {
    state.state_time += dt;

    if state.phase != GamePhase::Playing {
        // Keep the backdrop alive on menu and game-over screens
        for particle in state.particles.iter_mut() {
            particle.update(dt);
        }
        state.particles.retain(Particle::is_alive);
        let target = state.craft.pos;
        for enemy in state.enemies.iter_mut().filter(|e| e.active) {
            enemy.update(dt, target);
        }
        return;
    }

    let bounds = state.tuning.bounds();
    state.craft.update(dt, aim, bounds);

    if fire && state.craft.can_shoot() && state.craft.is_alive() {
        fire_projectile(state, aim);
    }

    check_ammo_exhausted(state);

    for projectile in state.projectiles.iter_mut().filter(|p| p.active) {
        projectile.update(dt, bounds);
    }
    let target = state.craft.pos;
    for enemy in state.enemies.iter_mut().filter(|e| e.active) {
        enemy.update(dt, target);
    }
    for particle in state.particles.iter_mut() {
        particle.update(dt);
    }
    update_motherships(state, dt);

    resolve_projectile_hits(state);
    resolve_craft_contacts(state);

    state.projectiles.retain(|p| p.active);
    state.enemies.retain(|e| e.active);
    state.particles.retain(Particle::is_alive);
    state.motherships.retain(|m| m.active);

    if state.wave_active && state.enemies.is_empty() && state.motherships.is_empty() {
        state.wave_active = false;
        state.score += state.wave as u64 * state.tuning.wave_bonus_per_wave;
        state.craft.reload();
        log::info!("Wave {} complete! Score: {}", state.wave, state.score);
    }
}

/// Spawn a bolt at the craft's edge heading toward `aim`
fn fire_projectile(state: &mut GameState, aim: Vec2) {
    let mut dir = normalize_or_zero(aim - state.craft.pos);
    if dir == Vec2::ZERO {
        dir = direction_from_angle(state.craft.rotation);
    }

    if let Err(e) = state.craft.shoot() {
        log::debug!("Shot refused: {}", e);
        return;
    }

    let muzzle = state.craft.pos + dir * state.craft.radius;
    let id = state.next_entity_id();
    state.projectiles.push(Projectile::new(
        id,
        muzzle,
        dir * state.tuning.projectile_speed,
        state.tuning.projectile_radius,
        state.tuning.projectile_lifetime,
    ));
    emit_muzzle_flash(&mut state.particles, &mut state.rng, muzzle, dir);
}

/// Lose if the magazine is empty, nothing is in flight, and an alien is close
fn check_ammo_exhausted(state: &mut GameState) {
    if state.craft.ammo > 0 || !state.wave_active {
        return;
    }
    if state.projectiles.iter().any(|p| p.active) {
        return;
    }

    let danger = state.tuning.ammo_danger_radius;
    let craft_pos = state.craft.pos;
    let threatened = state
        .enemies
        .iter()
        .filter(|e| e.active)
        .any(|e| e.pos.distance(craft_pos) < danger);

    if threatened {
        state.enter_phase(GamePhase::GameOverAmmo);
        emit_death_explosion(&mut state.particles, &mut state.rng, craft_pos);
        log::info!("GAME OVER - Out of ammo! Final score: {}", state.score);
    }
}

/// Each live bolt hits at most one alien per frame
fn resolve_projectile_hits(state: &mut GameState) {
    let GameState {
        projectiles,
        enemies,
        particles,
        rng,
        tuning,
        score,
        kills,
        ..
    } = state;

    for projectile in projectiles.iter_mut().filter(|p| p.active) {
        for enemy in enemies.iter_mut().filter(|e| e.active) {
            let hit = circle_collision(
                projectile.pos,
                projectile.radius,
                enemy.pos,
                enemy.collision_radius(),
            );
            if !hit.hit {
                continue;
            }

            projectile.active = false;
            enemy.take_damage(tuning.projectile_damage);
            let color = enemy.kind.color();
            emit_burst(particles, rng, hit.point, ENEMY_EXPLOSION, |_| color);

            if !enemy.active {
                *score += tuning.kill_score;
                *kills += 1;
                log::debug!("{:?} #{} destroyed", enemy.kind, enemy.id);
            }
            break;
        }
    }
}

/// Aliens touching the craft drain its shield and are shifted along the
/// reversed contact normal by the overlap depth
fn resolve_craft_contacts(state: &mut GameState) {
    if !state.craft.is_alive() {
        return;
    }

    let can_die = state.phase == GamePhase::Playing;
    let mut died = false;
    {
        let GameState {
            craft,
            enemies,
            particles,
            rng,
            tuning,
            ..
        } = &mut *state;

        for enemy in enemies.iter_mut().filter(|e| e.active) {
            let hit = circle_collision(craft.pos, craft.radius, enemy.pos, enemy.collision_radius());
            if !hit.hit {
                continue;
            }

            let damage = tuning.contact_damage_base + hit.penetration * tuning.contact_damage_per_depth;
            craft.take_damage(damage);
            enemy.pos -= hit.normal * hit.penetration;
            emit_burst(particles, rng, hit.point, SHIELD_IMPACT, |_| SHIELD_IMPACT_COLOR);

            if can_die && !died && !craft.is_alive() {
                died = true;
                emit_death_explosion(particles, rng, craft.pos);
            }
        }
    }

    if died {
        state.enter_phase(GamePhase::GameOverShield);
        log::info!("GAME OVER - Shields failed! Final score: {}", state.score);
    }
}
