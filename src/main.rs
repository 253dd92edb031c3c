//! Xenostrike headless driver
//!
//! Stands in for the windowed front end: owns the session and the input
//! state, clamps frame deltas, and lets a simple autopilot play until the
//! run ends or the frame budget is spent. The final result is printed as JSON.
//!
//! Usage: `xenostrike [tuning.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use xenostrike::consts::*;
use xenostrike::sim::{GamePhase, GameState, TickInput, tick};
use xenostrike::{Tuning, normalize_or_zero, starfield};

/// Two minutes of play at 60 Hz
const MAX_FRAMES: u32 = 60 * 120;
/// The autopilot backs away from aliens closer than this
const EVADE_RADIUS: f32 = 220.0;

/// Session plus the input the front end would normally collect
struct Driver {
    state: GameState,
    input: TickInput,
}

impl Driver {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            input: TickInput::default(),
        }
    }

    /// Fill in this frame's input from the current state
    fn autopilot(&mut self) {
        let state = &self.state;
        let mut input = TickInput {
            aim: state.craft.pos + Vec2::X,
            ..Default::default()
        };

        match state.phase {
            GamePhase::Menu => input.restart = true,
            GamePhase::GameOverShield | GamePhase::GameOverAmmo => {}
            GamePhase::Playing => {
                if !state.wave_active {
                    input.start_wave = true;
                }
                if state.craft.ammo == 0 {
                    input.reload = true;
                }

                let craft = state.craft.pos;
                let nearest = state
                    .enemies
                    .iter()
                    .filter(|e| e.active)
                    .min_by(|a, b| {
                        a.pos
                            .distance_squared(craft)
                            .partial_cmp(&b.pos.distance_squared(craft))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                let speed = state.tuning.craft_move_speed;
                if let Some(enemy) = nearest {
                    input.aim = enemy.pos;
                    input.fire = true;
                    if enemy.pos.distance(craft) < EVADE_RADIUS {
                        input.move_intent = normalize_or_zero(craft - enemy.pos) * speed;
                    }
                } else {
                    input.move_intent = normalize_or_zero(state.tuning.center() - craft) * speed * 0.5;
                }
            }
        }

        self.input = input;
    }

    fn step(&mut self, frame_dt: f32) {
        let dt = frame_dt.min(MAX_FRAME_DT);
        self.autopilot();
        tick(&mut self.state, &self.input, dt);
    }
}

fn load_tuning() -> Result<Tuning, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("Loaded tuning from {}", path);
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Xenostrike (headless) starting...");

    let tuning = load_tuning()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Session seed: {}", seed);

    let stars = starfield::generate(tuning.bounds(), starfield::DEFAULT_STAR_COUNT);
    log::debug!("Backdrop: {} stars", stars.len());

    let mut driver = Driver::new(seed, tuning);
    let mut frames = 0;
    while frames < MAX_FRAMES {
        driver.step(SIM_DT);
        frames += 1;
        if driver.state.phase.is_game_over() {
            break;
        }
    }

    let snapshot = driver.state.snapshot();
    log::info!(
        "Run ended after {} frames: {:?}, wave {}, score {}, kills {}",
        frames,
        snapshot.phase,
        snapshot.wave,
        snapshot.score,
        snapshot.kills
    );

    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "phase": snapshot.phase,
        "wave": snapshot.wave,
        "score": snapshot.score,
        "kills": snapshot.kills,
        "shield": snapshot.craft.shield.energy,
        "ammo": snapshot.craft.ammo,
        "enemies_remaining": snapshot.enemies.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
