//! Xenostrike - a wave-defense space shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, game state)
//! - `tuning`: Data-driven game balance
//! - `starfield`: Fixed-seed decorative background
//! - `error`: Error types for the few fallible entry points

pub mod error;
pub mod sim;
pub mod starfield;
pub mod tuning;

pub use error::{ShootError, TuningError};
pub use tuning::{SpawnMode, Tuning};

use glam::Vec2;

/// Driver timing constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the driver will hand to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Vectors shorter than this have no usable direction
    pub const NORMALIZE_EPSILON: f32 = 1e-3;
}

/// Normalize a vector, returning zero for near-zero input
///
/// Callers treat the zero vector as "no direction".
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < consts::NORMALIZE_EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
