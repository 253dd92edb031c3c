//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame delta only (the driver clamps it)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod craft;
pub mod enemy;
pub mod mothership;
pub mod particle;
pub mod projectile;
pub mod shield;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{CollisionResult, circle_collision};
pub use craft::Craft;
pub use enemy::{Appendage, Enemy, EnemyKind};
pub use mothership::Mothership;
pub use particle::{Color, Particle};
pub use projectile::Projectile;
pub use shield::Shield;
pub use state::{GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick, update};
pub use wave::start_wave;
