//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick only
//! - Seeded generator threaded explicitly through the state
//! - Stable list order (creation order, grid order for aliens)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod motion;
pub mod reduce;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Collisions, detect, handle_collisions};
pub use entity::{Entity, EntityKind, Ship};
pub use motion::{clamp_x, move_aliens, move_body, move_ship};
pub use reduce::{Event, MoveIntent, reduce, run};
pub use rng::Lcg;
pub use state::{DEFAULT_SEED, GameState};
pub use tick::tick;
