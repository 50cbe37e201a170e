//! Per-tick motion
//!
//! Free bodies drift by their velocity, the ship is clamped to the playfield
//! and the alien formation sweeps side to side, dropping a row each time it
//! reaches an edge.

use super::entity::{Entity, Ship};
use crate::consts::*;

/// Advance a body by its velocity (no clamping)
#[inline]
pub fn move_body(body: &Entity) -> Entity {
    Entity {
        pos: body.pos + body.vel,
        ..body.clone()
    }
}

/// Clamp an x coordinate to the playfield
#[inline]
pub fn clamp_x(x: f32) -> f32 {
    x.clamp(MIN_X, MAX_X)
}

/// Advance the ship horizontally, clamped to the playfield
pub fn move_ship(ship: &Ship) -> Ship {
    let mut moved = ship.clone();
    moved.body.pos.x = clamp_x(ship.body.pos.x + ship.body.vel.x);
    moved
}

/// Advance the alien formation one tick.
///
/// The whole grid shares the first alien's velocity scaled by
/// `speed_multiplier`. When the leading edge has reached a wall the grid
/// reverses, drops a row and steps back the way it came.
pub fn move_aliens(aliens: &[Entity], speed_multiplier: f32) -> Vec<Entity> {
    let vel = aliens
        .first()
        .map(|a| a.vel.x * speed_multiplier)
        .unwrap_or(0.0);

    let extreme = if vel > 0.0 {
        aliens.iter().map(|a| a.pos.x).fold(MIN_X, f32::max)
    } else {
        aliens.iter().map(|a| a.pos.x).fold(MAX_X, f32::min)
    };

    if extreme <= MIN_X || extreme >= MAX_X {
        aliens
            .iter()
            .map(|a| {
                let mut turned = a.clone();
                turned.pos.x -= vel;
                turned.pos.y += ALIEN_ROW_STEP;
                turned.vel.x = -a.vel.x;
                turned
            })
            .collect()
    } else {
        aliens
            .iter()
            .map(|a| {
                let mut moved = a.clone();
                moved.pos.x += vel;
                moved
            })
            .collect()
    }
}
