//! Fixed timestep simulation tick
//!
//! Advances the game by one clock tick: expire old shots, let aliens fire,
//! move everything, check for a landing, then resolve collisions.

use super::collision::handle_collisions;
use super::entity::Entity;
use super::motion::{move_aliens, move_body, move_ship};
use super::state::GameState;
use crate::consts::*;

/// Split shots into (active, expired) at tick `now`
fn expire(shots: &[Entity], now: u64) -> (Vec<Entity>, Vec<Entity>) {
    shots
        .iter()
        .cloned()
        .partition(|s| s.age(now) <= BULLET_LIFETIME_TICKS)
}

/// Advance the game state to tick `elapsed`
pub fn tick(state: &GameState, elapsed: u64) -> GameState {
    let mut next = state.clone();
    next.tick = elapsed;
    next.removed.clear();

    // Frozen until restart
    if state.game_over {
        return next;
    }

    let (bullets, expired_bullets) = expire(&state.bullets, elapsed);
    let (projectiles, expired_projectiles) = expire(&state.projectiles, elapsed);

    // Every alien consumes one draw, fired or not
    let mut rng = state.rng;
    let mut fired = Vec::new();
    for alien in &state.aliens {
        if rng.draw() < ALIEN_FIRE_RATE {
            let id = next.next_entity_id();
            fired.push(Entity::projectile(id, alien.pos, elapsed));
        }
        rng = rng.next();
    }
    next.rng = rng;

    next.ship = move_ship(&state.ship);
    next.bullets = bullets.iter().map(move_body).collect();
    next.aliens = move_aliens(&state.aliens, state.speed_multiplier);
    next.projectiles = projectiles.iter().chain(fired.iter()).map(move_body).collect();
    next.removed.extend(expired_bullets);
    next.removed.extend(expired_projectiles);

    let landing = next.ship.body.pos.y;
    if next.aliens.iter().any(|a| a.pos.y >= landing) {
        log::info!("Aliens landed at tick {} (score {})", elapsed, next.score);
        next.game_over = true;
    }

    handle_collisions(next)
}
