//! Collision detection and resolution
//!
//! Detection checks the full cross product of every interacting category
//! pair against the post-motion state. Resolution then derives the next state
//! from the detected sets in one step, so an entity hit by several things in
//! the same tick is removed (or a shield shrunk) exactly once.

use std::collections::BTreeSet;

use super::entity::Entity;
use super::state::GameState;
use crate::{shield_floor, speed_multiplier};
use crate::consts::*;

/// Everything that overlapped during one tick, by entity id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Ship touched a projectile or an alien
    pub ship_hit: bool,
    pub bullets: BTreeSet<u64>,
    pub aliens: BTreeSet<u64>,
    pub projectiles: BTreeSet<u64>,
    pub shields: BTreeSet<u64>,
}

impl Collisions {
    pub fn is_empty(&self) -> bool {
        !self.ship_hit
            && self.bullets.is_empty()
            && self.aliens.is_empty()
            && self.projectiles.is_empty()
            && self.shields.is_empty()
    }
}

/// Overlapping pairs from the cross product of two lists
fn overlapping<'a>(
    left: &'a [Entity],
    right: &'a [Entity],
) -> impl Iterator<Item = (&'a Entity, &'a Entity)> + 'a {
    left.iter()
        .flat_map(move |a| right.iter().map(move |b| (a, b)))
        .filter(|(a, b)| a.overlaps(b))
}

/// Detect all overlaps in a state
pub fn detect(state: &GameState) -> Collisions {
    let mut hits = Collisions::default();
    let ship = &state.ship.body;

    hits.ship_hit = state.projectiles.iter().any(|p| ship.overlaps(p))
        || state.aliens.iter().any(|a| ship.overlaps(a));

    for (bullet, alien) in overlapping(&state.bullets, &state.aliens) {
        hits.bullets.insert(bullet.id);
        hits.aliens.insert(alien.id);
    }
    for (projectile, shield) in overlapping(&state.projectiles, &state.shields) {
        hits.projectiles.insert(projectile.id);
        hits.shields.insert(shield.id);
    }
    for (alien, shield) in overlapping(&state.aliens, &state.shields) {
        hits.aliens.insert(alien.id);
        hits.shields.insert(shield.id);
    }
    for (bullet, shield) in overlapping(&state.bullets, &state.shields) {
        hits.bullets.insert(bullet.id);
        hits.shields.insert(shield.id);
    }
    for (bullet, projectile) in overlapping(&state.bullets, &state.projectiles) {
        hits.bullets.insert(bullet.id);
        hits.projectiles.insert(projectile.id);
    }

    hits
}

/// Split a list into (survivors, removed) by id
fn split(list: Vec<Entity>, hit: &BTreeSet<u64>) -> (Vec<Entity>, Vec<Entity>) {
    list.into_iter().partition(|e| !hit.contains(&e.id))
}

/// Detect collisions and derive the resulting state.
///
/// Removals are appended to `state.removed`, which the caller seeds with
/// whatever the tick already removed (expired shots).
pub fn handle_collisions(mut state: GameState) -> GameState {
    let hits = detect(&state);
    if hits.is_empty() {
        state.speed_multiplier = speed_multiplier(state.aliens.len(), state.level);
        return state;
    }

    let (bullets, gone_bullets) = split(std::mem::take(&mut state.bullets), &hits.bullets);
    let (aliens, gone_aliens) = split(std::mem::take(&mut state.aliens), &hits.aliens);
    let (projectiles, gone_projectiles) =
        split(std::mem::take(&mut state.projectiles), &hits.projectiles);
    let (mut shields, hit_shields) = split(std::mem::take(&mut state.shields), &hits.shields);

    // Hit shields are replaced by a smaller fragment, or destroyed once
    // below the tolerance floor
    let floor = shield_floor();
    for shield in &hit_shields {
        let radius = shield.radius * SHIELD_REDUCTION;
        if radius >= floor {
            let id = state.next_entity_id();
            shields.push(Entity::shield(id, shield.pos, radius, state.tick));
        }
    }

    log::trace!(
        "tick {}: {} bullets, {} aliens, {} projectiles, {} shields hit",
        state.tick,
        gone_bullets.len(),
        gone_aliens.len(),
        gone_projectiles.len(),
        hit_shields.len()
    );

    state.score += gone_aliens.len() as u64;
    let remaining = aliens.len();

    state.bullets = bullets;
    state.projectiles = projectiles;
    state.shields = shields;
    state.aliens = aliens;

    if remaining == 0 {
        state.level += 1;
        state.aliens = state.spawn_alien_grid(state.tick);
        log::info!(
            "Wave cleared at tick {}, level {} (score {})",
            state.tick,
            state.level,
            state.score
        );
    }
    state.speed_multiplier = speed_multiplier(remaining, state.level);

    if hits.ship_hit && !state.game_over {
        log::info!("Ship destroyed at tick {} (score {})", state.tick, state.score);
    }
    state.game_over |= hits.ship_hit;

    state.removed.extend(gone_bullets);
    state.removed.extend(gone_aliens);
    state.removed.extend(gone_projectiles);
    state.removed.extend(hit_shields);

    state
}
