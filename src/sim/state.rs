//! Game state and the initial/restart builder
//!
//! A `GameState` is a value: transitions build a new one instead of editing
//! the previous state in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Ship};
use super::rng::Lcg;
use crate::consts::*;
use crate::speed_multiplier;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u32 = 1;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the run started from (restart rebuilds from it)
    pub seed: u32,
    /// Last tick index applied
    pub tick: u64,
    /// Generator for the next alien fire decision
    pub rng: Lcg,
    pub ship: Ship,
    /// Player bullets (creation order)
    pub bullets: Vec<Entity>,
    /// Alien formation (grid order)
    pub aliens: Vec<Entity>,
    /// Alien projectiles (creation order)
    pub projectiles: Vec<Entity>,
    pub shields: Vec<Entity>,
    /// Entities removed by the event that produced this state
    pub removed: Vec<Entity>,
    /// Next entity id
    pub entity_counter: u64,
    /// Alien formation speed factor
    pub speed_multiplier: f32,
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
}

impl GameState {
    /// Starting configuration for a seed: ship, 7x4 alien grid, shield row
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            seed,
            tick: 0,
            rng: Lcg::new(seed),
            ship: Ship::new(0),
            bullets: Vec::new(),
            aliens: Vec::new(),
            projectiles: Vec::new(),
            shields: Vec::new(),
            removed: Vec::new(),
            entity_counter: 0,
            speed_multiplier: speed_multiplier(ALIEN_COUNT, 1),
            score: 0,
            level: 1,
            game_over: false,
        };

        state.ship = Ship::new(state.next_entity_id());
        state.aliens = state.spawn_alien_grid(0);
        state.shields = state.spawn_shields();

        state
    }

    /// Fresh state for the same seed, flushing every live non-ship entity
    /// of `self` into the removal list
    pub fn restarted(&self) -> Self {
        let mut fresh = Self::new(self.seed);
        fresh.removed = self.live_entities().cloned().collect();
        fresh
    }

    /// Allocate a new entity ID.
    ///
    /// The counter is 64-bit; a game would have to run for billions of years
    /// of ticks before it wraps.
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.entity_counter;
        self.entity_counter += 1;
        id
    }

    /// Full alien grid at its starting formation with fresh ids
    pub fn spawn_alien_grid(&mut self, created_at: u64) -> Vec<Entity> {
        (0..ALIEN_COUNT)
            .map(|i| {
                let col = (i % ALIEN_COLUMNS) as f32;
                let row = (i / ALIEN_COLUMNS) as f32;
                let pos = Vec2::new(
                    col * ALIEN_SPACING + ALIEN_GRID_LEFT,
                    row * ALIEN_SPACING + ALIEN_GRID_TOP,
                );
                Entity::alien(self.next_entity_id(), pos, created_at)
            })
            .collect()
    }

    fn spawn_shields(&mut self) -> Vec<Entity> {
        (0..SHIELD_COUNT)
            .map(|i| {
                let pos = Vec2::new((i + 1) as f32 * SHIELD_SPACING, SHIELD_Y);
                Entity::shield(self.next_entity_id(), pos, SHIELD_START_RADIUS, 0)
            })
            .collect()
    }

    /// Every live entity except the ship, in list order
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        self.bullets
            .iter()
            .chain(self.projectiles.iter())
            .chain(self.shields.iter())
            .chain(self.aliens.iter())
    }

    /// Every live entity including the ship
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.ship.body).chain(self.live_entities())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(7);
        assert_eq!(state.aliens.len(), 28);
        assert_eq!(state.shields.len(), 5);
        assert!(state.bullets.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.removed.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(!state.game_over);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.ship.body.pos, Vec2::new(300.0, 550.0));
    }

    #[test]
    fn test_alien_grid_layout() {
        let state = GameState::default();
        let xs: HashSet<i32> = state.aliens.iter().map(|a| a.pos.x as i32).collect();
        let ys: HashSet<i32> = state.aliens.iter().map(|a| a.pos.y as i32).collect();
        assert_eq!(xs.len(), 7);
        assert_eq!(ys.len(), 4);
        assert_eq!(state.aliens[0].pos, Vec2::new(160.0, 60.0));
        assert_eq!(state.aliens[27].pos, Vec2::new(400.0, 180.0));
    }

    #[test]
    fn test_shield_row() {
        let state = GameState::default();
        let xs: Vec<f32> = state.shields.iter().map(|s| s.pos.x).collect();
        assert_eq!(xs, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
        assert!(state.shields.iter().all(|s| s.radius == SHIELD_START_RADIUS));
    }

    #[test]
    fn test_ids_unique_and_counter_ahead() {
        let state = GameState::default();
        let ids: HashSet<u64> = state.all_entities().map(|e| e.id).collect();
        assert_eq!(ids.len(), 1 + 28 + 5);
        assert!(ids.iter().all(|&id| id < state.entity_counter));
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut state = GameState::new(1);
        state.entity_counter = u32::MAX as u64;
        let first = state.next_entity_id();
        let second = state.next_entity_id();
        assert_eq!(first, u32::MAX as u64);
        assert_eq!(second, u32::MAX as u64 + 1);
        assert_eq!(state.entity_counter, u32::MAX as u64 + 2);
    }

    #[test]
    fn test_restarted_flushes_live_entities() {
        let mut state = GameState::new(3);
        state.score = 12;
        state.aliens.truncate(10);
        let restarted = state.restarted();
        assert_eq!(restarted.removed.len(), 10 + 5);
        let mut expected = GameState::new(3);
        expected.removed = restarted.removed.clone();
        assert_eq!(restarted, expected);
    }
}
