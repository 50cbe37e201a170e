//! Demo mode - a seeded autopilot plays the game
//!
//! The autopilot only reads game states and emits ordinary commands, so a
//! demo run is replayed exactly by feeding the same seed and clock.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Entity, Event, GameState, MoveIntent};

/// Minimum ticks between autopilot shots
pub const FIRE_COOLDOWN_TICKS: u32 = 12;
/// Horizontal distance within which the ship counts as lined up
const AIM_TOLERANCE: f32 = 6.0;

/// Which arrow key the autopilot is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    None,
    Left,
    Right,
}

/// Scripted player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: Held,
    cooldown: u32,
    /// Random aim offset, refreshed after every shot
    aim_offset: f32,
    auto_restart: bool,
}

impl Autopilot {
    pub fn new(seed: u64, auto_restart: bool) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: Held::None,
            cooldown: 0,
            aim_offset: 0.0,
            auto_restart,
        }
    }

    /// Commands to issue after observing `state`
    pub fn decide(&mut self, state: &GameState) -> Vec<Event> {
        let mut commands = Vec::new();
        self.cooldown = self.cooldown.saturating_sub(1);

        if state.game_over {
            if self.auto_restart {
                self.held = Held::None;
                self.cooldown = 0;
                commands.push(Event::Restart);
            }
            return commands;
        }

        let ship_x = state.ship.body.pos.x;
        let Some(target) = lowest_nearest(&state.aliens, ship_x) else {
            self.steer(Held::None, &mut commands);
            return commands;
        };

        let dx = target.pos.x + self.aim_offset - ship_x;
        let wanted = if dx < -AIM_TOLERANCE {
            Held::Left
        } else if dx > AIM_TOLERANCE {
            Held::Right
        } else {
            Held::None
        };
        self.steer(wanted, &mut commands);

        if self.cooldown == 0 && dx.abs() <= AIM_TOLERANCE * 2.0 && self.rng.random_bool(0.6) {
            commands.push(Event::Shoot);
            self.cooldown = FIRE_COOLDOWN_TICKS;
            self.aim_offset = self.rng.random_range(-8.0..8.0);
        }

        commands
    }

    /// Release the held key and press the wanted one
    fn steer(&mut self, wanted: Held, commands: &mut Vec<Event>) {
        if wanted == self.held {
            return;
        }
        match self.held {
            Held::Left => commands.push(Event::Move(MoveIntent::StopLeft)),
            Held::Right => commands.push(Event::Move(MoveIntent::StopRight)),
            Held::None => {}
        }
        match wanted {
            Held::Left => commands.push(Event::Move(MoveIntent::StartLeft)),
            Held::Right => commands.push(Event::Move(MoveIntent::StartRight)),
            Held::None => {}
        }
        self.held = wanted;
    }
}

/// Alien in the lowest row closest to `x`
fn lowest_nearest(aliens: &[Entity], x: f32) -> Option<&Entity> {
    let lowest = aliens.iter().map(|a| a.pos.y).fold(f32::MIN, f32::max);
    aliens
        .iter()
        .filter(|a| a.pos.y >= lowest - 1.0)
        .min_by(|a, b| {
            (a.pos.x - x)
                .abs()
                .partial_cmp(&(b.pos.x - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
