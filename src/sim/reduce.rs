//! Event reducer
//!
//! The game is a left fold of events over [`GameState`]. Clock ticks and
//! player commands share one closed event type so every variant is handled
//! by an exhaustive match.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::motion::clamp_x;
use super::state::GameState;
use super::tick::tick;
use crate::ship_speed;

/// Horizontal steering command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveIntent {
    StartLeft,
    StartRight,
    StopLeft,
    StopRight,
}

/// Everything that can happen to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Clock tick carrying the new tick index
    Tick(u64),
    Move(MoveIntent),
    Shoot,
    Restart,
}

/// Apply one event, producing the next state
pub fn reduce(state: &GameState, event: Event) -> GameState {
    match event {
        Event::Tick(elapsed) => tick(state, elapsed),
        Event::Move(intent) => steer(state, intent),
        Event::Shoot => shoot(state),
        Event::Restart => {
            log::info!("Restart at tick {} (score {})", state.tick, state.score);
            state.restarted()
        }
    }
}

/// Fold a sequence of events, yielding every intermediate state
pub fn run<I>(initial: GameState, events: I) -> impl Iterator<Item = GameState>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().scan(initial, |state, event| {
        *state = reduce(state, event);
        Some(state.clone())
    })
}

fn steer(state: &GameState, intent: MoveIntent) -> GameState {
    let mut next = state.clone();
    next.removed.clear();

    let ship = &mut next.ship;
    match intent {
        MoveIntent::StartLeft => ship.moving_left = true,
        MoveIntent::StartRight => ship.moving_right = true,
        MoveIntent::StopLeft => ship.moving_left = false,
        MoveIntent::StopRight => ship.moving_right = false,
    }
    ship.body.vel.x = ship.steering_velocity(ship_speed(state.level));

    if !state.game_over {
        ship.body.pos.x = clamp_x(ship.body.pos.x + ship.body.vel.x);
    }
    next
}

fn shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.removed.clear();

    if state.game_over {
        return next;
    }

    let id = next.next_entity_id();
    let bullet = Entity::bullet(id, next.ship.body.pos, state.tick);
    next.bullets.push(bullet);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::EntityKind;
    use glam::Vec2;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn kill_everything(state: &mut GameState) {
        // Place one bullet where each alien will be after this tick's sweep
        let sweep = Vec2::new(ALIEN_VELOCITY * state.speed_multiplier, 0.0);
        let targets: Vec<Vec2> = state.aliens.iter().map(|a| a.pos + sweep).collect();
        for pos in targets {
            let id = state.next_entity_id();
            state
                .bullets
                .push(Entity::bullet(id, pos - Vec2::new(0.0, BULLET_VELOCITY), state.tick));
        }
    }

    #[test]
    fn test_scenario_initial_state() {
        let state = GameState::default();
        assert_eq!(state.aliens.len(), 28);
        assert_eq!(state.shields.len(), 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(!state.game_over);
    }

    #[test]
    fn test_scenario_shot_hits_alien() {
        let mut state = GameState::new(1);
        // Park an alien where the next bullet will be after one tick
        let target = state.ship.body.pos + Vec2::new(-ALIEN_VELOCITY, BULLET_VELOCITY);
        state.aliens[10].pos = target;
        let alien_id = state.aliens[10].id;

        let fired = reduce(&state, Event::Shoot);
        assert_eq!(fired.bullets.len(), 1);
        let bullet_id = fired.bullets[0].id;

        let next = reduce(&fired, Event::Tick(1));
        assert_eq!(next.score, 1);
        assert!(next.bullets.is_empty());
        assert!(!next.aliens.iter().any(|a| a.id == alien_id));
        assert!(next.removed.iter().any(|e| e.kind == EntityKind::Bullet && e.id == bullet_id));
        assert!(next.removed.iter().any(|e| e.kind == EntityKind::Alien && e.id == alien_id));
        // Bullets leave from inside the ship, so an alien that close also rams it
        assert!(next.game_over);
    }

    #[test]
    fn test_scenario_wave_cleared() {
        let mut state = GameState::new(1);
        kill_everything(&mut state);
        let old_ids: HashSet<u64> = state.aliens.iter().map(|a| a.id).collect();

        let next = reduce(&state, Event::Tick(1));
        assert_eq!(next.level, 2);
        assert_eq!(next.score, 28);
        assert_eq!(next.aliens.len(), 28);
        assert!(next.aliens.iter().all(|a| !old_ids.contains(&a.id)));
        assert_eq!(next.aliens, {
            let mut fresh = GameState::new(1);
            fresh.entity_counter = next.aliens[0].id;
            fresh.spawn_alien_grid(1)
        });
        assert!(!next.game_over);
    }

    #[test]
    fn test_scenario_shield_tolerance() {
        let mut state = GameState::new(1);
        let at = state.shields[0].pos;
        let mut radii = Vec::new();

        for t in 1..=5 {
            let id = state.next_entity_id();
            state
                .projectiles
                .push(Entity::projectile(id, at - Vec2::new(0.0, PROJECTILE_VELOCITY), state.tick));
            state = reduce(&state, Event::Tick(t));
            if let Some(shield) = state.shields.iter().find(|s| s.pos == at) {
                radii.push(shield.radius);
            }
        }

        assert_eq!(radii, vec![22.5, 16.875, 12.65625, 9.492_187_5]);
        assert!(!state.shields.iter().any(|s| s.pos == at));
        assert_eq!(state.shields.len(), 4);
    }

    #[test]
    fn test_scenario_restart() {
        let events = [
            Event::Move(MoveIntent::StartLeft),
            Event::Tick(1),
            Event::Shoot,
            Event::Tick(2),
            Event::Shoot,
            Event::Tick(3),
        ];
        let before = run(GameState::new(8), events).last().unwrap();
        assert!(!before.bullets.is_empty());

        let after = reduce(&before, Event::Restart);
        let mut expected = GameState::new(8);
        expected.removed = before.live_entities().cloned().collect();
        assert_eq!(after, expected);
        assert_eq!(after.removed.len(), before.live_entities().count());
    }

    #[test]
    fn test_restart_ids_overlap_only_the_new_game() {
        // A restarted game reuses the starting ids, so its removal list names
        // entities that share ids with the fresh grid and shields
        let mut state = GameState::new(2);
        for t in 1..=3 {
            state = reduce(&state, Event::Shoot);
            state = reduce(&state, Event::Tick(t));
        }
        let after = reduce(&state, Event::Restart);

        let fresh_ids: HashSet<u64> = GameState::new(2).live_entities().map(|e| e.id).collect();
        let reused: Vec<&Entity> = after
            .removed
            .iter()
            .filter(|gone| after.live_entities().any(|e| e.same(gone)))
            .collect();
        assert!(!reused.is_empty());
        assert!(reused.iter().all(|e| fresh_ids.contains(&e.id)));
        // Shots fired in the discarded game never collide with the new one
        assert!(after
            .removed
            .iter()
            .filter(|e| e.kind == EntityKind::Bullet)
            .all(|b| !after.live_entities().any(|e| e.same(b))));
        assert!(after.removed.iter().all(|e| e.id < state.entity_counter));
    }

    #[test]
    fn test_move_priority() {
        let state = GameState::new(1);
        let speed = ship_speed(1);
        let x = state.ship.body.pos.x;

        let left = reduce(&state, Event::Move(MoveIntent::StartLeft));
        assert_eq!(left.ship.body.vel.x, -speed);
        assert_eq!(left.ship.body.pos.x, x - speed);

        let both = reduce(&left, Event::Move(MoveIntent::StartRight));
        assert_eq!(both.ship.body.vel.x, 0.0);

        let right = reduce(&both, Event::Move(MoveIntent::StopLeft));
        assert_eq!(right.ship.body.vel.x, speed);

        let stopped = reduce(&right, Event::Move(MoveIntent::StopRight));
        assert_eq!(stopped.ship.body.vel.x, 0.0);
        assert!(!stopped.ship.moving_left && !stopped.ship.moving_right);
    }

    #[test]
    fn test_ship_speed_grows_with_level() {
        let mut state = GameState::new(1);
        state.level = 4;
        let next = reduce(&state, Event::Move(MoveIntent::StartRight));
        assert_eq!(next.ship.body.vel.x, SHIP_VELOCITY + 20f32.sqrt());
    }

    #[test]
    fn test_game_over_freezes_ship_and_shots() {
        let mut state = GameState::new(1);
        state.game_over = true;
        let moved = reduce(&state, Event::Move(MoveIntent::StartRight));
        assert_eq!(moved.ship.body.pos, state.ship.body.pos);
        assert!(moved.ship.moving_right);
        let shot = reduce(&moved, Event::Shoot);
        assert!(shot.bullets.is_empty());
        assert_eq!(shot.entity_counter, state.entity_counter);
    }

    #[test]
    fn test_shoot_allocates_fresh_ids() {
        let state = GameState::new(1);
        let once = reduce(&state, Event::Shoot);
        let twice = reduce(&once, Event::Shoot);
        assert_eq!(twice.bullets.len(), 2);
        assert_ne!(twice.bullets[0].id, twice.bullets[1].id);
        assert_eq!(twice.entity_counter, state.entity_counter + 2);
        assert_eq!(twice.bullets[1].pos, state.ship.body.pos);
    }

    #[test]
    fn test_determinism() {
        let events: Vec<Event> = (1..=600u64)
            .flat_map(|t| {
                let mut batch = vec![Event::Tick(t)];
                match t % 50 {
                    0 => batch.push(Event::Shoot),
                    10 => batch.push(Event::Move(MoveIntent::StartLeft)),
                    30 => batch.push(Event::Move(MoveIntent::StopLeft)),
                    _ => {}
                }
                batch
            })
            .collect();

        let first: Vec<GameState> = run(GameState::new(4242), events.clone()).collect();
        let second: Vec<GameState> = run(GameState::new(4242), events).collect();
        assert_eq!(first, second);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Tick,
        Move(MoveIntent),
        Shoot,
        Restart,
    }

    fn op() -> impl Strategy<Value = Op> {
        let intent = prop_oneof![
            Just(MoveIntent::StartLeft),
            Just(MoveIntent::StartRight),
            Just(MoveIntent::StopLeft),
            Just(MoveIntent::StopRight),
        ];
        prop_oneof![
            6 => Just(Op::Tick),
            3 => intent.prop_map(Op::Move),
            2 => Just(Op::Shoot),
            1 => Just(Op::Restart),
        ]
    }

    fn events(ops: &[Op]) -> Vec<Event> {
        let mut clock = 0;
        ops.iter()
            .map(|op| match *op {
                Op::Tick => {
                    clock += 1;
                    Event::Tick(clock)
                }
                Op::Move(intent) => Event::Move(intent),
                Op::Shoot => Event::Shoot,
                Op::Restart => Event::Restart,
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold(seed in any::<u32>(), ops in proptest::collection::vec(op(), 1..300)) {
            let mut state = GameState::new(seed);
            let floor = crate::shield_floor();
            for event in events(&ops) {
                let next = reduce(&state, event);

                prop_assert!((MIN_X..=MAX_X).contains(&next.ship.body.pos.x));

                let mut seen = HashSet::new();
                for entity in next.all_entities() {
                    prop_assert!(seen.insert(entity.id), "duplicate id {}", entity.id);
                    prop_assert!(entity.id < next.entity_counter);
                }

                for shield in &next.shields {
                    prop_assert!(shield.radius <= SHIELD_START_RADIUS);
                    prop_assert!(shield.radius >= floor);
                }

                if event != Event::Restart {
                    for gone in &next.removed {
                        prop_assert!(!next.live_entities().any(|e| e.same(gone)));
                    }
                    prop_assert!(next.entity_counter >= state.entity_counter);
                    prop_assert!(next.score >= state.score);
                }

                state = next;
            }
        }
    }
}
