//! Fixed-step clock and event merging

use crate::consts::TICK_MILLIS;
use crate::sim::Event;

/// Maximum ticks released per `advance` call to prevent spiral of death
pub const MAX_CATCH_UP: u64 = 8;

/// Fixed-step clock producing `Tick(n)` events
#[derive(Debug, Clone, Default)]
pub struct Clock {
    /// Index of the next tick to emit
    next: u64,
    /// Wall time not yet converted to ticks
    accumulator_ms: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next tick
    pub fn next_tick(&self) -> u64 {
        self.next
    }

    /// Feed elapsed wall time, returning the ticks that became due
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Event> {
        self.accumulator_ms += elapsed_ms;
        let mut due = self.accumulator_ms / TICK_MILLIS;
        if due > MAX_CATCH_UP {
            // Drop the backlog instead of replaying it
            due = MAX_CATCH_UP;
            self.accumulator_ms = 0;
        } else {
            self.accumulator_ms -= due * TICK_MILLIS;
        }
        (0..due).filter_map(|_| self.next()).collect()
    }
}

impl Iterator for Clock {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let tick = self.next;
        self.next += 1;
        Some(Event::Tick(tick))
    }
}

/// Merge ticks with commands stamped by the tick they were issued on.
///
/// A command stamped `t` is delivered after `Tick(t)` and before
/// `Tick(t + 1)`; commands sharing a stamp keep their input order.
/// Commands stamped past the last tick are dropped.
pub fn merge<T>(ticks: T, commands: &[(u64, Event)]) -> Vec<Event>
where
    T: IntoIterator<Item = Event>,
{
    let mut ordered: Vec<(u64, Event)> = commands.to_vec();
    ordered.sort_by_key(|(stamp, _)| *stamp);

    let mut pending = ordered.into_iter().peekable();
    let mut events = Vec::new();
    for tick in ticks {
        let Event::Tick(now) = tick else {
            continue;
        };
        events.push(tick);
        while let Some((_, command)) = pending.next_if(|(stamp, _)| *stamp <= now) {
            events.push(command);
        }
    }
    events
}
