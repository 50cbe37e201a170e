//! A play session: the current game plus everything that outlives a restart

use serde::Serialize;

use crate::history::History;
use crate::sim::{Event, GameState, reduce};

/// Summary of a session (printed by the runner)
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub events: u64,
    pub ticks: u64,
    pub games_finished: u32,
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
    /// Aliens destroyed across finished games
    pub total_score: u64,
    pub history: History,
}

/// Folds events into the current game and records finished games
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    history: History,
    events: u64,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(seed),
            history: History::new(),
            events: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn games_finished(&self) -> u32 {
        self.history.len() as u32
    }

    /// Apply one event and return the new state
    pub fn apply(&mut self, event: Event) -> &GameState {
        let was_over = self.state.game_over;
        self.state = reduce(&self.state, event);
        self.events += 1;

        if self.state.game_over && !was_over {
            let record = self.history.record(&self.state);
            log::info!(
                "Game {} over: score {} at level {}",
                record.game,
                record.score,
                record.level
            );
        }
        log::debug!("{:?} -> tick {}", event, self.state.tick);

        &self.state
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.state.seed,
            events: self.events,
            ticks: self.state.tick,
            games_finished: self.games_finished(),
            score: self.state.score,
            level: self.state.level,
            game_over: self.state.game_over,
            total_score: self.history.total_score(),
            history: self.history.clone(),
        }
    }
}
