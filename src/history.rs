//! Finished games of a session, in the order they ended

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// One game that reached game over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based position of the game within the session
    pub game: u32,
    pub score: u64,
    pub level: u32,
    /// Tick the ship was destroyed on
    pub ended_at: u64,
}

/// Append-only log of finished games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    games: Vec<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the game that just ended in `state`
    pub fn record(&mut self, state: &GameState) -> &GameRecord {
        let game = self.games.len() as u32 + 1;
        self.games.push(GameRecord {
            game,
            score: state.score,
            level: state.level,
            ended_at: state.tick,
        });
        &self.games[self.games.len() - 1]
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Highest-scoring game; the earlier game wins a tie
    pub fn best(&self) -> Option<&GameRecord> {
        self.games
            .iter()
            .fold(None, |best: Option<&GameRecord>, g| match best {
                Some(b) if b.score >= g.score => Some(b),
                _ => Some(g),
            })
    }

    /// Aliens destroyed across every finished game
    pub fn total_score(&self) -> u64 {
        self.games.iter().map(|g| g.score).sum()
    }
}
