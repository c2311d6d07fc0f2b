//! Counters that persist across duels.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Games played and wins per player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_games_played: u32,
    pub wins: PlayerMap<u32>,
}

impl Stats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished duel.
    pub fn record(&mut self, result: GameResult) {
        self.total_games_played += 1;
        self.wins[result.winner()] += 1;
    }

    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }
}
