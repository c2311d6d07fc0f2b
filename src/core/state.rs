//! Duel state.
//!
//! ## PlayerState
//!
//! What one duelist owns: deck, hand, hero and mana pool.
//!
//! ## DuelState
//!
//! Everything a single duel needs:
//! - Configuration (fixed for the duel)
//! - Board
//! - Both players
//! - Turn/round progression
//!
//! Counters that outlive a duel (games played, wins) live in the session's
//! `Stats`, not here.

use serde::{Deserialize, Serialize};

use super::config::{DuelConfig, RowAffinity};
use super::phase::TurnState;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Creature, Hero};
use crate::zones::{Board, CardPile};

/// One duelist's possessions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards not yet drawn; drawn from the front.
    pub deck: CardPile,

    /// Drawn, not-yet-played cards.
    pub hand: CardPile,

    /// The player's hero.
    pub hero: Hero,

    /// Current mana pool.
    pub mana: u32,
}

impl PlayerState {
    /// A player with an empty hand and no mana.
    #[must_use]
    pub fn new(deck: CardPile, hero: Hero) -> Self {
        Self {
            deck,
            hand: CardPile::new(),
            hero,
            mana: 0,
        }
    }

    /// Move the first deck card into the hand. Returns the drawn card's
    /// name, or `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<&str> {
        let card = self.deck.draw_front()?;
        self.hand.push_back(card);
        self.hand.get(self.hand.len() - 1).map(Creature::name)
    }
}

/// Complete state of one duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelState {
    /// Rules configuration.
    pub config: DuelConfig,

    /// The four rows.
    pub board: Board,

    /// Both players.
    pub players: PlayerMap<PlayerState>,

    /// Phase and round.
    pub turn: TurnState,
}

impl DuelState {
    /// Create a duel in its `RoundStart` phase of round 1.
    ///
    /// Round-one bookkeeping (draw, mana) is left to the rules engine.
    #[must_use]
    pub fn new(config: DuelConfig, players: PlayerMap<PlayerState>, starting_player: PlayerId) -> Self {
        Self {
            board: Board::new(config.row_capacity),
            config,
            players,
            turn: TurnState::new(starting_player),
        }
    }

    /// The player allowed to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    /// The current player's opponent.
    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.current_player().opponent()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Check if `player` has a tank in their front row.
    #[must_use]
    pub fn has_front_tank(&self, player: PlayerId) -> bool {
        let front = self.config.layout.row(player, RowAffinity::Front);
        self.board.row(front).has_tank()
    }
}
