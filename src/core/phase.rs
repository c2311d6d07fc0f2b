//! Turn and round progression.
//!
//! A duel moves through an explicit sequence:
//!
//! ```text
//! RoundStart -> Turn(First) -> Turn(Second) -> RoundStart -> ...
//!                    \               \
//!                     +---------------+--> GameOver { winner }
//! ```
//!
//! `RoundStart` is transient: the round manager runs its bookkeeping and
//! immediately moves to `Turn(First)`. Only `endPlayerTurn` and a hero kill
//! drive transitions. `GameOver` is absorbing.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Which of the two turns of a round is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnSlot {
    /// The starting player's turn.
    First,
    /// The other player's turn.
    Second,
}

/// Current phase of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Round bookkeeping is pending.
    RoundStart,
    /// A player is taking actions.
    Turn(TurnSlot),
    /// A hero died. No further mutation is possible.
    GameOver { winner: PlayerId },
}

/// Phase plus round counter.
///
/// ## Example
///
/// ```
/// use ccg_duel::core::{Phase, PlayerId, TurnSlot, TurnState};
///
/// let mut turn = TurnState::new(PlayerId::TWO);
/// turn.finish_round_start();
/// assert_eq!(turn.current_player(), PlayerId::TWO);
///
/// assert!(!turn.end_turn());
/// assert_eq!(turn.current_player(), PlayerId::ONE);
///
/// assert!(turn.end_turn());
/// assert_eq!(turn.phase, Phase::RoundStart);
/// assert_eq!(turn.round, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase.
    pub phase: Phase,

    /// Round number, starting at 1.
    pub round: u32,

    /// Player who acts first every round.
    pub starting_player: PlayerId,
}

impl TurnState {
    /// A duel about to start its first round.
    #[must_use]
    pub fn new(starting_player: PlayerId) -> Self {
        Self {
            phase: Phase::RoundStart,
            round: 1,
            starting_player,
        }
    }

    /// The player allowed to act.
    ///
    /// After the game ends this is the player who won it.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        match self.phase {
            Phase::RoundStart | Phase::Turn(TurnSlot::First) => self.starting_player,
            Phase::Turn(TurnSlot::Second) => self.starting_player.opponent(),
            Phase::GameOver { winner } => winner,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Leave `RoundStart` once its bookkeeping is done.
    pub fn finish_round_start(&mut self) {
        if self.phase == Phase::RoundStart {
            self.phase = Phase::Turn(TurnSlot::First);
        }
    }

    /// End the current player's turn.
    ///
    /// Returns `true` when control came back to the starting player, in
    /// which case the round counter was incremented and the phase is
    /// `RoundStart`.
    pub fn end_turn(&mut self) -> bool {
        match self.phase {
            Phase::Turn(TurnSlot::First) => {
                self.phase = Phase::Turn(TurnSlot::Second);
                false
            }
            Phase::Turn(TurnSlot::Second) => {
                self.round += 1;
                self.phase = Phase::RoundStart;
                true
            }
            Phase::RoundStart | Phase::GameOver { .. } => false,
        }
    }

    /// Enter the absorbing `GameOver` phase.
    pub fn end_game(&mut self, winner: PlayerId) {
        self.phase = Phase::GameOver { winner };
    }
}
