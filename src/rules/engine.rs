//! Rules engine trait.
//!
//! A `RulesEngine` defines:
//! - Which actions are legal in a duel state
//! - How a legal action modifies the state
//! - When the duel is over
//!
//! Validation and resolution are split: `validate` never mutates, and
//! `resolve` assumes its action already passed `validate`. `apply_action`
//! chains the two.

use crate::core::{Action, ActionError, DuelConfig, DuelState, PlayerId};

/// Result of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The player whose creature killed the enemy hero.
    Winner(PlayerId),
}

impl GameResult {
    #[must_use]
    pub fn winner(self) -> PlayerId {
        match self {
            GameResult::Winner(player) => player,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.winner() == player
    }

    /// Message announcing the end of the duel.
    #[must_use]
    pub fn message(self) -> String {
        format!("Player {} killed the enemy hero.", self.winner().ordinal())
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: First failing check wins; must not mutate
/// - `resolve`: Must be deterministic; only called on validated actions
/// - `candidate_actions`: May over-approximate, `legal_actions` filters
/// - `is_terminal`: Return `None` if the duel continues
pub trait RulesEngine {
    /// Get the duel configuration.
    fn config(&self) -> &DuelConfig;

    /// Decide whether the current player may take `action`.
    fn validate(&self, state: &DuelState, action: &Action) -> Result<(), ActionError>;

    /// Apply a validated action.
    ///
    /// Returns `Some(result)` when the action ended the duel.
    fn resolve(&self, state: &mut DuelState, action: &Action) -> Option<GameResult>;

    /// Every action worth validating in `state`.
    fn candidate_actions(&self, state: &DuelState) -> Vec<Action>;

    /// Check if the duel is over.
    fn is_terminal(&self, state: &DuelState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate every action the current player could take.
    ///
    /// Empty once the duel is over.
    fn legal_actions(&self, state: &DuelState) -> Vec<Action> {
        if self.is_terminal(state).is_some() {
            return Vec::new();
        }
        self.candidate_actions(state)
            .into_iter()
            .filter(|action| self.validate(state, action).is_ok())
            .collect()
    }

    /// Validate then resolve one action.
    ///
    /// After the duel is over every action is a no-op: `Ok(None)`, state
    /// untouched. A rejected action also leaves the state untouched.
    fn apply_action(&self, state: &mut DuelState, action: &Action) -> Result<Option<GameResult>, ActionError> {
        if self.is_terminal(state).is_some() {
            return Ok(None);
        }
        self.validate(state, action)?;
        Ok(self.resolve(state, action))
    }
}
