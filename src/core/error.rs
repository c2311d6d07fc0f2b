//! Error types.
//!
//! Rejected game actions are ordinary values: every `ActionError` variant
//! carries a stable message that is echoed back in the duel output, and a
//! rejected action leaves the duel state untouched.

use thiserror::Error;

/// Broad classification of a rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Insufficient mana.
    Resource,
    /// Row is full.
    Capacity,
    /// Target on the wrong side of the board.
    Ownership,
    /// Actor is frozen, has already acted, or is missing.
    State,
    /// Tank-priority violation.
    Targeting,
    /// Unrecognized or malformed command.
    Command,
}

/// Why a game action was rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionError {
    #[error("Not enough mana to place card on table.")]
    NotEnoughManaToPlace,

    #[error("Not enough mana to use hero's ability.")]
    NotEnoughManaForHero,

    #[error("Cannot place card on table since row is full.")]
    RowFull,

    #[error("Attacked card does not belong to the enemy.")]
    TargetNotEnemy,

    #[error("Attacked card does not belong to the current player.")]
    TargetNotOwn,

    #[error("Selected row does not belong to the enemy.")]
    RowNotEnemy,

    #[error("Selected row does not belong to the current player.")]
    RowNotOwn,

    #[error("Attacker card has already attacked this turn.")]
    AlreadyAttacked,

    #[error("Hero has already attacked this turn.")]
    HeroAlreadyAttacked,

    #[error("Attacker card is frozen.")]
    Frozen,

    #[error("No card available at that position.")]
    NoCardAtPosition,

    #[error("No card available at that hand index.")]
    NoCardInHand,

    #[error("Attacked card is not of type 'Tank'.")]
    NotTank,
}

impl ActionError {
    /// The category this rejection belongs to.
    #[must_use]
    pub fn category(self) -> ErrorCategory {
        match self {
            ActionError::NotEnoughManaToPlace | ActionError::NotEnoughManaForHero => {
                ErrorCategory::Resource
            }
            ActionError::RowFull => ErrorCategory::Capacity,
            ActionError::TargetNotEnemy
            | ActionError::TargetNotOwn
            | ActionError::RowNotEnemy
            | ActionError::RowNotOwn => ErrorCategory::Ownership,
            ActionError::AlreadyAttacked
            | ActionError::HeroAlreadyAttacked
            | ActionError::Frozen
            | ActionError::NoCardAtPosition
            | ActionError::NoCardInHand => ErrorCategory::State,
            ActionError::NotTank => ErrorCategory::Targeting,
        }
    }
}

/// An action record that could not be turned into a typed action.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("command `{command}` is missing field `{field}`")]
    MissingField {
        command: String,
        field: &'static str,
    },

    #[error("command `{command}` has invalid player index {index}")]
    InvalidPlayer { command: String, index: i64 },
}

impl CommandError {
    /// Every unparseable record falls in the command category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Command
    }
}

/// A setup record that cannot start a duel.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("unknown hero `{0}`")]
    UnknownHero(String),

    #[error("player {player} has no deck at index {index}")]
    DeckIndexOutOfRange { player: u8, index: usize },

    #[error("invalid starting player {0}")]
    InvalidStartingPlayer(i64),
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
