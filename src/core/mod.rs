//! Core duel types: players, configuration, actions, turn phases, state,
//! RNG and errors.
//!
//! Nothing here knows how actions are validated or resolved; that lives in
//! `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod phase;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, ShuffleAlgorithm};
pub use config::{DuelConfig, RowAffinity, RowId, RowLayout, ROW_COUNT};
pub use action::{Action, ActionRecord, Command, Coordinates, Query};
pub use phase::{Phase, TurnSlot, TurnState};
pub use state::{DuelState, PlayerState};
pub use error::{ActionError, CommandError, Error, ErrorCategory, Result, SetupError};
