//! # ccg-duel
//!
//! Rules engine for a two-player, turn-based creature card duel.
//!
//! Players place creatures on a four-row board, attack enemy creatures or
//! the enemy hero, use creature and hero abilities, and alternate turns
//! until a hero's health reaches zero.
//!
//! ## Design Principles
//!
//! 1. **Validate, then resolve**: Every action is checked in a fixed order
//!    and either rejected with a stable `ActionError` or applied in full.
//!    A rejected action never changes state.
//!
//! 2. **Closed card model**: Creatures and heroes are a closed set of
//!    variants (`CreatureKind`, `HeroAbility`), not a class hierarchy.
//!
//! 3. **Configuration Over Constants**: Hero health, row capacity, mana cap
//!    and the row ownership table live in `DuelConfig`.
//!
//! 4. **Explicit context**: Cross-duel counters live in a `Session`, passed
//!    where needed. No global state.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, actions, turn phases, state, errors
//! - `cards`: Card definitions, creature and hero instances, catalog
//! - `zones`: Rows, board, decks and hands
//! - `rules`: `RulesEngine` trait and the duel's validator/resolver
//! - `session`: Multi-duel driver, input records, queries, outcomes

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, ShuffleAlgorithm,
    RowId, RowAffinity, RowLayout, DuelConfig,
    Action, ActionRecord, Command, Coordinates, Query,
    Phase, TurnSlot, TurnState,
    DuelState, PlayerState,
    ActionError, ErrorCategory, CommandError, SetupError, Error, Result,
};

pub use crate::zones::{Board, CardPile, Row};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardView, Creature, CreatureAbility, CreatureKind,
    Hero, HeroAbility, HeroView, TargetSide,
};

pub use crate::rules::{DuelRules, GameResult, RulesEngine};

pub use crate::session::{Input, Outcome, Session, Stats};
