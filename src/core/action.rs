//! Action representation.
//!
//! Two layers:
//! - `ActionRecord`: the raw record as it appears in the input, a command
//!   name plus optional parameters
//! - `Command`: the typed form, either a mutating `Action` or a read-only
//!   `Query`
//!
//! `ActionRecord::parse` converts the first into the second. A record that
//! names an unknown command or lacks a parameter its command needs is a
//! `CommandError`.
//!
//! Indices stay signed until they reach the board: a negative or
//! out-of-range position is a rejected action, not a malformed record.

use serde::{Deserialize, Serialize};

use super::error::CommandError;
use super::player::PlayerId;

/// Board position: `x` is the row index, `y` the slot within the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A mutating game action, always taken by the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the hand card at `hand_idx` into its mandatory row.
    PlaceCard { hand_idx: i64 },
    /// Attack an enemy creature.
    CardUsesAttack {
        attacker: Coordinates,
        attacked: Coordinates,
    },
    /// Use a creature's ability on another creature.
    CardUsesAbility {
        attacker: Coordinates,
        attacked: Coordinates,
    },
    /// Attack the enemy hero.
    UseAttackHero { attacker: Coordinates },
    /// Use the current player's hero ability on a whole row.
    UseHeroAbility { affected_row: i64 },
    /// Hand the turn to the other player.
    EndPlayerTurn,
}

impl Action {
    /// Command name as it appears in action records.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Action::PlaceCard { .. } => "placeCard",
            Action::CardUsesAttack { .. } => "cardUsesAttack",
            Action::CardUsesAbility { .. } => "cardUsesAbility",
            Action::UseAttackHero { .. } => "useAttackHero",
            Action::UseHeroAbility { .. } => "useHeroAbility",
            Action::EndPlayerTurn => "endPlayerTurn",
        }
    }
}

/// A read-only projection of the duel or session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Query {
    PlayerDeck(PlayerId),
    PlayerHero(PlayerId),
    CardsInHand(PlayerId),
    CardsOnTable,
    PlayerTurn,
    TotalGamesPlayed,
    PlayerOneWins,
    PlayerTwoWins,
    PlayerMana(PlayerId),
    CardAtPosition { x: i64, y: i64 },
    FrozenCardsOnTable,
}

impl Query {
    /// Command name as it appears in action records.
    #[must_use]
    pub fn command(&self) -> &'static str {
        match self {
            Query::PlayerDeck(_) => "getPlayerDeck",
            Query::PlayerHero(_) => "getPlayerHero",
            Query::CardsInHand(_) => "getCardsInHand",
            Query::CardsOnTable => "getCardsOnTable",
            Query::PlayerTurn => "getPlayerTurn",
            Query::TotalGamesPlayed => "getTotalGamesPlayed",
            Query::PlayerOneWins => "getPlayerOneWins",
            Query::PlayerTwoWins => "getPlayerTwoWins",
            Query::PlayerMana(_) => "getPlayerMana",
            Query::CardAtPosition { .. } => "getCardAtPosition",
            Query::FrozenCardsOnTable => "getFrozenCardsOnTable",
        }
    }
}

/// Typed form of an action record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Play(Action),
    Query(Query),
}

/// An action record as supplied by the input.
///
/// ## Example
///
/// ```
/// use ccg_duel::core::{Action, ActionRecord, Command, Coordinates};
///
/// let record: ActionRecord = serde_json::from_str(
///     r#"{"command": "useAttackHero", "cardAttacker": {"x": 2, "y": 0}}"#,
/// ).unwrap();
///
/// assert_eq!(
///     record.parse(),
///     Ok(Command::Play(Action::UseAttackHero { attacker: Coordinates::new(2, 0) }))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_idx: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_attacker: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_attacked: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_row: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_idx: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

impl ActionRecord {
    /// A record with only a command name.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Records whose command starts with `get` are read-only queries.
    #[must_use]
    pub fn is_query(&self) -> bool {
        self.command.starts_with("get")
    }

    /// Convert into a typed command.
    pub fn parse(&self) -> Result<Command, CommandError> {
        let command = match self.command.as_str() {
            "placeCard" => Command::Play(Action::PlaceCard {
                hand_idx: self.require(self.hand_idx, "handIdx")?,
            }),
            "cardUsesAttack" => Command::Play(Action::CardUsesAttack {
                attacker: self.require(self.card_attacker, "cardAttacker")?,
                attacked: self.require(self.card_attacked, "cardAttacked")?,
            }),
            "cardUsesAbility" => Command::Play(Action::CardUsesAbility {
                attacker: self.require(self.card_attacker, "cardAttacker")?,
                attacked: self.require(self.card_attacked, "cardAttacked")?,
            }),
            "useAttackHero" => Command::Play(Action::UseAttackHero {
                attacker: self.require(self.card_attacker, "cardAttacker")?,
            }),
            "useHeroAbility" => Command::Play(Action::UseHeroAbility {
                affected_row: self.require(self.affected_row, "affectedRow")?,
            }),
            "endPlayerTurn" => Command::Play(Action::EndPlayerTurn),
            "getPlayerDeck" => Command::Query(Query::PlayerDeck(self.player()?)),
            "getPlayerHero" => Command::Query(Query::PlayerHero(self.player()?)),
            "getCardsInHand" => Command::Query(Query::CardsInHand(self.player()?)),
            "getCardsOnTable" => Command::Query(Query::CardsOnTable),
            "getPlayerTurn" => Command::Query(Query::PlayerTurn),
            "getTotalGamesPlayed" => Command::Query(Query::TotalGamesPlayed),
            "getPlayerOneWins" => Command::Query(Query::PlayerOneWins),
            "getPlayerTwoWins" => Command::Query(Query::PlayerTwoWins),
            "getPlayerMana" => Command::Query(Query::PlayerMana(self.player()?)),
            "getCardAtPosition" => Command::Query(Query::CardAtPosition {
                x: self.require(self.x, "x")?,
                y: self.require(self.y, "y")?,
            }),
            "getFrozenCardsOnTable" => Command::Query(Query::FrozenCardsOnTable),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T, CommandError> {
        value.ok_or_else(|| CommandError::MissingField {
            command: self.command.clone(),
            field,
        })
    }

    fn player(&self) -> Result<PlayerId, CommandError> {
        let index = self.require(self.player_idx, "playerIdx")?;
        PlayerId::from_input_index(index).ok_or_else(|| CommandError::InvalidPlayer {
            command: self.command.clone(),
            index,
        })
    }
}
